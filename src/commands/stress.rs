use clap::{Arg, ArgMatches, Command};
use crate::config::config::Config;

pub(crate) fn command_config() -> Command {
    Command::new("stress")
        .about("Apply load on the node, or on another instance")
        .arg(
            Arg::new("instance")
                .long("instance")
                .short('i')
                .help("Address of the instance to stress")
        )
        .arg(
            Arg::new("cpu")
                .long("cpu")
                .value_parser(clap::value_parser!(u64).range(0..=100))
                .help("CPU load in percent")
        )
        .arg(
            Arg::new("ram")
                .long("ram")
                .value_parser(clap::value_parser!(u64))
                .help("Memory to allocate, in megabytes")
        )
        .arg(
            Arg::new("storage")
                .long("storage")
                .value_parser(clap::value_parser!(u64))
                .help("Storage to write, in megabytes")
        )
}

pub(crate) fn build_query(args: &ArgMatches) -> Vec<(&'static str, u64)> {
    ["cpu", "ram", "storage"]
        .into_iter()
        .filter_map(|name| args.get_one::<u64>(name).map(|value| (name, *value)))
        .collect()
}

pub(crate) async fn execute(args: &ArgMatches, configuration: Config, client: &reqwest::Client) {
    let mut query = format!("{}/stress", configuration.get_api_url());
    if let Some(instance) = args.get_one::<String>("instance") {
        query = format!("{}/{}", query, instance);
    }

    let response = client
        .get(&query)
        .query(&build_query(args))
        .send()
        .await;

    match response {
        Ok(res) => match res.text().await {
            Ok(body) if body.is_empty() => println!("No response body, check the agent logs"),
            Ok(body) => print!("{}", body),
            Err(e) => eprintln!("Failed to read response: {}", e),
        },
        Err(err) => {
            eprintln!("Failed to apply stress: {}", err);
        }
    }
}
