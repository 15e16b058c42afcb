use clap::{Arg, ArgMatches, Command};
use crate::config::config::Config;
use crate::models::usage::UsageSnapshot;

pub(crate) fn command_config() -> Command {
    Command::new("usage")
        .about("Show resource usage of the node, or of another instance")
        .arg(
            Arg::new("instance")
                .long("instance")
                .short('i')
                .help("Address of the instance to query")
        )
}

fn format_bytes(bytes: u64) -> String {
    format!("{:.2} GiB", bytes as f64 / 1024.0 / 1024.0 / 1024.0)
}

pub(crate) async fn execute(args: &ArgMatches, configuration: Config, client: &reqwest::Client) {
    let mut query = format!("{}/usage", configuration.get_api_url());
    if let Some(instance) = args.get_one::<String>("instance") {
        query = format!("{}/{}", query, instance);
    }

    let body = match client.get(&query).send().await {
        Ok(res) => match res.text().await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("Failed to read response: {}", e);
                return;
            }
        },
        Err(err) => {
            eprintln!("Failed to fetch usage: {}", err);
            return;
        }
    };

    match serde_json::from_str::<UsageSnapshot>(&body) {
        Ok(data) => {
            println!("\nResource usage");
            println!("──────────────");
            println!("CPU     : {:.2} %", data.cpu);
            println!("Memory  : {}", format_bytes(data.memory));
            println!("Storage : {}", format_bytes(data.storage));
        }
        Err(_) => println!("{}", body),
    }
}
