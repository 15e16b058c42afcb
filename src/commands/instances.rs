use clap::{ArgMatches, Command};
use crate::config::config::Config;

pub(crate) fn command_config() -> Command {
    Command::new("instances")
        .about("List the nodes registered for this service")
}

pub(crate) async fn execute(_args: &ArgMatches, configuration: Config, client: &reqwest::Client) {
    let query = format!("{}/instances", configuration.get_api_url());

    match client.get(&query).send().await {
        Ok(res) => match res.text().await {
            Ok(body) => print!("{}", body),
            Err(e) => eprintln!("Failed to read response: {}", e),
        },
        Err(err) => {
            eprintln!("Failed to fetch instances: {}", err);
        }
    }
}
