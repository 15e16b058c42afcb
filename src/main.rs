use std::process;
use clap::{Arg, Command};

#[macro_use]
extern crate log;
extern crate env_logger;

mod commands;

mod runtime;
mod discovery;
mod sampler;

mod models {
    pub(crate) mod node;
    pub(crate) mod stress_spec;
    pub(crate) mod usage;
}

mod api;

mod config {
    pub(crate) mod api;
    pub(crate) mod config;
    pub(crate) mod registry;
    pub(crate) mod stress;
}

#[cfg(test)]
mod fixtures;

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut app = Command::new("carbonifer-stress")
        .version("0.1.0")
        .about("Apply synthetic load on the nodes of a fleet")
        .arg(
            Arg::new("host")
                .required(false)
                .global(true)
                .help("Agent host the client commands talk to")
                .long("host")
        )
        .subcommand(
            Command::new("server")
                .about("Run the node agent")
                .flatten_help(true)
                .subcommand(
                    commands::server::command_config(),
                )
        )
        .subcommand(
            commands::instances::command_config(),
        )
        .subcommand(
            commands::stress::command_config(),
        )
        .subcommand(
            commands::usage::command_config(),
        );

    let matches = app.clone().get_matches();
    let mut config = config::config::load_config();

    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }

    let client = reqwest::Client::new();

    match matches.subcommand() {
        Some(("server", sub_matches)) => {
            let server_command = sub_matches.subcommand().unwrap_or(("start", sub_matches));
            match server_command {
                ("start", sub_matches) => {
                    commands::server::execute(
                        sub_matches,
                        config,
                    ).await
                }
                _ => {}
            }
        }
        Some(("instances", sub_matches)) => {
            commands::instances::execute(
                sub_matches,
                config,
                &client,
            ).await
        }
        Some(("stress", sub_matches)) => {
            commands::stress::execute(
                sub_matches,
                config,
                &client,
            ).await
        }
        Some(("usage", sub_matches)) => {
            commands::usage::execute(
                sub_matches,
                config,
                &client,
            ).await
        }
        _ => {
            if let Err(e) = app.print_help() {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}
