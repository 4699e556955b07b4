use std::process::exit;
use clap::Parser;
use log::{error, info};
use btshow::common::common::{format_scrape_json, format_scrape_text, setup_logging};
use btshow::config::structs::configuration::Configuration;
use btshow::structs::{Cli, Command};
use btshow::udp::structs::scrape_client::ScrapeClient;

#[tracing::instrument(level = "debug")]
fn main()
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Scrape { udp_tracker_host, timeout, json, info_hashes } => {
            if let Some(timeout) = timeout {
                config.tracker_client.receive_timeout = timeout;
            }
            let host = udp_tracker_host.unwrap_or_else(|| config.tracker_client.udp_tracker_host.clone());

            let mut client = match ScrapeClient::connect(&host, &config.tracker_client) {
                Ok(client) => client,
                Err(e) => {
                    error!("[UDP] Unable to reach {host}: {e}");
                    exit(1)
                }
            };

            let result = client.scrape(&info_hashes);
            if let Err(e) = client.close() {
                error!("[UDP] Error closing the socket: {e}");
            }
            let result = match result {
                Ok(result) => result,
                Err(e) => {
                    error!("[SCRAPE] Scrape of {host} failed: {e}");
                    exit(1)
                }
            };

            if json {
                match format_scrape_json(&info_hashes, &result) {
                    Ok(output) => println!("{output}"),
                    Err(e) => {
                        error!("[SCRAPE] Unable to render JSON: {e}");
                        exit(1)
                    }
                }
            } else {
                print!("{}", format_scrape_text(&info_hashes, &result));
            }
        }
    }
}
