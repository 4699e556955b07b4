use clap::{Parser, Subcommand};
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if it does not exist.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query swarm statistics of one or more torrents.
    Scrape {
        /// UDP tracker to query, as host:port. Defaults to the configured tracker.
        #[arg(short = 'u', long)]
        udp_tracker_host: Option<String>,
        /// Receive timeout in seconds, 0 waits forever.
        #[arg(long)]
        timeout: Option<u64>,
        /// Print the statistics as JSON.
        #[arg(long)]
        json: bool,
        /// Info hashes as 40 hexadecimal characters.
        #[arg(required = true, num_args = 1.., value_parser = parse_info_hash)]
        info_hashes: Vec<InfoHash>
    }
}

fn parse_info_hash(value: &str) -> Result<InfoHash, String> {
    value.parse::<InfoHash>().map_err(|_| format!("'{value}' is not a 40 character hex info hash"))
}
