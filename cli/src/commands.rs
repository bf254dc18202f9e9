pub mod list;
pub mod ping;

use std::time::Duration;

use clap::{ArgAction, Parser};
use vantage_common::config::{Config, DEFAULT_ENDPOINT, DEFAULT_HOST};
use vantage_common::location::LocationCode;

#[derive(Parser)]
#[command(name = "vantage")]
#[command(about = "Ranks remote vantage points by their round-trip latency to a host.")]
#[command(version)]
pub struct CommandLine {
    /// Hostname to ping
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Locations to test, single codes or region groups (as, eu, us) [default: all]
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub locations: Vec<LocationCode>,

    /// Per-location request timeout in seconds (at least 1)
    #[arg(
        short,
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Measurement endpoint, `{id}` is replaced by the location's remote id
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print less; repeat to print only the table and warnings
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// List known locations and region groups, then exit
    #[arg(long)]
    pub list: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            host: self.host.clone(),
            timeout: Duration::from_secs(self.timeout),
            endpoint: self.endpoint.clone(),
            quiet: self.quiet,
        }
    }
}
