mod commands;
mod terminal;

use commands::{CommandLine, list, ping};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);

    if commands.list {
        print::header("known locations", commands.quiet);
        list::list();
        return Ok(());
    }

    let cfg = commands.to_config();

    print::header("measuring latency", cfg.quiet);
    ping::ping(&commands.locations, &cfg).await
}
