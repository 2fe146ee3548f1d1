mod commands;
mod terminal;

use commands::{CommandLine, Commands, hostport, listen, localhost, wait};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Wait { addr, timeout, interval } => wait::wait(&addr, timeout, interval).await,
        Commands::Hostport { url } => hostport::hostport(&url),
        Commands::Localhost => localhost::localhost(),
        Commands::Listen => listen::listen().await,
    }
}
