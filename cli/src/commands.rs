pub mod hostport;
pub mod listen;
pub mod localhost;
pub mod wait;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netutil")]
#[command(about = "Small helpers for dialing and listening on local services.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wait until a TCP address accepts connections
    #[command(alias = "w")]
    Wait {
        /// Address in host:port form
        addr: String,
        /// Give up after this many seconds
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,
        /// Milliseconds between two attempts
        #[arg(short, long, default_value_t = 100)]
        interval: u64,
    },
    /// Print the host:port a URL dials to
    #[command(alias = "h")]
    Hostport { url: String },
    /// Print the loopback address of this machine
    #[command(alias = "l")]
    Localhost,
    /// Listen on a random loopback port and log incoming connections
    Listen,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
