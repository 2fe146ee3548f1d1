use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
    /// No connection could be made before the deadline.
    #[error("{addr} unreachable for {max_wait:?}")]
    Timeout { addr: String, max_wait: Duration },

    #[error("waiting for {addr} was cancelled")]
    Cancelled { addr: String },

    #[error("could not parse {input:?} as a url: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("url {input:?} has no scheme")]
    MissingScheme { input: String },

    #[error("url {input:?} has no host")]
    MissingHost { input: String },

    /// Neither name resolution nor the interface table produced a loopback address.
    #[error("no loopback ip found")]
    NoLoopbackFound,

    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NetError>;
