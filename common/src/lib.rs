//! # netutil common
//!
//! Small network primitives shared by the `netutil` tools:
//!
//! * [`network::reachability`]: poll a TCP address until it accepts connections.
//! * [`network::hostport`]: turn a URL into a dialable `host:port`.
//! * [`network::listener`]: bind a listener on a loopback address with an ephemeral port.
//! * [`network::loopback`]: find a usable loopback IP.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

pub use error::{NetError, Result};
