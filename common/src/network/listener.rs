use std::net::{IpAddr, SocketAddr, TcpListener};

use tracing::debug;

use crate::error::{NetError, Result};
use crate::network::loopback;

/// Returns a TCP listener on a loopback address (see [`loopback::localhost`])
/// and a port chosen by the OS.
///
/// The socket is closed when the listener is dropped.
pub fn listen_on_local_random_port() -> Result<TcpListener> {
    let ip: IpAddr = loopback::localhost()?;
    let addr = SocketAddr::new(ip, 0);
    let listener = TcpListener::bind(addr).map_err(|source| NetError::Bind { addr, source })?;

    if let Ok(local) = listener.local_addr() {
        debug!("listening on {local}");
    }
    Ok(listener)
}
