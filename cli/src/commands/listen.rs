use anyhow::Context;
use netutil_common::network::listener;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub async fn listen() -> anyhow::Result<()> {
    let std_listener = listener::listen_on_local_random_port()?;
    let addr = std_listener.local_addr()?;
    std_listener
        .set_nonblocking(true)
        .context("switching listener to non-blocking mode")?;
    let listener = TcpListener::from_std(std_listener)?;

    println!("{addr}");
    info!("Listening on {addr}, press Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down listener on {addr}");
                return Ok(());
            }
            accepted = listener.accept() => match accepted {
                Ok((_stream, peer)) => info!("Connection from {peer}"),
                Err(err) => warn!("Accept failed: {err}"),
            },
        }
    }
}
