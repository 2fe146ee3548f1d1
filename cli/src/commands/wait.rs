use std::time::Duration;

use anyhow::Context;
use netutil_common::config::ProbeConfig;
use netutil_common::network::reachability;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn wait(addr: &str, timeout_secs: u64, interval_ms: u64) -> anyhow::Result<()> {
    let cfg = ProbeConfig::new(Duration::from_secs(timeout_secs))
        .with_poll_interval(Duration::from_millis(interval_ms));

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, giving up");
            trigger.cancel();
        }
    });

    info!("Waiting up to {timeout_secs}s for {addr}");
    reachability::wait_reachable(addr, &cfg, &cancel)
        .await
        .with_context(|| format!("waiting for {addr}"))?;
    info!("{addr} is reachable");
    Ok(())
}
