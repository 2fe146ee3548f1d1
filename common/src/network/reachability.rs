use std::net::{Shutdown, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::config::ProbeConfig;
use crate::error::{NetError, Result};

/// Pause between two failed connection attempts.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Tries to make a TCP connection to `addr` regularly.
///
/// Returns [`NetError::Timeout`] if no connection could be made before
/// `max_wait` elapsed. A zero `max_wait` fails without trying.
pub fn await_reachable(addr: &str, max_wait: Duration) -> Result<()> {
    await_reachable_with(addr, &ProbeConfig::new(max_wait))
}

/// Same as [`await_reachable`], with the timing taken from `cfg`.
pub fn await_reachable_with(addr: &str, cfg: &ProbeConfig) -> Result<()> {
    // An overflowing deadline never expires.
    let deadline: Option<Instant> = Instant::now().checked_add(cfg.max_wait);
    let mut attempts: u32 = 0;

    while deadline.is_none_or(|d| Instant::now() < d) {
        attempts += 1;
        match TcpStream::connect(addr) {
            Ok(stream) => {
                let _ = stream.shutdown(Shutdown::Both);
                debug!("{addr} reachable after {attempts} attempt(s)");
                return Ok(());
            }
            Err(err) => trace!("attempt {attempts} to reach {addr} failed: {err}"),
        }
        thread::sleep(cfg.poll_interval);
    }

    debug!("{addr} still unreachable after {attempts} attempt(s)");
    Err(timeout(addr, cfg))
}

/// Async counterpart of [`await_reachable_with`] that can be aborted through `cancel`.
///
/// Success and timeout behave exactly as in the blocking version; a fired
/// token yields [`NetError::Cancelled`].
pub async fn wait_reachable(addr: &str, cfg: &ProbeConfig, cancel: &CancellationToken) -> Result<()> {
    let deadline: Option<tokio::time::Instant> = tokio::time::Instant::now().checked_add(cfg.max_wait);
    let mut attempts: u32 = 0;

    while deadline.is_none_or(|d| tokio::time::Instant::now() < d) {
        if cancel.is_cancelled() {
            return Err(cancelled(addr));
        }
        attempts += 1;

        let connect = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled(addr)),
            res = tokio::net::TcpStream::connect(addr) => res,
        };
        match connect {
            Ok(stream) => {
                drop(stream);
                debug!("{addr} reachable after {attempts} attempt(s)");
                return Ok(());
            }
            Err(err) => trace!("attempt {attempts} to reach {addr} failed: {err}"),
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled(addr)),
            _ = tokio::time::sleep(cfg.poll_interval) => {}
        }
    }

    debug!("{addr} still unreachable after {attempts} attempt(s)");
    Err(timeout(addr, cfg))
}

fn timeout(addr: &str, cfg: &ProbeConfig) -> NetError {
    NetError::Timeout {
        addr: addr.to_string(),
        max_wait: cfg.max_wait,
    }
}

fn cancelled(addr: &str) -> NetError {
    NetError::Cancelled { addr: addr.to_string() }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
