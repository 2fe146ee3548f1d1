//! # Loopback Discovery
//!
//! Finds an IP address that routes back to this host. Two strategies are
//! tried in order and the first one that yields an address wins:
//!
//! 1. Resolving `localhost` through the platform resolver.
//! 2. Walking the interface table for an up loopback device.
//!
//! Nothing is cached, every call asks the OS again.

use std::net::{IpAddr, ToSocketAddrs};

use pnet::datalink::{self, NetworkInterface};
use tracing::debug;

use crate::error::{NetError, Result};
use crate::utils::interface::NetworkInterfaceExtension;

type Strategy = fn() -> Option<IpAddr>;

const STRATEGIES: [(&str, Strategy); 2] = [
    ("localhost lookup", localhost_lookup),
    ("interface scan", loopback_ip),
];

/// Returns the first address found when resolving `localhost`.
/// If that fails, looks for an address on the loopback interfaces.
pub fn localhost() -> Result<IpAddr> {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let ip = strategy();
            match ip {
                Some(ip) => debug!("{name} found loopback ip {ip}"),
                None => debug!("{name} found no loopback ip"),
            }
            ip
        })
        .ok_or(NetError::NoLoopbackFound)
}

fn localhost_lookup() -> Option<IpAddr> {
    match ("localhost", 0).to_socket_addrs() {
        Ok(mut addrs) => addrs.next().map(|addr| addr.ip()),
        Err(err) => {
            debug!("resolving localhost failed: {err}");
            None
        }
    }
}

fn loopback_ip() -> Option<IpAddr> {
    select_loopback_ip(&datalink::interfaces())
}

/// Picks the first loopback address of the first up loopback interface that has one.
pub fn select_loopback_ip(interfaces: &[NetworkInterface]) -> Option<IpAddr> {
    interfaces
        .iter()
        .filter(|iface| iface.is_up_loopback())
        .find_map(|iface| iface.loopback_ips().into_iter().next())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
