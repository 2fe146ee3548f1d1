use pnet::datalink::{MacAddr, NetworkInterface};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use netutil_common::network::loopback::{localhost, select_loopback_ip};

use super::util::{IFF_BROADCAST, IFF_LOOPBACK, IFF_UP, ni, v4, v6};

/*************************************************************
                  Tests for loopback selection
**************************************************************/

#[test]
fn localhost_is_loopback() {
    let ip = localhost().unwrap();
    assert!(ip.is_loopback(), "{ip} is not a loopback address");
}

#[test]
fn selects_lo_among_all() {
    assert_eq!(select_loopback_ip(&iface_all()), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
}

#[test]
fn selects_nothing_without_loopback() {
    let interfaces: Vec<NetworkInterface> = vec![enp9s0(), wlan0(), docker0()];
    let selected = select_loopback_ip(&interfaces);
    assert!(selected.is_none(), "Expected no address, received: {selected:?}");
}

#[test]
fn skips_down_loopback() {
    let interfaces: Vec<NetworkInterface> = vec![lo_down(), enp9s0(), lo6()];
    assert_eq!(select_loopback_ip(&interfaces), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
}

#[test]
fn first_up_loopback_wins() {
    let interfaces: Vec<NetworkInterface> = vec![lo6(), lo()];
    assert_eq!(select_loopback_ip(&interfaces), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Vec<NetworkInterface> {
    vec![enp9s0(), wlan0(), lo(), docker0(), lo6()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        IFF_UP | IFF_LOOPBACK,
    )
}

fn lo_down() -> NetworkInterface {
    ni("lo", 1, None, &[v4(127, 0, 0, 1, 8)], IFF_LOOPBACK)
}

fn lo6() -> NetworkInterface {
    ni("lo6", 7, None, &[v6("::1", 128)], IFF_UP | IFF_LOOPBACK)
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0x10, 0xff, 0xe0, 0x1a, 0x2b, 0x3c)),
        &[v4(192, 168, 1, 20, 24), v6("fe80::12ff:e0ff:fe1a:2b3c", 64)],
        IFF_UP | IFF_BROADCAST,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x20, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e)),
        &[v4(10, 0, 0, 15, 24)],
        IFF_UP | IFF_BROADCAST,
    )
}

fn docker0() -> NetworkInterface {
    ni(
        "docker0",
        4,
        Some(MacAddr::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x01)),
        &[v4(172, 17, 0, 1, 16)],
        IFF_BROADCAST,
    )
}
