use std::net::IpAddr;

use pnet::datalink::NetworkInterface;

// Generic interface helpers
pub trait NetworkInterfaceExtension {
    /// True when the interface is both administratively up and a loopback device.
    fn is_up_loopback(&self) -> bool;
    /// Loopback addresses assigned to the interface, in the order the OS reports them.
    fn loopback_ips(&self) -> Vec<IpAddr>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn is_up_loopback(&self) -> bool {
        self.is_up() && self.is_loopback()
    }

    fn loopback_ips(&self) -> Vec<IpAddr> {
        self.ips
            .iter()
            .map(|net| net.ip())
            .filter(|ip| ip.is_loopback())
            .collect()
    }
}
