pub mod hostport;
pub mod listener;
pub mod loopback;
pub mod reachability;
