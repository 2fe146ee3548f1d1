use std::time::Duration;

use crate::network::reachability::POLL_INTERVAL;

const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(30);

/// Settings for the reachability polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Upper bound on the total time spent polling.
    ///
    /// A zero duration means no connection is ever attempted.
    pub max_wait: Duration,
    /// Pause between two failed connection attempts.
    pub poll_interval: Duration,
}

impl ProbeConfig {
    pub fn new(max_wait: Duration) -> Self {
        Self {
            max_wait,
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WAIT)
    }
}
