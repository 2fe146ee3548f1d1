//! Integration tests that exercise the utilities together against real loopback sockets.

#[cfg(test)]
mod util;


#[cfg(test)]
mod loopback;
