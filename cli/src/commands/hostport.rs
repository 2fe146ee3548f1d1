use anyhow::Context;
use netutil_common::network::hostport::host_port;

pub fn hostport(url: &str) -> anyhow::Result<()> {
    let target = host_port(url).context("deriving dial target")?;
    println!("{target}");
    Ok(())
}
