use netutil_common::network::loopback;

pub fn localhost() -> anyhow::Result<()> {
    let ip = loopback::localhost()?;
    println!("{ip}");
    Ok(())
}
