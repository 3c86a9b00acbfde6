use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("cybersys version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
