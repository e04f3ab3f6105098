use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}
