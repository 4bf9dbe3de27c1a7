use clap::Subcommand;
use duct::cmd;

#[derive(Subcommand)]
pub enum Test {
    /// Run clippy over the workspace
    Clippy,

    /// Run unit tests for the library and command line crates
    Unit,
}

pub fn test_crate(command: Option<Test>) -> anyhow::Result<()> {
    match command {
        Some(Test::Clippy) => clippy()?,
        Some(Test::Unit) => unit()?,
        None => {
            clippy()?;
            unit()?;
        }
    }
    Ok(())
}

fn clippy() -> anyhow::Result<()> {
    cmd!("cargo", "clippy", "--workspace", "--all-targets").run()?;
    Ok(())
}

fn unit() -> anyhow::Result<()> {
    cmd!(
        "cargo",
        "test",
        "--package",
        "liloconf-core",
        "--package",
        "liloconf-cli"
    )
    .run()?;
    Ok(())
}
