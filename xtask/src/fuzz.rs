use clap::Subcommand;
use duct::cmd;

#[derive(Subcommand)]
pub enum Fuzz {
    /// Run lilo.conf document parser
    Lilo,

    /// Run GRUB menu.lst document parser
    Grub,

    /// Run path expression parser
    Path,
}

pub fn fuzz_parsers(command: Fuzz) -> anyhow::Result<()> {
    let mut args = vec!["fuzz", "run"];
    match command {
        Fuzz::Lilo => args.push("lilo"),
        Fuzz::Grub => args.push("grub"),
        Fuzz::Path => args.push("path"),
    }

    cmd!("cargo", "install", "cargo-fuzz").run()?; // will not install if its already installed
    cmd("cargo", args).run()?;
    Ok(())
}
