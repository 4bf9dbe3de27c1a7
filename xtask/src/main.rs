use clap::{Parser, Subcommand};

use crate::{fuzz::Fuzz, test::Test};

mod doc;
mod fuzz;
mod test;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build docs for the liloconf-core crate
    Doc {
        /// Document private items in crate
        #[arg(short, long, default_value_t = false)]
        private: bool,

        /// Open in web browser after documenting
        #[arg(short, long, default_value_t = false)]
        open: bool,
    },

    /// Run unit tests and clippy on host
    Test {
        #[command(subcommand)]
        command: Option<Test>,
    },

    /// Run a fuzz target with cargo-fuzz
    Fuzz {
        #[command(subcommand)]
        command: Fuzz,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Doc { private, open } => doc::doc_crate(private, open)?,
        Commands::Test { command } => test::test_crate(command)?,
        Commands::Fuzz { command } => fuzz::fuzz_parsers(command)?,
    }
    Ok(())
}
