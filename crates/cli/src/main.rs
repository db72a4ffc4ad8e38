mod describe;

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::describe::describe;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe the structure of an L3D model file.
    Describe { path: PathBuf },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Args { command } = Args::parse();

    match command {
        Command::Describe { path } => describe(&path)?,
    }

    Ok(())
}
