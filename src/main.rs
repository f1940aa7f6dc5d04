//! Entry point: wire the terminal and the `gsutil` client into the flow.

mod cli;
mod constants;
mod core;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::cli::args::Args;
use crate::core::gsutil::Gsutil;
use crate::core::promote;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Stray arguments are rejected here; the tool itself is prompt-driven.
    Args::parse();

    let gsutil = Gsutil::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let code = promote::run(&gsutil, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(ExitCode::from(code))
}
