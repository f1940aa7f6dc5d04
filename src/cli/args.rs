//! Command-line argument definitions.

use clap::Parser;

/// Promote a Kokoro-built CT4E repo to the public release bucket
///
/// Takes no arguments: the staged-repo URL and the release version are
/// collected interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args;
