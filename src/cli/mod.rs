//! Command-line interface module.
//!
//! Provides argument parsing; the tool itself is driven by terminal prompts.

pub mod args;
