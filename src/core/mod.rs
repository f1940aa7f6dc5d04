//! Core promotion logic: the `gsutil` wrapper and the interactive flow.

pub mod gsutil;
pub mod promote;
