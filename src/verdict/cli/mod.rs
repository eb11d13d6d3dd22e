//! # CLI Layer
//!
//! One possible UI client for verdict. This is the only place that parses
//! arguments, installs the log subscriber, and writes to stdout/stderr.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and dispatch to `VerdictApi`
//! - `render`: turns a `CmdResult` into text or JSON

mod commands;
mod render;
mod setup;

pub use commands::run;
