//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: one entry point
//! for every verdict operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (vocabulary names, raw strings, readers)
//! - **Returns structured types** (`CmdResult`), never formatted text
//!
//! Business logic lives in the commands and in the core modules
//! ([`symbol`](crate::symbol), [`state`](crate::state), [`dos`](crate::dos)).

use crate::commands;
use crate::error::Result;
use std::io::BufRead;

pub struct VerdictApi {
    paths: commands::VerdictPaths,
}

impl VerdictApi {
    pub fn new(paths: commands::VerdictPaths) -> Self {
        Self { paths }
    }

    pub fn resolve<I: AsRef<str>>(
        &self,
        kind: commands::VocabularyKind,
        inputs: &[I],
    ) -> commands::CmdResult {
        commands::resolve::run(kind, inputs)
    }

    pub fn classify<I: AsRef<str>>(&self, inputs: &[I]) -> commands::CmdResult {
        commands::classify::run(inputs)
    }

    pub fn normalize<I: AsRef<str>>(&self, inputs: &[I]) -> commands::CmdResult {
        commands::normalize::run(inputs)
    }

    pub fn choices(&self, kind: commands::VocabularyKind) -> commands::CmdResult {
        commands::choices::run(kind)
    }

    pub fn report<R: BufRead>(&self, reader: R) -> Result<commands::CmdResult> {
        commands::report::run(reader)
    }

    pub fn register_endpoint(
        &self,
        hostname: &str,
        dos: &str,
        edr_id: Option<&str>,
    ) -> commands::CmdResult {
        commands::endpoint::run(hostname, dos, edr_id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    Classification, CmdMessage, CmdResult, MessageLevel, NormalizedDos, SymbolInfo, VerdictPaths,
    VocabularyKind,
};
