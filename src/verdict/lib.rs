//! # Verdict Architecture
//!
//! Verdict is the value-classification core of a security-testing client. The
//! surrounding client (HTTP transport, account workflows, uploads) is thin
//! pass-through; the part worth getting right is how untrusted values become
//! known symbols, and how a test's raw exit code becomes a protection state.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns inputs into `CmdResult`s, no I/O assumptions       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (symbol.rs, codes.rs, state.rs, dos.rs)               │
//! │  - Immutable vocabularies, total resolution, classification │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Resolution Never Fails
//!
//! Every lookup in the core returns a member of its vocabulary. Unknown input
//! becomes the vocabulary's fallback symbol, never an error. The only side
//! effect is a `tracing` warning for an unknown numeric exit code.
//!
//! ## Module Overview
//!
//! - [`symbol`]: The `Vocabulary` trait and the shared resolution policy
//! - [`codes`]: Run codes, modes, permissions, exit codes, partners, audit events
//! - [`state`]: Exit code → protection state classification
//! - [`dos`]: Architecture tokens and platform normalization
//! - [`report`]: Probe result parsing and per-state tallies
//! - [`endpoint`]: Endpoint registration payload
//! - [`api`]: The API facade
//! - [`commands`]: Per-command logic
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codes;
pub mod commands;
pub mod config;
pub mod dos;
pub mod endpoint;
pub mod error;
pub mod report;
pub mod state;
pub mod symbol;
