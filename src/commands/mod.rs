//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `build.rs` — build/check: render outputs, then write or compare.
//! - `inspect.rs` — list/includes: read-only views of the manifest.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate amalgamation logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod build;
pub mod inspect;

pub use build::handle_build_commands;
pub use inspect::handle_inspect_commands;
