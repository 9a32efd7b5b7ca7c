//! Service layer containing the amalgamation pipeline and side-effect helpers.
//!
//! ## Service map
//! - `scan.rs` — split one module into include targets and region code.
//! - `includes.rs` — ordered, deduplicated include set.
//! - `template.rs` — `{{placeholder}}` substitution and template loading.
//! - `amalgamate.rs` — header/source amalgamation, fully in memory.
//! - `manifest.rs` — `amalgamate.toml` loading and validation.
//! - `writer.rs` — atomic output writes and on-disk comparison.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Reading and rendering never touch output files.
//! - Writes happen only in `writer.rs`, after every output is rendered.
//! - Keep command handlers thin; delegate to services.

pub mod amalgamate;
pub mod includes;
pub mod manifest;
pub mod output;
pub mod scan;
pub mod template;
pub mod writer;
