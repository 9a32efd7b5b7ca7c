//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — manifest, scanned module and report/output structs.
//! - `constants.rs` — built-in module lists, templates and marker text.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema. Keep changes in sync with
//! `docs/contracts/*`.

pub mod constants;
pub mod models;
