//! Amalgamates separately developed C++ library modules into a single
//! combined header and an optional combined source file.
//!
//! ```text
//! manifest ──► scan modules (in order) ──► includes (deduplicated)
//!                                      └─► region code (concatenated)
//!          ──► render template ──► write atomically
//! ```
//!
//! Every output is rendered in memory first; nothing is written unless all
//! modules could be read.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use error::{error_code, AmalgamateError};
pub use services::amalgamate::*;
pub use services::includes::*;
pub use services::manifest::*;
pub use services::output::*;
pub use services::scan::*;
pub use services::template::*;
pub use services::writer::*;
