use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AmalgamateError {
    #[error("failed to read module {}", path.display())]
    ModuleRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
    #[error("failed to read template {}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template error: {0}")]
    Template(String),
    #[error("failed to read output {}", path.display())]
    OutputRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AmalgamateError {
    /// Stable code used in `--json` error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            AmalgamateError::ModuleRead { .. } => "MODULE_READ",
            AmalgamateError::Manifest { .. } => "MANIFEST",
            AmalgamateError::TemplateRead { .. } | AmalgamateError::Template(_) => "TEMPLATE",
            AmalgamateError::OutputRead { .. } => "OUTPUT_READ",
            AmalgamateError::Write { .. } => "WRITE",
        }
    }
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|e| e.downcast_ref::<AmalgamateError>())
        .map(AmalgamateError::code)
        .unwrap_or("INTERNAL")
}
