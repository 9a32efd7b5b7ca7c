use crate::cli::ModuleKind;
use crate::domain::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_version() -> String {
    DEFAULT_LIB_VERSION.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn paths(list: &[&str]) -> Vec<PathBuf> {
    list.iter().map(PathBuf::from).collect()
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Contents of `amalgamate.toml`.
///
/// Every field is optional in the file. A manifest without a `[source]`
/// table only produces the combined header, while the built-in default
/// produces both outputs.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub header: HeaderTarget,
    #[serde(default)]
    pub source: Option<SourceTarget>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: default_version(),
            namespace: default_namespace(),
            header: HeaderTarget::default(),
            source: Some(SourceTarget::default()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderTarget {
    pub output: PathBuf,
    pub guard: String,
    pub modules: Vec<PathBuf>,
    pub template: Option<PathBuf>,
}

impl Default for HeaderTarget {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_HEADER_OUTPUT),
            guard: DEFAULT_GUARD.to_string(),
            modules: paths(DEFAULT_HEADER_MODULES),
            template: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SourceTarget {
    pub output: PathBuf,
    pub modules: Vec<PathBuf>,
    pub template: Option<PathBuf>,
    /// Include line target for the combined header, e.g. `mine.h`.
    /// Defaults to the header output's file name.
    pub header_include: Option<String>,
}

impl Default for SourceTarget {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_SOURCE_OUTPUT),
            modules: paths(DEFAULT_SOURCE_MODULES),
            template: None,
            header_include: None,
        }
    }
}

/// The filtered contents of one module file.
#[derive(Debug, Clone)]
pub struct ScannedModule {
    /// Path as listed in the manifest (relative to the project root).
    pub path: PathBuf,
    pub kind: ModuleKind,
    /// Include targets in file order, e.g. `<string>` or `"src/aes.h"`.
    pub includes: Vec<String>,
    pub code: String,
    pub code_lines: usize,
    pub region_found: bool,
}

#[derive(Serialize, Clone)]
pub struct OutputReport {
    pub kind: ModuleKind,
    pub path: String,
    pub status: String,
    pub modules: usize,
    pub includes: usize,
    pub code_lines: usize,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Serialize)]
pub struct BuildReport {
    pub version: String,
    pub outputs: Vec<OutputReport>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub outputs: Vec<OutputReport>,
}

#[derive(Serialize, Clone)]
pub struct ModuleItem {
    pub kind: ModuleKind,
    pub path: String,
    pub output: String,
}

#[derive(Serialize, Clone)]
pub struct IncludeItem {
    pub target: String,
    pub first_seen_in: String,
}
