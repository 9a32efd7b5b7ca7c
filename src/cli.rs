use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "amalgamate",
    version,
    about = "Amalgamate library modules into a single header and source file"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, short, global = true, help = "Suppress log output on stderr")]
    pub quiet: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root that module and output paths are relative to"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Manifest file (default: <root>/amalgamate.toml when present)"
    )]
    pub manifest: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Amalgamate the configured modules and write the outputs
    Build {
        #[arg(long, help = "Version string substituted into the banner")]
        lib_version: Option<String>,
        #[arg(long, default_value_t = false)]
        header_only: bool,
    },
    /// Compare the outputs on disk with a fresh in-memory amalgamation
    Check {
        #[arg(long, help = "Version string substituted into the banner")]
        lib_version: Option<String>,
        #[arg(long, default_value_t = false)]
        header_only: bool,
    },
    /// List the configured modules in amalgamation order
    List,
    /// List the deduplicated include directives of one output
    Includes {
        #[arg(long, value_enum, default_value_t = ModuleKind::Header)]
        kind: ModuleKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Header,
    Source,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Header => "header",
            ModuleKind::Source => "source",
        }
    }
}
