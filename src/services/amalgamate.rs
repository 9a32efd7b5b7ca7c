use crate::cli::ModuleKind;
use crate::domain::constants::{HEADER_TEMPLATE, MANIFEST_FILE_NAME, SOURCE_TEMPLATE};
use crate::domain::models::{Manifest, OutputReport, ScannedModule};
use crate::error::AmalgamateError;
use crate::services::includes::{is_project_header, IncludeSet};
use crate::services::scan::{scan_module, Markers};
use crate::services::template::{load_template, render_template};
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// One rendered output, held in memory until every output is ready.
#[derive(Debug, Clone)]
pub struct Amalgamation {
    pub kind: ModuleKind,
    pub output: PathBuf,
    pub text: String,
    pub modules: usize,
    pub includes: IncludeSet,
    pub code_lines: usize,
}

impl Amalgamation {
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(self.text.as_bytes()))
    }

    pub fn report(&self, status: &str) -> OutputReport {
        OutputReport {
            kind: self.kind,
            path: self.output.to_string_lossy().to_string(),
            status: status.to_string(),
            modules: self.modules,
            includes: self.includes.len(),
            code_lines: self.code_lines,
            bytes: self.text.len(),
            sha256: self.sha256_hex(),
        }
    }
}

/// Merges already scanned modules: code concatenated in list order,
/// includes deduplicated in first-seen order (minus those `skip` rejects).
pub fn amalgamate_modules(
    modules: &[ScannedModule],
    skip: impl Fn(&str) -> bool,
) -> (IncludeSet, String, usize) {
    let mut includes = IncludeSet::new();
    let mut code = String::new();
    let mut lines = 0usize;
    for m in modules {
        includes.extend_from(m, &skip);
        code.push_str(&m.code);
        lines += m.code_lines;
    }
    (includes, code, lines)
}

pub fn scan_all(
    root: &Path,
    modules: &[PathBuf],
    kind: ModuleKind,
    markers: &Markers,
) -> anyhow::Result<Vec<ScannedModule>> {
    modules
        .iter()
        .map(|m| {
            scan_module(root, m, kind, markers)
                .with_context(|| format!("amalgamating {} modules", kind.as_str()))
        })
        .collect()
}

fn header_include_name(manifest: &Manifest) -> String {
    manifest
        .source
        .as_ref()
        .and_then(|s| s.header_include.clone())
        .or_else(|| {
            manifest
                .header
                .output
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
        })
        .unwrap_or_default()
}

fn template_vars(manifest: &Manifest, includes: &str, code: &str) -> [(&'static str, String); 6] {
    [
        ("version", manifest.version.clone()),
        ("guard", manifest.header.guard.clone()),
        ("namespace", manifest.namespace.clone()),
        ("header", header_include_name(manifest)),
        ("includes", includes.to_string()),
        ("code", code.to_string()),
    ]
}

pub fn amalgamate_header(manifest: &Manifest, root: &Path) -> anyhow::Result<Amalgamation> {
    let markers = Markers::for_namespace(&manifest.namespace);
    let scanned = scan_all(root, &manifest.header.modules, ModuleKind::Header, &markers)?;
    let (includes, code, code_lines) = amalgamate_modules(&scanned, |_| false);

    let template = load_template(root, manifest.header.template.as_deref(), HEADER_TEMPLATE)?;
    let vars = template_vars(manifest, &includes.render(), &code);
    let text = render_template(&template, &vars).context("rendering header template")?;

    Ok(Amalgamation {
        kind: ModuleKind::Header,
        output: manifest.header.output.clone(),
        text,
        modules: scanned.len(),
        includes,
        code_lines,
    })
}

pub fn amalgamate_source(manifest: &Manifest, root: &Path) -> anyhow::Result<Option<Amalgamation>> {
    let Some(source) = &manifest.source else {
        return Ok(None);
    };
    let markers = Markers::for_namespace(&manifest.namespace);
    let scanned = scan_all(root, &source.modules, ModuleKind::Source, &markers)?;
    let headers = &manifest.header.modules;
    let (includes, code, code_lines) =
        amalgamate_modules(&scanned, |t| is_project_header(t, headers));

    let template = load_template(root, source.template.as_deref(), SOURCE_TEMPLATE)?;
    let vars = template_vars(manifest, &includes.render(), &code);
    let text = render_template(&template, &vars).context("rendering source template")?;

    Ok(Some(Amalgamation {
        kind: ModuleKind::Source,
        output: source.output.clone(),
        text,
        modules: scanned.len(),
        includes,
        code_lines,
    }))
}

/// Scans the modules of one output and returns its include set, with the
/// same filtering the rendered output applies.
pub fn collect_includes(
    manifest: &Manifest,
    root: &Path,
    kind: ModuleKind,
) -> anyhow::Result<IncludeSet> {
    let markers = Markers::for_namespace(&manifest.namespace);
    let headers = &manifest.header.modules;
    let scanned = match kind {
        ModuleKind::Header => scan_all(root, headers, kind, &markers)?,
        ModuleKind::Source => {
            let Some(source) = &manifest.source else {
                return Err(AmalgamateError::Manifest {
                    path: PathBuf::from(MANIFEST_FILE_NAME),
                    message: "no [source] table configured".to_string(),
                }
                .into());
            };
            scan_all(root, &source.modules, kind, &markers)?
        }
    };
    let (includes, _, _) = amalgamate_modules(&scanned, |t| {
        kind == ModuleKind::Source && is_project_header(t, headers)
    });
    Ok(includes)
}

/// Renders every configured output. Nothing is written here, so a read
/// failure in any module aborts before an output file is touched.
pub fn amalgamate_all(
    manifest: &Manifest,
    root: &Path,
    header_only: bool,
) -> anyhow::Result<Vec<Amalgamation>> {
    let mut out = vec![amalgamate_header(manifest, root)?];
    if !header_only {
        if let Some(source) = amalgamate_source(manifest, root)? {
            out.push(source);
        }
    }
    Ok(out)
}
