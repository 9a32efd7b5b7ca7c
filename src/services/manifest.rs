use crate::domain::constants::{BUILTIN_MANIFEST_ORIGIN, MANIFEST_FILE_NAME};
use crate::domain::models::Manifest;
use crate::error::AmalgamateError;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

pub fn manifest_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => root.join(MANIFEST_FILE_NAME),
    }
}

/// Loads the manifest for `root`.
///
/// Without `--manifest`, a missing `amalgamate.toml` falls back to the
/// built-in defaults. An explicitly named manifest must exist.
pub fn load_manifest(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Manifest> {
    let p = manifest_path(root, explicit);
    if explicit.is_none() && !p.exists() {
        tracing::debug!("no {} in {}, using built-in modules", MANIFEST_FILE_NAME, root.display());
        let manifest = Manifest::default();
        validate_manifest(&manifest, Path::new(BUILTIN_MANIFEST_ORIGIN))?;
        return Ok(manifest);
    }
    let raw = std::fs::read_to_string(&p).map_err(|e| AmalgamateError::Manifest {
        path: p.clone(),
        message: e.to_string(),
    })?;
    tracing::debug!("loaded manifest {}", p.display());
    Ok(parse_manifest(&raw, &p)?)
}

pub fn parse_manifest(raw: &str, origin: &Path) -> Result<Manifest, AmalgamateError> {
    let manifest: Manifest = toml::from_str(raw).map_err(|e| AmalgamateError::Manifest {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    validate_manifest(&manifest, origin)?;
    Ok(manifest)
}

fn check_modules(list: &[PathBuf], table: &str) -> Result<(), String> {
    if list.is_empty() {
        return Err(format!("[{}] modules must not be empty", table));
    }
    let mut seen = HashSet::new();
    for m in list {
        // `./src/a.h` and `src/a.h` name the same module
        let key: PathBuf = m
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if !seen.insert(key) {
            return Err(format!("[{}] lists {} more than once", table, m.display()));
        }
    }
    Ok(())
}

pub fn validate_manifest(manifest: &Manifest, origin: &Path) -> Result<(), AmalgamateError> {
    let invalid = |message: String| AmalgamateError::Manifest {
        path: origin.to_path_buf(),
        message,
    };

    if manifest.namespace.trim().is_empty() {
        return Err(invalid("namespace must not be empty".to_string()));
    }
    if manifest.header.guard.trim().is_empty() {
        return Err(invalid("[header] guard must not be empty".to_string()));
    }
    check_modules(&manifest.header.modules, "header").map_err(invalid)?;
    if let Some(source) = &manifest.source {
        check_modules(&source.modules, "source").map_err(invalid)?;
        if source.output == manifest.header.output {
            return Err(invalid(
                "[source] output must differ from [header] output".to_string(),
            ));
        }
    }
    Ok(())
}
