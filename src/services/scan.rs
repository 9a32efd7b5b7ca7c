use crate::cli::ModuleKind;
use crate::domain::constants::INCLUDE_DIRECTIVE;
use crate::domain::models::ScannedModule;
use crate::error::AmalgamateError;
use std::path::Path;

/// Marker lines delimiting the part of a module that goes into the
/// shared namespace block.
#[derive(Debug, Clone)]
pub struct Markers {
    pub namespace_start: String,
    pub namespace_end: String,
    pub using_namespace: String,
}

impl Markers {
    pub fn for_namespace(namespace: &str) -> Self {
        Self {
            namespace_start: format!("namespace {} {{", namespace),
            namespace_end: format!("}} // end namespace {}", namespace),
            using_namespace: format!("using namespace {};", namespace),
        }
    }
}

/// Returns the include target of a column-0 `#include` line: the trimmed
/// remainder, e.g. `<string>`, `"src/aes.h"` or a macro such as
/// `ZLIB_HEADER`.
pub fn include_target(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(INCLUDE_DIRECTIVE)?;
    // `#include_next` is a different directive
    if rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let target = rest.trim();
    (!target.is_empty()).then_some(target)
}

pub fn scan_module(
    root: &Path,
    path: &Path,
    kind: ModuleKind,
    markers: &Markers,
) -> Result<ScannedModule, AmalgamateError> {
    let full = root.join(path);
    let text = std::fs::read_to_string(&full).map_err(|source| AmalgamateError::ModuleRead {
        path: full.clone(),
        source,
    })?;
    let module = scan_text(path, kind, &text, markers);
    tracing::debug!(
        module = %path.display(),
        kind = kind.as_str(),
        includes = module.includes.len(),
        lines = module.code_lines,
        "scanned module"
    );
    if !module.region_found {
        let marker = match kind {
            ModuleKind::Header => &markers.namespace_start,
            ModuleKind::Source => &markers.using_namespace,
        };
        tracing::warn!(
            module = %path.display(),
            "no `{}` line found, module contributes no code",
            marker
        );
    }
    Ok(module)
}

/// Splits a module into include targets and region code.
///
/// Include lines are collected from the whole file. Code is every line
/// inside the region except lines mentioning `#include`; line endings are
/// kept as-is.
pub fn scan_text(path: &Path, kind: ModuleKind, text: &str, markers: &Markers) -> ScannedModule {
    let mut includes = Vec::new();
    let mut code = String::new();
    let mut code_lines = 0usize;
    let mut in_region = false;
    let mut region_found = false;

    for line in text.split_inclusive('\n') {
        if let Some(target) = include_target(line) {
            includes.push(target.to_string());
            continue;
        }
        match kind {
            ModuleKind::Header => {
                if line.starts_with(&markers.namespace_start) {
                    in_region = true;
                    region_found = true;
                    continue;
                }
                if line.starts_with(&markers.namespace_end) {
                    in_region = false;
                    continue;
                }
            }
            ModuleKind::Source => {
                if line.starts_with(&markers.using_namespace) {
                    in_region = true;
                    region_found = true;
                    continue;
                }
            }
        }
        if in_region && !line.contains(INCLUDE_DIRECTIVE) {
            code.push_str(line);
            code_lines += 1;
        }
    }

    ScannedModule {
        path: path.to_path_buf(),
        kind,
        includes,
        code,
        code_lines,
        region_found,
    }
}
