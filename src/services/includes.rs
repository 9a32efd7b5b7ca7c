use crate::domain::constants::INCLUDE_DIRECTIVE;
use crate::domain::models::{IncludeItem, ScannedModule};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct IncludeEntry {
    pub target: String,
    pub origin: PathBuf,
}

/// Include targets in first-seen order, each kept once.
#[derive(Debug, Clone, Default)]
pub struct IncludeSet {
    entries: Vec<IncludeEntry>,
    seen: HashSet<String>,
}

impl IncludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the target was already present.
    pub fn insert(&mut self, target: &str, origin: &Path) -> bool {
        if !self.seen.insert(target.to_string()) {
            return false;
        }
        self.entries.push(IncludeEntry {
            target: target.to_string(),
            origin: origin.to_path_buf(),
        });
        true
    }

    pub fn extend_from(&mut self, module: &ScannedModule, skip: impl Fn(&str) -> bool) {
        for target in &module.includes {
            if !skip(target) {
                self.insert(target, &module.path);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IncludeEntry> {
        self.entries.iter()
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{} {}\n", INCLUDE_DIRECTIVE, e.target))
            .collect()
    }

    pub fn items(&self) -> Vec<IncludeItem> {
        self.entries
            .iter()
            .map(|e| IncludeItem {
                target: e.target.clone(),
                first_seen_in: e.origin.to_string_lossy().to_string(),
            })
            .collect()
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches("./").replace('\\', "/")
}

/// True when `target` is a quoted include of one of `headers`, e.g.
/// `"src/base16.h"`. The combined source includes the combined header
/// in place of these.
pub fn is_project_header(target: &str, headers: &[PathBuf]) -> bool {
    let Some(inner) = target
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };
    let inner = normalize(inner);
    headers
        .iter()
        .any(|h| normalize(&h.to_string_lossy()) == inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModuleKind;

    fn module(path: &str, includes: &[&str]) -> ScannedModule {
        ScannedModule {
            path: PathBuf::from(path),
            kind: ModuleKind::Header,
            includes: includes.iter().map(|s| s.to_string()).collect(),
            code: String::new(),
            code_lines: 0,
            region_found: true,
        }
    }

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let mut set = IncludeSet::new();
        set.extend_from(&module("a.h", &["<string>", "<map>"]), |_| false);
        set.extend_from(&module("b.h", &["<vector>", "<string>", "<map>"]), |_| false);
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.render(),
            "#include <string>\n#include <map>\n#include <vector>\n"
        );
        let items = set.items();
        assert_eq!(items[2].target, "<vector>");
        assert_eq!(items[2].first_seen_in, "b.h");
    }

    #[test]
    fn skip_predicate_filters_targets() {
        let mut set = IncludeSet::new();
        set.extend_from(&module("a.cc", &["<sstream>", "\"src/a.h\""]), |t| {
            t.starts_with('"')
        });
        assert_eq!(set.render(), "#include <sstream>\n");
    }

    #[test]
    fn empty_set_renders_nothing() {
        assert!(IncludeSet::new().is_empty());
        assert_eq!(IncludeSet::new().render(), "");
    }

    #[test]
    fn project_headers_match_quoted_paths_only() {
        let headers = vec![PathBuf::from("src/base16.h"), PathBuf::from("./src/aes.h")];
        assert!(is_project_header("\"src/base16.h\"", &headers));
        assert!(is_project_header("\"src/aes.h\"", &headers));
        assert!(!is_project_header("<src/base16.h>", &headers));
        assert!(!is_project_header("\"src/zlib.h\"", &headers));
        assert!(!is_project_header("<zlib.h>", &headers));
    }
}
