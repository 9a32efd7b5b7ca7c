use crate::error::AmalgamateError;
use std::path::Path;

pub const PLACEHOLDERS: &[&str] = &["version", "includes", "code", "guard", "namespace", "header"];

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Loads a template override relative to `root`, or returns `builtin`.
pub fn load_template(
    root: &Path,
    path: Option<&Path>,
    builtin: &str,
) -> Result<String, AmalgamateError> {
    match path {
        Some(p) => {
            let full = root.join(p);
            std::fs::read_to_string(&full)
                .map_err(|source| AmalgamateError::TemplateRead { path: full, source })
        }
        None => Ok(builtin.to_string()),
    }
}

/// Replaces `{{name}}` placeholders in a single pass.
///
/// Substituted values are never scanned again. Braces that do not enclose
/// an identifier (or are never closed) are copied literally.
pub fn render_template<V: AsRef<str>>(
    template: &str,
    vars: &[(&str, V)],
) -> Result<String, AmalgamateError> {
    let extra: usize = vars.iter().map(|(_, v)| v.as_ref().len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return Ok(out);
        };
        let name = after[..close].trim();
        if !is_placeholder_name(name) {
            out.push_str("{{");
            rest = after;
            continue;
        }
        match vars.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value.as_ref()),
            None => {
                return Err(AmalgamateError::Template(format!(
                    "unknown placeholder {{{{{}}}}} (supported: {})",
                    name,
                    PLACEHOLDERS.join(", ")
                )))
            }
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let out = render_template(
            "Mine ({{version}})\n{{ includes }}ns {{namespace}}",
            &[("version", "1.0"), ("includes", "#include <map>\n"), ("namespace", "mine")],
        )
        .unwrap();
        assert_eq!(out, "Mine (1.0)\n#include <map>\nns mine");
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let out = render_template(
            "{{code}}|{{version}}",
            &[("code", "auto s = \"{{version}}\";"), ("version", "2.0")],
        )
        .unwrap();
        assert_eq!(out, "auto s = \"{{version}}\";|2.0");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = render_template("{{license}}", &[("version", "1")]).unwrap_err();
        assert_eq!(err.code(), "TEMPLATE");
        assert!(err.to_string().contains("{{license}}"));
    }

    #[test]
    fn non_identifier_braces_are_literal() {
        let table = "map = {{0x30, 0x00}, {0x31, 0x01}};\n{{unterminated";
        let none: &[(&str, &str)] = &[];
        assert_eq!(render_template(table, none).unwrap(), table);
    }

    #[test]
    fn missing_override_is_a_template_read_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = load_template(tmp.path(), Some(Path::new("nope.tpl")), "x").unwrap_err();
        assert!(matches!(err, AmalgamateError::TemplateRead { .. }));
        assert_eq!(load_template(tmp.path(), None, "builtin").unwrap(), "builtin");
    }
}
