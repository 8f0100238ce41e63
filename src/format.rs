//! Loading and saving a [`MacroTable`] in the formats KaTeX consumes.
//!
//! The table is a JSON object mapping each macro name to either its expansion, or a
//! `[template, arity]` pair:
//!
//! ```json
//! {
//!   "\\R": "\\mathbb{R}",
//!   "\\v": ["\\vec{#1}", 1]
//! }
//! ```
//!
//! Templates usually ship it as a script assigning that object to a global variable, which
//! is then passed as the `macros` option of KaTeX's auto-render:
//!
//! ```js
//! window.katexMacros = { "\\R": "\\mathbb{R}" };
//! ```
use tracing::debug;

use crate::{error::LoadError, table::MacroTable};

/// The global variable the macro script assigns the table to.
pub const SCRIPT_VARIABLE: &str = "window.katexMacros";

/// Load a table from a JSON object.
///
/// Names must be control sequences, templates must be well formed, and no name may appear twice.
pub fn from_json(json: &str) -> Result<MacroTable, LoadError> {
    let table: MacroTable = serde_json::from_str(json)?;
    debug!(entries = table.len(), "macro table loaded");
    Ok(table)
}

/// Serialize a table to a compact JSON object. Aliases are written as copies of their target.
pub fn to_json(table: &MacroTable) -> serde_json::Result<String> {
    serde_json::to_string(table)
}

/// Serialize a table to an indented JSON object.
pub fn to_json_pretty(table: &MacroTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

/// Load a table from a macro script such as `window.katexMacros = { ... };`.
///
/// Whatever is assigned to is ignored, and a bare object literal is accepted as well. The object
/// itself must be valid JSON. `//` comment lines may come before the assignment and after the
/// object, but nothing else may follow it.
pub fn from_katex_script(script: &str) -> Result<MacroTable, LoadError> {
    let script = skip_comments(script);
    let start = script.find('{').ok_or(LoadError::Script)?;
    let (assignment, object) = script.split_at(start);

    let assignment = assignment.trim_end();
    if !assignment.is_empty() && !assignment.ends_with('=') {
        return Err(LoadError::Script);
    }

    let mut stream = serde_json::Deserializer::from_str(object).into_iter::<MacroTable>();
    let table = stream.next().ok_or(LoadError::Script)??;

    let rest = object[stream.byte_offset()..].trim_start();
    let rest = rest.strip_prefix(';').unwrap_or(rest);
    if !skip_comments(rest).is_empty() {
        return Err(LoadError::TrailingInput);
    }

    debug!(entries = table.len(), "macro script loaded");
    Ok(table)
}

/// Skips leading whitespace and `//` line comments.
fn skip_comments(mut text: &str) -> &str {
    text = text.trim_start();
    while let Some(comment) = text.strip_prefix("//") {
        text = comment
            .split_once('\n')
            .map_or("", |(_, rest)| rest)
            .trim_start();
    }
    text
}

/// Serialize a table as a script assigning it to [`SCRIPT_VARIABLE`].
pub fn to_katex_script(table: &MacroTable) -> serde_json::Result<String> {
    Ok(format!("{SCRIPT_VARIABLE} = {};\n", to_json_pretty(table)?))
}

#[cfg(test)]
mod tests {
    use super::{from_json, from_katex_script, to_json, to_katex_script};
    use crate::{entry::MacroEntry, error::LoadError, table::MacroTable};

    const TEMPLATE_SCRIPT: &str = r#"window.katexMacros = {
    "\\R": "\\mathbb{R}",
    "\\C": "\\mathbb{C}",
    "\\Q":"\\mathbb{Q}",
    "\\Z": "\\mathbb{Z}",
    "\\N": "\\mathbb{N}",
    "\\v": ["\\vec{#1}", 1],
    "\\b": ["\\textbf{#1}", 1]
};
"#;

    #[test]
    fn template_script() {
        let table = from_katex_script(TEMPLATE_SCRIPT).unwrap();
        assert_eq!(table.len(), 7);
        for (name, entry) in table.iter() {
            assert_eq!(MacroTable::builtin().get(name), Some(entry));
        }
        assert_eq!(
            table.get(r"\v"),
            Some(&MacroEntry::parametrized(r"\vec{#1}", 1))
        );
        assert_eq!(table.get(r"\vv"), None);
    }

    #[test]
    fn bare_object() {
        let table = from_katex_script(r#"{"\\R": "\\mathbb{R}"}"#).unwrap();
        assert_eq!(table.get(r"\R"), Some(&MacroEntry::simple(r"\mathbb{R}")));
    }

    #[test]
    fn other_assignment() {
        let table = from_katex_script(r#"const macros = {"\\Z": "\\mathbb{Z}"}"#).unwrap();
        assert!(table.contains(r"\Z"));
    }

    #[test]
    fn comments() {
        let table = from_katex_script(
            r#"// Macros shared by KaTeX and macros.tex
window.katexMacros = {"\\R": "\\mathbb{R}"}; // keep in sync
// end of file
"#,
        )
        .unwrap();
        assert!(table.contains(r"\R"));

        let table = from_katex_script(r#"{"\\Z": "\\mathbb{Z}"} // no semicolon"#).unwrap();
        assert!(table.contains(r"\Z"));
    }

    #[test]
    fn trailing_input() {
        assert!(matches!(
            from_katex_script(r#"window.katexMacros = {"\\R": "\\mathbb{R}"}; render();"#),
            Err(LoadError::TrailingInput)
        ));
        assert!(matches!(
            from_katex_script(r#"window.katexMacros = {"\\R": "\\mathbb{R}"} {}"#),
            Err(LoadError::TrailingInput)
        ));
    }

    #[test]
    fn not_a_script() {
        assert!(matches!(
            from_katex_script("window.katexMacros = null;"),
            Err(LoadError::Script)
        ));
        assert!(matches!(
            from_katex_script(r#"render({"\\R": "\\mathbb{R}"});"#),
            Err(LoadError::Script)
        ));
    }

    #[test]
    fn json_round_trip() {
        let table = MacroTable::builtin();
        let json = to_json(table).unwrap();
        assert_eq!(&from_json(&json).unwrap(), table);
    }

    #[test]
    fn aliases_are_flattened() {
        let json = to_json(MacroTable::builtin()).unwrap();
        assert!(json.contains(r#""\\vv":["\\vec{#1}",1]"#));
        assert!(json.contains(r#""\\bb":["\\textbf{#1}",1]"#));
    }

    #[test]
    fn script_round_trip() {
        let script = to_katex_script(MacroTable::builtin()).unwrap();
        assert!(script.starts_with("window.katexMacros = {\n"));
        assert!(script.ends_with("};\n"));
        assert_eq!(&from_katex_script(&script).unwrap(), MacroTable::builtin());
    }

    #[test]
    fn empty_object() {
        assert!(from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_entries() {
        assert!(from_json(r#"{"\\R": 5}"#).is_err());
        assert!(from_json(r#"{"\\v": ["\\vec{#1}"]}"#).is_err());
        assert!(from_json(r#"{"\\v": ["\\vec{#1}", 1, 2]}"#).is_err());
        assert!(from_json(r#"["\\R"]"#).is_err());
    }
}
