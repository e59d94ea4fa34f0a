//! Bindings file parsing
//!
//! The file is a single JSON5 object mapping key strings to action text:
//!
//! ```json5
//! {
//!     // comments and trailing commas are fine
//!     CtrlS: "Save",
//!     "Alt-n": "SpawnMultiCursor",
//!     "CtrlY": "UnbindKey",
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;

use super::error::KeymapError;

/// Read the bindings file, or `None` if it does not exist
pub fn read_bindings_file(path: &Path) -> Result<Option<String>, KeymapError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(KeymapError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse bindings from JSON5 text, keeping file order
///
/// Blank input is an empty set of bindings.
pub fn parse_bindings_json(content: &str) -> Result<IndexMap<String, String>, String> {
    if content.trim().is_empty() {
        return Ok(IndexMap::new());
    }
    json5::from_str(content).map_err(|e| e.to_string())
}

/// Load bindings from a file
///
/// Returns `Ok(None)` when the file is absent. Any read or parse failure
/// is an error for the whole file: nothing from it should be applied.
pub fn load_bindings_file(path: &Path) -> Result<Option<IndexMap<String, String>>, KeymapError> {
    let Some(content) = read_bindings_file(path)? else {
        return Ok(None);
    };

    parse_bindings_json(&content)
        .map(Some)
        .map_err(|message| KeymapError::Parse {
            path: path.to_path_buf(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let bindings = parse_bindings_json(r#"{"CtrlS": "Save", "CtrlQ": "Quit"}"#).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("CtrlS").map(String::as_str), Some("Save"));
    }

    #[test]
    fn test_parse_tolerant_syntax() {
        let json = r#"
{
    // line comment
    CtrlS: "Save",
    /* block
       comment */
    "Alt-n": 'SpawnMultiCursor',
}
"#;
        let bindings = parse_bindings_json(json).unwrap();
        assert_eq!(bindings.get("CtrlS").map(String::as_str), Some("Save"));
        assert_eq!(
            bindings.get("Alt-n").map(String::as_str),
            Some("SpawnMultiCursor")
        );
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let bindings =
            parse_bindings_json(r#"{ "Z": "Undo", "A": "Redo", "M": "Save" }"#).unwrap();
        let keys: Vec<_> = bindings.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(parse_bindings_json("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_bindings_json(r#"{"CtrlS": "Save""#).is_err());
        assert!(parse_bindings_json(r#"{"CtrlS": 5}"#).is_err());
        assert!(parse_bindings_json(r#"["CtrlS", "Save"]"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_bindings_file(&dir.path().join("bindings.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_bindings_file(&path),
            Err(KeymapError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_bindings_file(dir.path()),
            Err(KeymapError::Read { .. })
        ));
    }
}
