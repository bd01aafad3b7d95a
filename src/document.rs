// src/document.rs
// =============================================================================
// Loading and saving the JSON document.
//
// Saving writes to a temporary file next to the original and renames it over
// the original, so a failed write never leaves a half-written document.
// =============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and parses the whole document
pub fn load(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))
}

/// Writes the document back as pretty JSON (2-space indent)
pub fn save(path: &Path, document: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');

    let tmp = temp_path(path);
    fs::write(&tmp, text).with_context(|| format!("Failed to write '{}'", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace '{}'", path.display()));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_valid_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{"type": "folder", "children": []}}"#)?;

        let document = load(file.path())?;
        assert_eq!(document, json!({"type": "folder", "children": []}));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn test_save_round_trip_with_two_space_indent() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("links.json");
        let document = json!({"children": [{"type": "url", "url": "https://b.test"}]});

        save(&path, &document)?;

        let text = fs::read_to_string(&path)?;
        assert!(text.contains("\n  \"children\": ["));
        assert!(text.ends_with('\n'));
        assert_eq!(load(&path)?, document);
        // No temp file left behind
        assert!(!temp_path(&path).exists());
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/links.json");
        assert!(save(&path, &json!({})).is_err());
    }
}
