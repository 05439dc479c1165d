//! Relaxed-JSON settings documents

use crate::error::{SetupError, SetupResult};
use crate::sort::sort_object_keys_recursive;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults document compiled into the binary, used when no file is installed
/// next to the executable.
pub const BUNDLED_SETTINGS: &str = include_str!("../../assets/settings.json");

/// Label used in errors for the compiled-in defaults.
pub const BUNDLED_LABEL: &str = "<bundled settings.json>";

/// A parsed settings document together with the path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub value: Value,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self { path: path.into(), value }
    }

    /// Read and parse a JSON/JSONC document from disk.
    pub fn load(path: &Path) -> SetupResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| SetupError::Io { path: path.to_path_buf(), source })?;
        tracing::debug!("Read {} bytes from {}", text.len(), path.display());
        Self::parse(&text, path)
    }

    /// Parse document text. Comments and trailing commas are accepted.
    ///
    /// Integers must fit in an `i64`; larger ones are rejected as a parse
    /// error. `-0` reads back as `0`.
    pub fn parse(text: &str, path: &Path) -> SetupResult<Self> {
        // Editors on Windows like to prepend a BOM.
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let value: Value = json5::from_str(text).map_err(|e| SetupError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(path, value))
    }

    /// The compiled-in defaults document.
    pub fn bundled() -> SetupResult<Self> {
        Self::parse(BUNDLED_SETTINGS, Path::new(BUNDLED_LABEL))
    }

    /// Serialize as strict JSON with four-space indentation and a trailing newline.
    pub fn render(&self, sort_keys: bool) -> SetupResult<String> {
        let sorted;
        let value = if sort_keys {
            sorted = sort_object_keys_recursive(&self.value);
            &sorted
        } else {
            &self.value
        };

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(String::from_utf8(buf)?)
    }

    /// Replace the document's file with `rendered`.
    ///
    /// The text goes to a sibling temp file first and is renamed over the
    /// target, so the target holds either the old or the new content.
    pub fn write(&self, rendered: &str) -> SetupResult<()> {
        let temp_path = temp_path_for(&self.path);
        let io_err = |path: &Path, source: std::io::Error| SetupError::Io { path: path.to_path_buf(), source };

        fs::write(&temp_path, rendered).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            io_err(&temp_path, e)
        })?;

        if let Ok(meta) = fs::metadata(&self.path) {
            let _ = fs::set_permissions(&temp_path, meta.permissions());
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            io_err(&self.path, e)
        })?;

        tracing::debug!("Wrote {} bytes to {}", rendered.len(), self.path.display());
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".setup-tmp");
    path.with_file_name(name)
}
