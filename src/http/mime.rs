//! MIME type detection module
//!
//! Maps file extensions to `Content-Type` values. The table starts from the
//! platform database shipped with `mime_guess` and layers explicit overrides
//! on top. Overrides are added while building the table; once the table is
//! handed to [`AppState`](crate::config::AppState) it is only ever read.

use std::collections::HashMap;
use std::path::Path;

/// Fallback for files whose extension is unknown or missing
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extension-to-MIME lookup table
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    /// Lowercase extension (no dot) -> MIME type
    overrides: HashMap<String, String>,
}

impl MimeTable {
    /// Platform defaults only
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform defaults with `.wasm` forced to `application/wasm`
    ///
    /// # Examples
    /// ```
    /// use serve_wasm::http::mime::MimeTable;
    /// use std::path::Path;
    ///
    /// let table = MimeTable::standard();
    /// assert_eq!(table.content_type(Path::new("app_bg.wasm")), "application/wasm");
    /// assert_eq!(table.content_type(Path::new("README")), "application/octet-stream");
    /// ```
    pub fn standard() -> Self {
        Self::new().with_override(".wasm", "application/wasm")
    }

    /// Add or replace the MIME type for an extension (leading dot optional)
    #[must_use]
    pub fn with_override(mut self, extension: &str, mime: &str) -> Self {
        self.overrides
            .insert(normalize_extension(extension), mime.to_string());
        self
    }

    /// Get `Content-Type` for a path based on its extension
    pub fn content_type(&self, path: &Path) -> &str {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return OCTET_STREAM;
        };
        self.for_extension(ext)
    }

    /// Get `Content-Type` for a bare extension
    pub fn for_extension(&self, extension: &str) -> &str {
        let ext = normalize_extension(extension);
        if let Some(mime) = self.overrides.get(&ext) {
            return mime;
        }
        mime_guess::from_ext(&ext).first_raw().unwrap_or(OCTET_STREAM)
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_override() {
        let table = MimeTable::standard();
        assert_eq!(table.content_type(Path::new("pkg/app.wasm")), "application/wasm");
        assert_eq!(table.content_type(Path::new("pkg/APP.WASM")), "application/wasm");
        assert_eq!(table.for_extension(".wasm"), "application/wasm");
    }

    #[test]
    fn test_override_beats_platform_default() {
        let table = MimeTable::new().with_override("html", "text/x-custom");
        assert_eq!(table.content_type(Path::new("index.html")), "text/x-custom");
    }

    #[test]
    fn test_common_types() {
        let table = MimeTable::standard();
        assert_eq!(table.content_type(Path::new("index.html")), "text/html");
        assert_eq!(table.content_type(Path::new("style.css")), "text/css");
        assert_eq!(table.content_type(Path::new("logo.png")), "image/png");
        assert_eq!(table.content_type(Path::new("data.json")), "application/json");
    }

    #[test]
    fn test_unknown_extension() {
        let table = MimeTable::standard();
        assert_eq!(table.content_type(Path::new("blob.zzzunknown")), OCTET_STREAM);
        assert_eq!(table.content_type(Path::new("Makefile")), OCTET_STREAM);
    }
}
