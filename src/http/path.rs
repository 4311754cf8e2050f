//! Request path handling
//!
//! Turns the path component of a request URI into a relative filesystem
//! path, and encodes file names back into URL path segments for listings.

use std::path::PathBuf;

/// Map a request path onto a path relative to the serving root
///
/// The path is percent-decoded and split on `/`. Empty and `.` segments are
/// dropped. Returns `None` for anything that could step outside the root:
/// a `..` segment, a backslash, a NUL byte, or bytes that are not UTF-8.
///
/// # Examples
/// ```
/// use serve_wasm::http::path::sanitize;
/// use std::path::PathBuf;
///
/// assert_eq!(sanitize("/pkg/app%20bg.wasm"), Some(PathBuf::from("pkg/app bg.wasm")));
/// assert_eq!(sanitize("/../etc/passwd"), None);
/// ```
pub fn sanitize(request_path: &str) -> Option<PathBuf> {
    let decoded = String::from_utf8(percent_decode(request_path)).ok()?;

    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => relative.push(s),
        }
    }
    Some(relative)
}

/// Decode `%XX` escapes; malformed escapes are kept verbatim
pub fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Percent-encode a single file name for use inside a URL path
pub fn encode_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &b in name.as_bytes() {
        if b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:@".contains(&b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
