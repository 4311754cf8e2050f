//! HTTP response building module
//!
//! Builders for every status the file server produces, plus the single place
//! where the cross-origin isolation headers are attached.

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

use super::body::{self, ResponseBody};
use super::cache::CACHE_CONTROL;
use super::range::ByteRange;

/// Headers carried by every response, whatever its status
///
/// COEP/COOP make the page cross-origin isolated, which browsers require
/// before exposing `SharedArrayBuffer` to WebAssembly threads.
pub const ISOLATION_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("cross-origin-embedder-policy", "require-corp"),
    ("cross-origin-opener-policy", "same-origin"),
];

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Metadata describing a file about to be sent
#[derive(Debug, Clone)]
pub struct FileMeta<'a> {
    pub content_type: &'a str,
    pub etag: &'a str,
    pub last_modified: Option<&'a str>,
    pub total_size: u64,
}

/// Insert (or overwrite) the isolation headers on a finished response
pub fn apply_isolation_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    for (name, value) in ISOLATION_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Build 200 OK response for a whole file
///
/// `body` is empty for HEAD; `Content-Length` always reports the file size.
pub fn build_file_response(body: ResponseBody, meta: &FileMeta<'_>) -> Response<ResponseBody> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", meta.content_type)
        .header("Content-Length", meta.total_size)
        .header("Accept-Ranges", "bytes")
        .header("ETag", meta.etag)
        .header("Cache-Control", CACHE_CONTROL);
    if let Some(last_modified) = meta.last_modified {
        builder = builder.header("Last-Modified", last_modified);
    }

    builder.body(body).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(body::empty())
    })
}

/// Build 206 Partial Content response
pub fn build_partial_response(
    body: ResponseBody,
    meta: &FileMeta<'_>,
    range: ByteRange,
) -> Response<ResponseBody> {
    Response::builder()
        .status(206)
        .header("Content-Type", meta.content_type)
        .header("Content-Length", range.byte_count())
        .header("Content-Range", range.content_range(meta.total_size))
        .header("Accept-Ranges", "bytes")
        .header("ETag", meta.etag)
        .header("Cache-Control", CACHE_CONTROL)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(body::empty())
        })
}

/// Build HTML response (generated directory listings)
pub fn build_html_response(content: String, is_head: bool) -> Response<ResponseBody> {
    let content_length = content.len();
    let body = if is_head { body::empty() } else { body::full(content) };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(body::empty())
        })
}

/// Build 301 redirect, used to add the trailing slash to directory paths
pub fn build_redirect_response(location: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Length", 0)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(body::empty())
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", CACHE_CONTROL)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(body::empty())
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(body::full("404 Not Found"))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(body::full("404 Not Found"))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", ALLOWED_METHODS)
        .body(body::full("405 Method Not Allowed"))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(body::full("405 Method Not Allowed"))
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(total_size: u64) -> Response<ResponseBody> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Range", format!("bytes */{total_size}"))
        .body(body::full("416 Range Not Satisfiable"))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(body::empty())
        })
}

/// Build OPTIONS response (CORS preflight)
pub fn build_options_response() -> Response<ResponseBody> {
    Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS)
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type, Range")
        .header("Access-Control-Max-Age", "86400")
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(body::empty())
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_isolated<B>(response: &Response<B>) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["cross-origin-embedder-policy"], "require-corp");
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
    }

    #[test]
    fn test_isolation_headers_on_every_builder() {
        let meta = FileMeta {
            content_type: "application/wasm",
            etag: "\"1\"",
            last_modified: None,
            total_size: 4,
        };
        let mut responses = vec![
            build_file_response(body::full(&b"\0asm"[..]), &meta),
            build_partial_response(body::full(&b"\0a"[..]), &meta, ByteRange { first: 0, last: 1 }),
            build_html_response("<p></p>".to_string(), false),
            build_redirect_response("/pkg/"),
            build_304_response("\"1\""),
            build_404_response(),
            build_405_response(),
            build_416_response(4),
            build_options_response(),
        ];
        for response in &mut responses {
            apply_isolation_headers(response);
            assert_isolated(response);
        }
    }

    #[test]
    fn test_isolation_headers_override_existing_values() {
        let mut response = Response::builder()
            .header("Cross-Origin-Opener-Policy", "unsafe-none")
            .body(())
            .unwrap();
        apply_isolation_headers(&mut response);
        assert_isolated(&response);
        assert_eq!(
            response.headers().get_all("cross-origin-opener-policy").iter().count(),
            1
        );
    }

    #[test]
    fn test_head_keeps_content_length() {
        let meta = FileMeta {
            content_type: "text/plain",
            etag: "\"1\"",
            last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            total_size: 5,
        };
        let response = build_file_response(body::empty(), &meta);
        assert_eq!(response.headers()["content-length"], "5");
        assert_eq!(response.headers()["last-modified"], "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_416_content_range() {
        let response = build_416_response(42);
        assert_eq!(response.status(), 416);
        assert_eq!(response.headers()["content-range"], "bytes */42");
    }
}
