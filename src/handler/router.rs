//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch to
//! the static file responder, isolation headers, and the access log.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Body;
use hyper::header::CONTENT_LENGTH;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
#[derive(Debug)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
    pub range_header: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        Self {
            path: req.uri().path(),
            query: req.uri().query(),
            is_head: req.method() == Method::HEAD,
            if_none_match: header_str(req, "if-none-match"),
            range_header: header_str(req, "range"),
        }
    }
}

fn header_str<'a, B>(req: &'a Request<B>, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: Option<SocketAddr>,
) -> Result<Response<ResponseBody>, Infallible> {
    let response = respond(&req, &state).await;

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.map_or_else(|| "-".to_string(), |a| a.ip().to_string()),
            req.method().to_string(),
            req.uri()
                .path_and_query()
                .map_or_else(|| req.uri().path().to_string(), ToString::to_string),
        );
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        // Streamed file bodies carry no exact size hint, only Content-Length
        entry.body_bytes = if req.method() == Method::HEAD {
            None
        } else {
            response
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .or_else(|| response.body().size_hint().exact())
        };
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Produce the response for a request, isolation headers included
///
/// The body type is left generic: the request body is never read.
pub async fn respond<B>(req: &Request<B>, state: &AppState) -> Response<ResponseBody> {
    let mut response = match check_http_method(req.method()) {
        Some(early) => early,
        None => {
            let ctx = RequestContext::from_request(req);
            static_files::serve(&ctx, state).await
        }
    };
    http::apply_isolation_headers(&mut response);
    response
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<ResponseBody>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
