//! Static file serving module
//!
//! Resolves request paths under the serving root and builds file, directory
//! index, listing, redirect and error responses. File bodies are streamed
//! from disk; only the requested range is read.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::body::{self, ResponseBody};
use crate::http::range::{self, RangeOutcome};
use crate::http::response::{self, FileMeta};
use crate::http::{self, cache, path};
use crate::logger;
use hyper::Response;
use std::fs::Metadata;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncSeekExt;

/// Serve the request path from the serving root
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<ResponseBody> {
    let Some(relative) = path::sanitize(ctx.path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
        return http::build_404_response();
    };

    let Some(target) = resolve_under_root(&state.config.root, &relative, ctx.path).await else {
        return http::build_404_response();
    };

    // Missing files are ordinary 404s, not worth a log line
    let Ok(metadata) = fs::metadata(&target).await else {
        return http::build_404_response();
    };

    if metadata.is_dir() {
        return serve_directory(ctx, state, &target).await;
    }
    // A trailing slash names a directory; `/app.js/` is not `/app.js`
    if ctx.path.ends_with('/') {
        return http::build_404_response();
    }
    serve_file(ctx, state, &target, &metadata).await
}

/// Join `relative` onto `root` and make sure the result stays inside `root`
///
/// Canonicalizing both sides catches symlinks pointing out of the tree.
async fn resolve_under_root(root: &Path, relative: &Path, request_path: &str) -> Option<PathBuf> {
    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    let target = fs::canonicalize(root_canonical.join(relative)).await.ok()?;
    if !target.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            target.display()
        ));
        return None;
    }
    Some(target)
}

/// Location for the slash form of a directory path
///
/// Leading slashes are collapsed to one: `//host/dir` must not become a
/// protocol-relative redirect to another host.
fn directory_location(request_path: &str, query: Option<&str>) -> String {
    let trimmed = request_path.trim_start_matches('/');
    match query {
        Some(q) => format!("/{trimmed}/?{q}"),
        None => format!("/{trimmed}/"),
    }
}

/// Directory: redirect to the slash form, then index file, then listing
async fn serve_directory(
    ctx: &RequestContext<'_>,
    state: &AppState,
    dir: &Path,
) -> Response<ResponseBody> {
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&directory_location(ctx.path, ctx.query));
    }

    for index_file in &state.config.index_files {
        let candidate = dir.join(index_file);
        if let Ok(metadata) = fs::metadata(&candidate).await {
            if metadata.is_file() {
                return serve_file(ctx, state, &candidate, &metadata).await;
            }
        }
    }

    match listing::render(dir, ctx.path).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

/// Regular file with `ETag`, `Last-Modified` and Range support
async fn serve_file(
    ctx: &RequestContext<'_>,
    state: &AppState,
    file_path: &Path,
    metadata: &Metadata,
) -> Response<ResponseBody> {
    let total_size = metadata.len();
    let modified = metadata.modified().ok();
    let etag = cache::file_etag(total_size, modified);
    if cache::check_etag_match(ctx.if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let partial = match range::evaluate(ctx.range_header, total_size) {
        RangeOutcome::Unsatisfiable => return http::build_416_response(total_size),
        RangeOutcome::Partial(r) => Some(r),
        RangeOutcome::Full => None,
    };
    let (start, length) = partial.map_or((0, total_size), |r| (r.first, r.byte_count()));

    // Opened even for HEAD so unreadable files answer 404 either way
    let file = match open_at(file_path, start).await {
        Ok(f) => f,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };
    let body = if ctx.is_head {
        body::empty()
    } else {
        body::file_stream(file, length)
    };

    let last_modified = modified.map(cache::http_date);
    let meta = FileMeta {
        content_type: state.mime.content_type(file_path),
        etag: &etag,
        last_modified: last_modified.as_deref(),
        total_size,
    };

    match partial {
        Some(r) => response::build_partial_response(body, &meta, r),
        None => response::build_file_response(body, &meta),
    }
}

async fn open_at(file_path: &Path, offset: u64) -> std::io::Result<File> {
    let mut file = File::open(file_path).await?;
    if offset > 0 {
        file.seek(SeekFrom::Start(offset)).await?;
    }
    Ok(file)
}
