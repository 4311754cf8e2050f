//! HTTP Range header parsing (RFC 9110 section 14)
//!
//! Only a single `bytes` range is honored. Anything the server does not
//! understand falls back to a full response rather than an error.

/// Inclusive byte range resolved against a known file length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub first: u64,
    pub last: u64,
}

impl ByteRange {
    /// Number of bytes covered
    pub const fn byte_count(self) -> u64 {
        self.last - self.first + 1
    }

    /// Value for the `Content-Range` header
    pub fn content_range(self, total: u64) -> String {
        format!("bytes {}-{}/{total}", self.first, self.last)
    }
}

/// Outcome of evaluating a `Range` header
#[derive(Debug, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Serve only this slice (206)
    Partial(ByteRange),
    /// Range lies outside the file (416)
    Unsatisfiable,
    /// No header, unknown unit, multiple ranges or malformed: serve everything
    Full,
}

/// Evaluate an optional `Range` header against a file of `total` bytes
///
/// # Examples
/// ```
/// use serve_wasm::http::range::{evaluate, ByteRange, RangeOutcome};
///
/// assert_eq!(
///     evaluate(Some("bytes=0-99"), 1000),
///     RangeOutcome::Partial(ByteRange { first: 0, last: 99 })
/// );
/// assert_eq!(evaluate(None, 1000), RangeOutcome::Full);
/// ```
pub fn evaluate(header: Option<&str>, total: u64) -> RangeOutcome {
    let Some(ranges) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };
    if ranges.contains(',') {
        return RangeOutcome::Full;
    }
    let Some((first, last)) = ranges.split_once('-') else {
        return RangeOutcome::Full;
    };

    match (first.trim(), last.trim()) {
        ("", "") => RangeOutcome::Full,
        ("", suffix) => suffix_range(suffix, total),
        (first, last) => bounded_range(first, last, total),
    }
}

/// `bytes=-N`: the final N bytes
fn suffix_range(suffix: &str, total: u64) -> RangeOutcome {
    let Ok(n) = suffix.parse::<u64>() else {
        return RangeOutcome::Full;
    };
    if n == 0 || total == 0 {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange {
        first: total.saturating_sub(n),
        last: total - 1,
    })
}

/// `bytes=A-` or `bytes=A-B`
fn bounded_range(first: &str, last: &str, total: u64) -> RangeOutcome {
    let Ok(first) = first.parse::<u64>() else {
        return RangeOutcome::Full;
    };
    let last = if last.is_empty() {
        None
    } else {
        match last.parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if let Some(last) = last {
        if last < first {
            // Syntactically invalid per RFC, ignored
            return RangeOutcome::Full;
        }
    }
    if first >= total {
        return RangeOutcome::Unsatisfiable;
    }

    let last = last.map_or(total - 1, |v| v.min(total - 1));
    RangeOutcome::Partial(ByteRange { first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        assert_eq!(evaluate(None, 100), RangeOutcome::Full);
    }

    #[test]
    fn test_closed_range() {
        let RangeOutcome::Partial(r) = evaluate(Some("bytes=0-9"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(r, ByteRange { first: 0, last: 9 });
        assert_eq!(r.byte_count(), 10);
        assert_eq!(r.content_range(100), "bytes 0-9/100");
    }

    #[test]
    fn test_open_range_and_clamping() {
        assert_eq!(
            evaluate(Some("bytes=50-"), 100),
            RangeOutcome::Partial(ByteRange { first: 50, last: 99 })
        );
        assert_eq!(
            evaluate(Some("bytes=90-500"), 100),
            RangeOutcome::Partial(ByteRange { first: 90, last: 99 })
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            evaluate(Some("bytes=-20"), 100),
            RangeOutcome::Partial(ByteRange { first: 80, last: 99 })
        );
        assert_eq!(
            evaluate(Some("bytes=-500"), 100),
            RangeOutcome::Partial(ByteRange { first: 0, last: 99 })
        );
        assert_eq!(evaluate(Some("bytes=-0"), 100), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_unsatisfiable() {
        assert_eq!(evaluate(Some("bytes=200-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=0-"), 0), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_ignored_forms() {
        assert_eq!(evaluate(Some("bytes=a-b"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("bytes=0-9,20-29"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("items=0-9"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("bytes=9-0"), 100), RangeOutcome::Full);
    }
}
