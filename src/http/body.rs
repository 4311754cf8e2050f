//! Response body module
//!
//! Every response carries a boxed body so in-memory bodies (errors, listings)
//! and files streamed from disk share one type.

use futures_util::stream;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use std::io;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Body type of every response the server builds
pub type ResponseBody = http_body_util::combinators::UnsyncBoxBody<Bytes, io::Error>;

/// Size of each chunk read from disk while streaming
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Body held entirely in memory
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

pub fn empty() -> ResponseBody {
    full(Bytes::new())
}

/// Stream `len` bytes from the current position of `file`
///
/// The file is read in chunks of at most [`CHUNK_SIZE`]. Hitting EOF before
/// `len` bytes (the file shrank mid-response) ends the body with an error,
/// which makes hyper abort the connection instead of sending a short body.
pub fn file_stream(file: File, len: u64) -> ResponseBody {
    let frames = stream::try_unfold((file, len), |(mut file, remaining)| async move {
        if remaining == 0 {
            return Ok(None);
        }
        let want = usize::try_from(remaining).map_or(CHUNK_SIZE, |r| r.min(CHUNK_SIZE));
        let mut buf = vec![0u8; want];
        let n = file.read(&mut buf).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "file shrank while streaming",
            ));
        }
        buf.truncate(n);
        Ok(Some((Frame::data(Bytes::from(buf)), (file, remaining - n as u64))))
    });
    StreamBody::new(frames).boxed_unsync()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncSeekExt;

    #[tokio::test]
    async fn test_full_body_collects() {
        let bytes = full("hello").collect().await.unwrap().to_bytes();
        assert_eq!(bytes, "hello");
        assert!(empty().collect().await.unwrap().to_bytes().is_empty());
    }

    #[tokio::test]
    async fn test_file_stream_spans_multiple_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.wasm");
        let data: Vec<u8> = (0..CHUNK_SIZE * 2 + 17).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        let file = File::open(&path).await.unwrap();
        let bytes = file_stream(file, data.len() as u64)
            .collect()
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(bytes, data);
    }

    #[tokio::test]
    async fn test_file_stream_from_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut file = File::open(&path).await.unwrap();
        file.seek(std::io::SeekFrom::Start(4)).await.unwrap();
        let bytes = file_stream(file, 3).collect().await.unwrap().to_bytes();
        assert_eq!(bytes, "456");
    }

    #[tokio::test]
    async fn test_file_stream_errors_when_file_is_short() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, b"abc").unwrap();

        let file = File::open(&path).await.unwrap();
        let err = file_stream(file, 10).collect().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
