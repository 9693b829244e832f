// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Consumers of successful response bodies
//!
//! [`Transport`](crate::s3::transport::Transport) hands the response to a sink
//! only when the status is in `200..=299`.

use crate::s3::error::{Error, TransportError};
use crate::s3::response::ListBucketResponse;
use async_std::io::WriteExt;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use http::{HeaderMap, StatusCode};
use std::mem;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Status line and headers of a consumed response
#[derive(Clone, Debug)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    fn take(resp: &mut reqwest::Response) -> Self {
        Self {
            status: resp.status(),
            headers: mem::take(resp.headers_mut()),
        }
    }
}

fn body_error(e: reqwest::Error) -> Error {
    Error::Transport(TransportError::Request(e))
}

/// Handler for the body of a successful response
#[async_trait]
pub trait ResponseSink: Send + Sized {
    type Output: Send;

    async fn consume(self, resp: reqwest::Response) -> Result<Self::Output, Error>;
}

/// Reads and drops the body
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

#[async_trait]
impl ResponseSink for Discard {
    type Output = ResponseMeta;

    async fn consume(self, mut resp: reqwest::Response) -> Result<ResponseMeta, Error> {
        let meta = ResponseMeta::take(&mut resp);
        resp.bytes().await.map_err(body_error)?;
        Ok(meta)
    }
}

/// Collects the body in memory
#[derive(Clone, Copy, Debug, Default)]
pub struct ToBytes;

#[async_trait]
impl ResponseSink for ToBytes {
    type Output = (ResponseMeta, Bytes);

    async fn consume(self, mut resp: reqwest::Response) -> Result<Self::Output, Error> {
        let meta = ResponseMeta::take(&mut resp);
        let body = resp.bytes().await.map_err(body_error)?;
        Ok((meta, body))
    }
}

/// File written by [`ToFile`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Number of bytes written
    pub size: u64,
}

/// Streams the body into a file.
///
/// The body is written to a temporary file in the same directory, which is
/// renamed to the target path once complete. Missing parent directories are
/// created.
#[derive(Clone, Debug)]
pub struct ToFile(pub PathBuf);

impl ToFile {
    fn temp_path(target: &Path) -> Result<PathBuf, Error> {
        let parent_dir = target.parent().ok_or(std::io::Error::other(format!(
            "path {target:?} does not have a parent directory"
        )))?;
        let file_name = target.file_name().ok_or(std::io::Error::other(
            "could not get filename-component of path",
        ))?;
        let mut tmp_file_name = file_name.to_os_string();
        tmp_file_name.push(format!("_{}", Uuid::new_v4().to_string().replace('-', "_")));
        Ok(parent_dir.join(tmp_file_name))
    }

    async fn write_body(resp: reqwest::Response, tmp_file_path: &Path) -> Result<u64, Error> {
        let mut fp = async_std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(tmp_file_path)
            .await?;

        let mut total_bytes_written = 0;
        let mut stream = resp.bytes_stream();
        while let Some(bytes) = stream.next().await {
            let bytes = bytes.map_err(body_error)?;
            total_bytes_written += bytes.len() as u64;
            fp.write_all(&bytes).await?;
        }
        fp.flush().await?;
        Ok(total_bytes_written)
    }
}

#[async_trait]
impl ResponseSink for ToFile {
    type Output = (ResponseMeta, WrittenFile);

    async fn consume(self, mut resp: reqwest::Response) -> Result<Self::Output, Error> {
        let meta = ResponseMeta::take(&mut resp);
        let file_path = self.0;
        if file_path.is_dir() {
            return Err(std::io::Error::other("path is a directory").into());
        }
        let tmp_file_path = Self::temp_path(&file_path)?;
        if let Some(parent_dir) = tmp_file_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.is_dir()
        {
            async_std::fs::create_dir_all(parent_dir).await?;
        }

        match Self::write_body(resp, &tmp_file_path).await {
            Ok(size) => {
                async_std::fs::rename(&tmp_file_path, &file_path).await?;
                Ok((
                    meta,
                    WrittenFile {
                        path: file_path,
                        size,
                    },
                ))
            }
            Err(e) => {
                let _ = async_std::fs::remove_file(&tmp_file_path).await;
                Err(e)
            }
        }
    }
}

/// Parses the body as a bucket listing
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseListing;

#[async_trait]
impl ResponseSink for ParseListing {
    type Output = ListBucketResponse;

    async fn consume(self, resp: reqwest::Response) -> Result<ListBucketResponse, Error> {
        let body = resp.bytes().await.map_err(body_error)?;
        ListBucketResponse::from_xml(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        let resp = http::Response::builder()
            .status(status)
            .header("ETag", "\"abc\"")
            .body(body)
            .unwrap();
        reqwest::Response::from(resp)
    }

    #[tokio::test]
    async fn test_discard_keeps_headers() {
        let meta = Discard.consume(response(204, "")).await.unwrap();
        assert_eq!(meta.status, StatusCode::NO_CONTENT);
        assert_eq!(meta.headers.get("etag").unwrap(), "\"abc\"");
    }

    #[tokio::test]
    async fn test_to_bytes() {
        let (meta, body) = ToBytes
            .consume(response(200, "Amazon S3 Test File"))
            .await
            .unwrap();
        assert_eq!(meta.status, StatusCode::OK);
        assert_eq!(body.len(), 19);
    }

    #[tokio::test]
    async fn test_to_file_writes_and_renames() {
        let dir = std::env::temp_dir().join(format!("s3lite-sink-{}", Uuid::new_v4()));
        let target = dir.join("nested").join("f.txt");

        let (_, written) = ToFile(target.clone())
            .consume(response(200, "Amazon S3 Test File"))
            .await
            .unwrap();

        assert_eq!(written.size, 19);
        assert_eq!(written.path, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"Amazon S3 Test File");
        // only the target remains
        assert_eq!(std::fs::read_dir(dir.join("nested")).unwrap().count(), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_to_file_rejects_directory() {
        let dir = std::env::temp_dir();
        let err = ToFile(dir).consume(response(200, "x")).await.unwrap_err();
        assert!(matches!(err, Error::LocalIo(_)));
    }

    #[tokio::test]
    async fn test_parse_listing() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
            <Name>t1</Name><Prefix></Prefix><Marker></Marker><MaxKeys>1000</MaxKeys>\
            <IsTruncated>false</IsTruncated>\
            <Contents><Key>f.txt</Key><LastModified>2009-10-12T17:50:30.000Z</LastModified>\
            <ETag>&quot;fba9dede5f27731c9771645a39863328&quot;</ETag><Size>19</Size></Contents>\
            </ListBucketResult>";
        let listing = ParseListing.consume(response(200, body)).await.unwrap();
        assert_eq!(listing.name, "t1");
        assert_eq!(listing.contents.len(), 1);
        assert_eq!(listing.contents[0].key, "f.txt");
        assert_eq!(listing.contents[0].size, 19);
    }
}
