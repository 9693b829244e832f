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

use super::{header_text, take_bucket, take_object};
use crate::s3::error::Error;
use crate::s3::header_constants::{CONTENT_TYPE, ETAG, LAST_MODIFIED};
use crate::s3::sink::{ResponseMeta, WrittenFile};
use crate::s3::types::{FromS3Response, S3Request};
use crate::s3::utils::{UtcTime, from_http_header_value};
use bytes::Bytes;
use http::HeaderMap;
use std::path::PathBuf;

/// Object attributes carried in the headers of a GET response
#[derive(Clone, Debug, Default)]
pub struct ObjectInfo {
    pub etag: Option<String>,
    pub content_type: Option<String>,
    pub last_modified: Option<UtcTime>,
}

impl ObjectInfo {
    fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            etag: header_text(headers, ETAG).map(|v| v.trim_matches('"').to_string()),
            content_type: header_text(headers, CONTENT_TYPE),
            last_modified: header_text(headers, LAST_MODIFIED)
                .and_then(|v| from_http_header_value(&v).ok()),
        }
    }
}

/// Response of [get_object()](crate::s3::client::Client::get_object) API
#[derive(Clone, Debug)]
pub struct GetObjectResponse {
    pub headers: HeaderMap,
    pub bucket: String,
    pub object: String,
    pub info: ObjectInfo,
    pub content: Bytes,
}

impl FromS3Response<(ResponseMeta, Bytes)> for GetObjectResponse {
    fn from_s3response(
        mut req: S3Request,
        (meta, content): (ResponseMeta, Bytes),
    ) -> Result<Self, Error> {
        Ok(Self {
            bucket: take_bucket(&mut req)?,
            object: take_object(&mut req)?,
            info: ObjectInfo::from_headers(&meta.headers),
            headers: meta.headers,
            content,
        })
    }
}

/// Response of [get_object()](crate::s3::client::Client::get_object) API
/// when the content is written to a file
#[derive(Clone, Debug)]
pub struct DownloadObjectResponse {
    pub headers: HeaderMap,
    pub bucket: String,
    pub object: String,
    pub info: ObjectInfo,
    pub path: PathBuf,
    /// Number of bytes written to `path`
    pub size: u64,
}

impl FromS3Response<(ResponseMeta, WrittenFile)> for DownloadObjectResponse {
    fn from_s3response(
        mut req: S3Request,
        (meta, file): (ResponseMeta, WrittenFile),
    ) -> Result<Self, Error> {
        Ok(Self {
            bucket: take_bucket(&mut req)?,
            object: take_object(&mut req)?,
            info: ObjectInfo::from_headers(&meta.headers),
            headers: meta.headers,
            path: file.path,
            size: file.size,
        })
    }
}
