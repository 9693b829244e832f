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

use crate::s3::Client;
use crate::s3::error::Error;
use crate::s3::headers::Headers;
use crate::s3::response::{DownloadObjectResponse, GetObjectResponse};
use crate::s3::sink::{ResponseSink, ToBytes, ToFile};
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use http::Method;
use std::path::PathBuf;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`Client::get_object`](crate::s3::client::Client::get_object) method.
/// The content is collected in memory; use [`GetObject::to_file`] to stream
/// it into a local file instead.
#[derive(Clone, Debug)]
pub struct GetObject {
    client: Client,

    extra_headers: Option<Headers>,
    bucket: String,
    object: String,
    anonymous: bool,
}

impl GetObject {
    pub fn new(client: Client, bucket: String, object: String) -> Self {
        Self {
            client,
            extra_headers: None,
            bucket,
            object,
            anonymous: false,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Headers>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    /// Reads a public object without signing, over plain HTTP
    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    /// Writes the object to `path` instead of returning its content
    pub fn to_file(self, path: impl Into<PathBuf>) -> DownloadObject {
        DownloadObject {
            inner: self,
            path: path.into(),
        }
    }

    fn build_request<S: ResponseSink>(self, sink: S) -> Result<(S3Request, S), Error> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let req = S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .headers(self.extra_headers.unwrap_or_default())
            .use_auth(!self.anonymous)
            .build();
        Ok((req, sink))
    }
}

impl S3Api for GetObject {
    type S3Response = GetObjectResponse;
}

impl ToS3Request for GetObject {
    type Sink = ToBytes;

    fn to_s3request(self) -> Result<(S3Request, ToBytes), Error> {
        self.build_request(ToBytes)
    }
}

/// [`GetObject`] writing the content into a local file.
///
/// The file is written under a temporary name and renamed once the whole
/// body has arrived, so a failed download leaves no partial file at `path`.
#[derive(Clone, Debug)]
pub struct DownloadObject {
    inner: GetObject,
    path: PathBuf,
}

impl S3Api for DownloadObject {
    type S3Response = DownloadObjectResponse;
}

impl ToS3Request for DownloadObject {
    type Sink = ToFile;

    fn to_s3request(self) -> Result<(S3Request, ToFile), Error> {
        self.inner.build_request(ToFile(self.path))
    }
}
