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

use super::ObjectContent;
use crate::s3::Client;
use crate::s3::error::Error;
use crate::s3::header_constants::{CONTENT_MD5, CONTENT_TYPE, DEFAULT_CONTENT_TYPE};
use crate::s3::headers::Headers;
use crate::s3::response::PutObjectResponse;
use crate::s3::sink::Discard;
use crate::s3::transport::RequestBody;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name, md5sum_hash};
use http::Method;

const USER_METADATA_PREFIX: &str = "x-amz-meta-";

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation.
///
/// Uploads the whole content in a single request. In-memory content carries
/// a `Content-MD5` header so the service can verify it.
#[derive(Clone, Debug)]
pub struct PutObject {
    client: Client,

    extra_headers: Option<Headers>,
    bucket: String,
    object: String,

    content: ObjectContent,
    content_type: Option<String>,
    user_metadata: Option<Headers>,
    public: bool,
}

impl PutObject {
    pub fn new(client: Client, bucket: String, object: String, content: ObjectContent) -> Self {
        Self {
            client,
            extra_headers: None,
            bucket,
            object,
            content,
            content_type: None,
            user_metadata: None,
            public: false,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Headers>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    /// Defaults to `application/octet-stream`
    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    /// User metadata; keys are prefixed with `x-amz-meta-` unless they already are
    pub fn user_metadata(mut self, user_metadata: Option<Headers>) -> Self {
        self.user_metadata = user_metadata;
        self
    }

    /// Grants anonymous read access to the stored object
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

impl S3Api for PutObject {
    type S3Response = PutObjectResponse;
}

impl ToS3Request for PutObject {
    type Sink = Discard;

    fn to_s3request(self) -> Result<(S3Request, Discard), Error> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let body = self.content.into_request_body()?;

        let mut headers = Headers::new();
        headers.add(
            CONTENT_TYPE,
            self.content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        );
        match &body {
            RequestBody::Bytes(b) => headers.add(CONTENT_MD5, md5sum_hash(b)),
            RequestBody::Empty => headers.add(CONTENT_MD5, md5sum_hash(&[])),
            RequestBody::File { .. } => {}
        }
        if let Some(metadata) = self.user_metadata {
            for (key, value) in metadata {
                if key.to_lowercase().starts_with(USER_METADATA_PREFIX) {
                    headers.add(key, value);
                } else {
                    headers.add(format!("{USER_METADATA_PREFIX}{key}"), value);
                }
            }
        }
        if let Some(v) = self.extra_headers {
            headers.add_all(v);
        }

        let req = S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .headers(headers)
            .body(body)
            .make_public(self.public)
            .build();
        Ok((req, Discard))
    }
}
