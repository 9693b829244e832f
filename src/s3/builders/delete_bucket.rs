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
use crate::s3::response::DeleteBucketResponse;
use crate::s3::sink::Discard;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use http::Method;

/// Argument builder for the [`DeleteBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteBucket.html) S3 API operation.
///
/// The bucket must be empty; otherwise the service rejects the request.
#[derive(Clone, Debug)]
pub struct DeleteBucket {
    client: Client,

    extra_headers: Option<Headers>,
    bucket: String,
}

impl DeleteBucket {
    pub fn new(client: Client, bucket: String) -> Self {
        Self {
            client,
            extra_headers: None,
            bucket,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Headers>) -> Self {
        self.extra_headers = extra_headers;
        self
    }
}

impl S3Api for DeleteBucket {
    type S3Response = DeleteBucketResponse;
}

impl ToS3Request for DeleteBucket {
    type Sink = Discard;

    fn to_s3request(self) -> Result<(S3Request, Discard), Error> {
        check_bucket_name(&self.bucket)?;

        let req = S3Request::builder()
            .client(self.client)
            .method(Method::DELETE)
            .bucket(Some(self.bucket))
            .headers(self.extra_headers.unwrap_or_default())
            .build();
        Ok((req, Discard))
    }
}
