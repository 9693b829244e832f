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
use crate::s3::headers::{Headers, QueryParams};
use crate::s3::response::ListBucketResponse;
use crate::s3::sink::ParseListing;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use http::Method;

/// Argument builder for the [`ListObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html) S3 API operation.
///
/// Returns one page of keys. Pass [`ListBucketResponse::next_marker`] as the
/// marker of the following request while the listing is truncated.
#[derive(Clone, Debug)]
pub struct ListObjects {
    client: Client,

    extra_headers: Option<Headers>,
    extra_query_params: Option<QueryParams>,
    bucket: String,

    prefix: Option<String>,
    marker: Option<String>,
    max_keys: Option<u32>,
}

impl ListObjects {
    pub fn new(client: Client, bucket: String) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            bucket,
            prefix: None,
            marker: None,
            max_keys: None,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Headers>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<QueryParams>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    /// Limits the listing to keys beginning with the prefix
    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Key to start after
    pub fn marker(mut self, marker: Option<String>) -> Self {
        self.marker = marker;
        self
    }

    pub fn max_keys(mut self, max_keys: Option<u32>) -> Self {
        self.max_keys = max_keys;
        self
    }
}

impl S3Api for ListObjects {
    type S3Response = ListBucketResponse;
}

impl ToS3Request for ListObjects {
    type Sink = ParseListing;

    fn to_s3request(self) -> Result<(S3Request, ParseListing), Error> {
        check_bucket_name(&self.bucket)?;

        let mut query_params = QueryParams::new();
        query_params.add_opt("prefix", self.prefix);
        query_params.add_opt("marker", self.marker);
        query_params.add_opt("max-keys", self.max_keys.map(|v| v.to_string()));
        if let Some(v) = self.extra_query_params {
            query_params.add_all(v);
        }

        let req = S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build();
        Ok((req, ParseListing))
    }
}
