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
use crate::s3::client::DEFAULT_EXPIRY_SECONDS;
use crate::s3::error::Error;
use crate::s3::headers::QueryParams;
use crate::s3::response::GetPresignedObjectUrlResponse;
use crate::s3::signer::presign_v2;
use crate::s3::utils::{UtcTime, check_bucket_name, check_object_name, utc_now};
use http::Method;

/// Argument for [get_presigned_object_url()](crate::s3::client::Client::get_presigned_object_url) API
#[derive(Clone, Debug)]
pub struct GetPresignedObjectUrl {
    client: Client,

    bucket: String,
    object: String,
    method: Method,
    expiry_seconds: u32,
    request_time: Option<UtcTime>,
}

impl GetPresignedObjectUrl {
    pub fn new(client: Client, bucket: String, object: String) -> Self {
        Self {
            client,
            bucket,
            object,
            method: Method::GET,
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            request_time: None,
        }
    }

    /// Method the URL is valid for; defaults to `GET`
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn expiry_seconds(mut self, seconds: u32) -> Self {
        self.expiry_seconds = seconds;
        self
    }

    /// Time the expiry is counted from; defaults to now
    pub fn request_time(mut self, request_time: Option<UtcTime>) -> Self {
        self.request_time = request_time;
        self
    }

    /// Computes the URL locally; no request is sent.
    ///
    /// Fails with [`Error::Config`] if the client has no credentials.
    pub async fn send(self) -> Result<GetPresignedObjectUrlResponse, Error> {
        // NOTE: async only to read like the other operations
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let creds = self.client.credentials().ok_or_else(|| {
            Error::Config("credentials are required to presign a URL".into())
        })?;
        creds.validate()?;

        let expires = self.request_time.unwrap_or_else(utc_now)
            + chrono::Duration::seconds(self.expiry_seconds as i64);

        let path = self.client.resource_path(&self.bucket, Some(&self.object));
        let url = self
            .client
            .base_url()
            .build_url(&path, &QueryParams::new());
        let url = presign_v2(&url, &self.method, &path, &creds, expires.timestamp())?;

        Ok(GetPresignedObjectUrlResponse {
            bucket: self.bucket,
            object: self.object,
            url,
            expires,
        })
    }
}
