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

use super::Client;
use crate::s3::builders::GetPresignedObjectUrl;

impl Client {
    /// Creates a [`GetPresignedObjectUrl`] request builder.
    ///
    /// The URL authenticates through its `AWSAccessKeyId`, `Expires` and
    /// `Signature` query parameters and stays valid for `expiry_seconds`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("ACCESS", "SECRET");
    ///     let client = Client::new("https://s3.amazonaws.com".parse().unwrap(), Some(provider)).unwrap();
    ///     let resp = client
    ///         .get_presigned_object_url("bucket-name", "object-name", 3600)
    ///         .send().await.unwrap();
    ///     println!("{}", resp.url);
    /// }
    /// ```
    pub fn get_presigned_object_url<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
        expiry_seconds: u32,
    ) -> GetPresignedObjectUrl {
        GetPresignedObjectUrl::new(self.clone(), bucket.into(), object.into())
            .expiry_seconds(expiry_seconds)
    }
}
