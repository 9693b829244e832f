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
use crate::s3::builders::GetObject;

impl Client {
    /// Creates a [`GetObject`] request builder to download an object.
    ///
    /// To execute the request, call [`GetObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::s3::response::GetObjectResponse).
    /// Call [`GetObject::to_file()`] first to write the content to a file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::response::DownloadObjectResponse;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("ACCESS", "SECRET");
    ///     let client = Client::new("https://s3.amazonaws.com".parse().unwrap(), Some(provider)).unwrap();
    ///     let resp: DownloadObjectResponse = client
    ///         .get_object("bucket-name", "object-name")
    ///         .to_file("/tmp/object-name")
    ///         .send().await.unwrap();
    ///     println!("wrote {} bytes to {:?}", resp.size, resp.path);
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObject {
        GetObject::new(self.clone(), bucket.into(), object.into())
    }

    /// Creates a [`GetObject`] request builder for an object readable by anyone.
    ///
    /// The request is not signed and goes to the plain HTTP endpoint; no
    /// credentials are needed.
    pub fn get_public_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObject {
        self.get_object(bucket, object).anonymous(true)
    }
}
