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
use crate::s3::builders::ListObjects;

impl Client {
    /// Creates a [`ListObjects`] request builder.
    ///
    /// To execute the request, call [`ListObjects::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing one page of the listing as a
    /// [`ListBucketResponse`](crate::s3::response::ListBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("ACCESS", "SECRET");
    ///     let client = Client::new("https://s3.amazonaws.com".parse().unwrap(), Some(provider)).unwrap();
    ///     let listing = client
    ///         .list_objects("bucket-name")
    ///         .prefix(Some("photos/".into()))
    ///         .send().await.unwrap();
    ///     for entry in listing.contents {
    ///         println!("{} {}", entry.key, entry.size);
    ///     }
    /// }
    /// ```
    pub fn list_objects<S: Into<String>>(&self, bucket: S) -> ListObjects {
        ListObjects::new(self.clone(), bucket.into())
    }
}
