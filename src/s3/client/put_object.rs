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
use crate::s3::builders::{ObjectContent, PutObject};

impl Client {
    /// Creates a [`PutObject`] request builder to upload an object in a single request.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::s3::response::PutObjectResponse).
    ///
    /// The content is either in memory or a local file, see [`ObjectContent`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::builders::ObjectContent;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::response::PutObjectResponse;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("ACCESS", "SECRET");
    ///     let client = Client::new("https://s3.amazonaws.com".parse().unwrap(), Some(provider)).unwrap();
    ///     let resp: PutObjectResponse = client
    ///         .put_object("bucket-name", "index.html", ObjectContent::from_file("site/index.html"))
    ///         .content_type(Some("text/html".into()))
    ///         .public(true)
    ///         .send().await.unwrap();
    ///     println!("stored '{}' with etag {:?}", resp.object, resp.etag);
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, C: Into<ObjectContent>>(
        &self,
        bucket: S1,
        object: S2,
        content: C,
    ) -> PutObject {
        PutObject::new(self.clone(), bucket.into(), object.into(), content.into())
    }
}
