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
use crate::s3::builders::DeleteBucket;
use crate::s3::error::Error;
use crate::s3::response::{DeleteBucketResponse, DeleteObjectResponse, ListBucketResponse};
use crate::s3::types::S3Api;

impl Client {
    /// Creates a [`DeleteBucket`] request builder.
    ///
    /// To execute the request, call [`DeleteBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`DeleteBucketResponse`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::response::DeleteBucketResponse;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("ACCESS", "SECRET");
    ///     let client = Client::new("https://s3.amazonaws.com".parse().unwrap(), Some(provider)).unwrap();
    ///     let resp: DeleteBucketResponse =
    ///         client.delete_bucket("bucket-name").send().await.unwrap();
    ///     println!("bucket '{}' is removed", resp.bucket);
    /// }
    /// ```
    pub fn delete_bucket<S: Into<String>>(&self, bucket: S) -> DeleteBucket {
        DeleteBucket::new(self.clone(), bucket.into())
    }

    /// Deletes a bucket after removing all of its objects.
    ///
    /// A bucket that does not exist is treated as already deleted.
    pub async fn delete_and_purge_bucket<S: Into<String>>(
        &self,
        bucket: S,
    ) -> Result<Option<DeleteBucketResponse>, Error> {
        let bucket: String = bucket.into();

        let mut marker: Option<String> = None;
        loop {
            let listing: ListBucketResponse = match self
                .list_objects(&bucket)
                .marker(marker.take())
                .send()
                .await
            {
                Ok(v) => v,
                Err(Error::Remote(e)) if e.is_not_found() => return Ok(None),
                Err(e) => return Err(e),
            };

            for entry in &listing.contents {
                let _resp: DeleteObjectResponse =
                    self.delete_object(&bucket, &entry.key).send().await?;
            }

            if !listing.is_truncated {
                break;
            }
            marker = listing.next_marker().map(str::to_string);
            if marker.is_none() {
                break;
            }
        }

        match self.delete_bucket(&bucket).send().await {
            Ok(resp) => Ok(Some(resp)),
            Err(Error::Remote(e)) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
