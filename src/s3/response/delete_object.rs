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

use super::{take_bucket, take_object};
use crate::s3::error::Error;
use crate::s3::sink::ResponseMeta;
use crate::s3::types::{FromS3Response, S3Request};
use http::HeaderMap;

/// Response of
/// [delete_object()](crate::s3::client::Client::delete_object)
/// API
#[derive(Clone, Debug)]
pub struct DeleteObjectResponse {
    pub headers: HeaderMap,
    pub bucket: String,
    pub object: String,
}

impl FromS3Response<ResponseMeta> for DeleteObjectResponse {
    fn from_s3response(mut req: S3Request, meta: ResponseMeta) -> Result<Self, Error> {
        Ok(Self {
            headers: meta.headers,
            bucket: take_bucket(&mut req)?,
            object: take_object(&mut req)?,
        })
    }
}
