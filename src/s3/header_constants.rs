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

pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const AUTHORIZATION: &str = "Authorization";
pub const DATE: &str = "Date";
pub const EXPIRES: &str = "Expires";
pub const ETAG: &str = "ETag";
pub const LAST_MODIFIED: &str = "Last-Modified";

pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_PREFIX: &str = "x-amz-";

pub const ACL_PUBLIC_READ: &str = "public-read";

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
