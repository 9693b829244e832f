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

//! Assembly of the headers sent with every request

use crate::s3::creds::Credentials;
use crate::s3::error::Error;
use crate::s3::header_constants::{ACL_PUBLIC_READ, DATE, X_AMZ_ACL};
use crate::s3::headers::Headers;
use crate::s3::signer::sign_v2_s3;
use crate::s3::utils::{UtcTime, to_http_header_value};
use http::Method;

/// Returns the complete header set for a request.
///
/// `extra` holds operation specific headers (content type, MD5, user
/// metadata) and goes first. `Date` is then set from `date`, followed by the
/// public-read ACL header if `make_public` is set. When `use_auth` is set the
/// headers built so far are signed and `Authorization` is appended last.
/// `use_auth` without credentials fails with [`Error::Config`].
pub fn build_headers(
    method: &Method,
    resource_path: &str,
    extra: Headers,
    make_public: bool,
    use_auth: bool,
    creds: Option<&Credentials>,
    date: UtcTime,
) -> Result<Headers, Error> {
    let mut headers = extra;
    headers.set(DATE, to_http_header_value(date));
    if make_public {
        headers.set(X_AMZ_ACL, ACL_PUBLIC_READ);
    }

    if use_auth {
        let creds = creds.ok_or_else(|| {
            Error::Config("credentials are required for authenticated requests".into())
        })?;
        creds.validate()?;
        sign_v2_s3(method, resource_path, &mut headers, creds)?;
    }

    Ok(headers)
}
