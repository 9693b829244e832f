// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Signature V2 (HMAC-SHA1) for S3 API

use crate::s3::creds::Credentials;
use crate::s3::error::Error;
use crate::s3::header_constants::X_AMZ_PREFIX;
use crate::s3::headers::Headers;
use crate::s3::http::Url;
use crate::s3::utils::{b64encode, urlencode};
use http::Method;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

#[cfg(feature = "ring")]
use ring::hmac;

#[cfg(all(not(feature = "ring"), feature = "default-crypto"))]
use hmac::{Hmac, Mac};
#[cfg(all(not(feature = "ring"), feature = "default-crypto"))]
use sha1::Sha1;

const ALTERNATIVE_DATE_HEADER: &str = "x-amz-date";

lazy_static! {
    static ref ACL_REGEX: Regex = Regex::new(r"[&?]acl($|=|&)").unwrap();
    static ref TORRENT_REGEX: Regex = Regex::new(r"[&?]torrent($|=|&)").unwrap();
    static ref LOGGING_REGEX: Regex = Regex::new(r"[&?]logging($|=|&)").unwrap();
}

/// Returns HMAC-SHA1 of given data keyed by given key
#[cfg(feature = "ring")]
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    Ok(hmac::sign(&key, data).as_ref().to_vec())
}

/// Returns HMAC-SHA1 of given data keyed by given key
#[cfg(all(not(feature = "ring"), feature = "default-crypto"))]
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut hasher = Hmac::<Sha1>::new_from_slice(key)
        .map_err(|e| Error::CryptoUnavailable(format!("HMAC-SHA1: {e}")))?;
    hasher.update(data);
    Ok(hasher.finalize().into_bytes().to_vec())
}

/// Returns HMAC-SHA1 of given data keyed by given key
#[cfg(not(any(feature = "ring", feature = "default-crypto")))]
pub fn hmac_sha1(_key: &[u8], _data: &[u8]) -> Result<Vec<u8>, Error> {
    Err(Error::CryptoUnavailable(
        "HMAC-SHA1 requires the `default-crypto` or `ring` feature".into(),
    ))
}

/// Returns the string to sign for given method, resource path and headers.
///
/// `resource_path` has no leading `/` and may carry a query string, e.g.
/// `mybucket/photo.jpg?acl`. Query parameters are dropped except for the
/// `acl`, `torrent` and `logging` sub-resources, of which at most one is kept.
/// `expires` replaces the date line for query-string authentication.
pub fn get_canonical_string(
    method: &str,
    resource_path: &str,
    headers: &Headers,
    expires: Option<&str>,
) -> String {
    let mut interesting: BTreeMap<String, &str> = BTreeMap::new();
    for (name, value) in headers.iter() {
        let key = name.to_lowercase();
        if key == "content-type"
            || key == "content-md5"
            || key == "date"
            || key.starts_with(X_AMZ_PREFIX)
        {
            interesting.insert(key, value);
        }
    }

    if interesting.contains_key(ALTERNATIVE_DATE_HEADER) {
        interesting.insert("date".into(), "");
    }
    if let Some(v) = expires {
        interesting.insert("date".into(), v);
    }
    interesting.entry("content-type".into()).or_insert("");
    interesting.entry("content-md5".into()).or_insert("");

    let mut canonical = String::with_capacity(64 + resource_path.len());
    canonical.push_str(method);
    canonical.push('\n');
    for (key, value) in &interesting {
        if key.starts_with(X_AMZ_PREFIX) {
            canonical.push_str(key);
            canonical.push(':');
        }
        canonical.push_str(value);
        canonical.push('\n');
    }

    canonical.push('/');
    match resource_path.find('?') {
        Some(i) => canonical.push_str(&resource_path[..i]),
        None => canonical.push_str(resource_path),
    }

    if ACL_REGEX.is_match(resource_path) {
        canonical.push_str("?acl");
    } else if TORRENT_REGEX.is_match(resource_path) {
        canonical.push_str("?torrent");
    } else if LOGGING_REGEX.is_match(resource_path) {
        canonical.push_str("?logging");
    }

    canonical
}

/// Signs canonical string with secret key; returns base64 encoded signature,
/// percent-encoded if `url_encode` is set
pub fn sign(secret_key: &str, canonical_string: &str, url_encode: bool) -> Result<String, Error> {
    let signature = b64encode(hmac_sha1(
        secret_key.as_bytes(),
        canonical_string.as_bytes(),
    )?);
    if url_encode {
        return Ok(urlencode(&signature).into_owned());
    }
    Ok(signature)
}

/// Returns `Authorization` header value for given credentials and signature
pub fn get_authorization(access_key: &str, signature: &str) -> String {
    format!("AWS {access_key}:{signature}")
}

/// Signs given headers with signature V2 and appends the `Authorization` header
pub fn sign_v2_s3(
    method: &Method,
    resource_path: &str,
    headers: &mut Headers,
    creds: &Credentials,
) -> Result<(), Error> {
    let canonical = get_canonical_string(method.as_str(), resource_path, headers, None);
    let signature = sign(&creds.secret_key, &canonical, false)?;
    headers.add(
        crate::s3::header_constants::AUTHORIZATION,
        get_authorization(&creds.access_key, &signature),
    );
    Ok(())
}

/// Returns a query-string authenticated URL valid until `expires` (seconds since epoch)
pub fn presign_v2(
    url: &Url,
    method: &Method,
    resource_path: &str,
    creds: &Credentials,
    expires: i64,
) -> Result<String, Error> {
    let expires = expires.to_string();
    let canonical = get_canonical_string(
        method.as_str(),
        resource_path,
        &Headers::new(),
        Some(&expires),
    );
    let signature = sign(&creds.secret_key, &canonical, true)?;
    let separator = if url.query.is_empty() { '?' } else { '&' };
    Ok(format!(
        "{url}{separator}AWSAccessKeyId={}&Expires={expires}&Signature={signature}",
        urlencode(&creds.access_key)
    ))
}
