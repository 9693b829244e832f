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

//! Various utility and helper functions

use crate::s3::error::{Error, ValidationErr};
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
pub use urlencoding::decode as urldecode;
pub use urlencoding::encode as urlencode;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets bas64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5::compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP header value of given time, e.g. `Tue, 27 Mar 2007 19:36:42 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ") {
            Ok(d) => d,
            _ => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")?,
        },
        Utc,
    ))
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes an object key for use in a URL path, keeping `/` separators.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates given bucket name.
///
/// Names shorter than three characters are accepted since they may be
/// namespaced with the access key on the wire.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    lazy_static! {
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[a-z0-9]([a-z0-9.-]{0,61}[a-z0-9])?$").unwrap();
        static ref VALID_IP_ADDR_REGEX: Regex = Regex::new("^(\\d+\\.){3}\\d+$").unwrap();
    }

    let invalid = |reason: &str| ValidationErr::InvalidBucketName {
        name: bucket_name.to_string(),
        reason: reason.to_string(),
    };

    let name = bucket_name.trim();
    if name.is_empty() {
        return Err(invalid("bucket name cannot be empty"));
    }
    if name.len() > 63 {
        return Err(invalid("bucket name cannot be greater than 63 characters"));
    }
    if VALID_IP_ADDR_REGEX.is_match(name) {
        return Err(invalid("bucket name cannot be an IP address"));
    }
    if name.contains("..") || name.contains(".-") || name.contains("-.") {
        return Err(invalid(
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        ));
    }
    if !VALID_BUCKET_NAME_REGEX.is_match(name) {
        return Err(invalid("bucket name does not follow S3 standards strictly"));
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    // URL normalization would drop or collapse these segments after signing
    if object_name.split('/').any(|s| s == "." || s == "..") {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name {object_name:?} cannot contain '.' or '..' path segments"
        )));
    }
    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text(element: &Element, tag: &str) -> Result<String, Error> {
    Ok(element
        .get_child(tag)
        .ok_or(Error::Xml(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(Error::Xml(format!("text of <{tag}> tag not found")))?
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_option_text(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .and_then(|v| v.get_text().map(|s| s.to_string()))
}

/// Gets default text value of given XML element for given tag.
pub fn get_default_text(element: &Element, tag: &str) -> String {
    get_option_text(element, tag).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_http_header_value() {
        let t = Utc.with_ymd_and_hms(2007, 3, 27, 19, 36, 42).unwrap();
        assert_eq!(to_http_header_value(t), "Tue, 27 Mar 2007 19:36:42 GMT");
        let t = Utc.with_ymd_and_hms(2024, 1, 5, 7, 8, 9).unwrap();
        assert_eq!(to_http_header_value(t), "Fri, 05 Jan 2024 07:08:09 GMT");
    }

    #[test]
    fn test_http_header_value_parses_back() {
        let t = Utc.with_ymd_and_hms(2007, 3, 27, 19, 36, 42).unwrap();
        assert_eq!(from_http_header_value(&to_http_header_value(t)).unwrap(), t);
    }

    #[test]
    fn test_from_iso8601utc() {
        let t = from_iso8601utc("2009-10-12T17:50:30.000Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2009, 10, 12, 17, 50, 30).unwrap());
        let t = from_iso8601utc("2009-10-12T17:50:30Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2009, 10, 12, 17, 50, 30).unwrap());
    }

    #[test]
    fn test_md5sum_hash() {
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_urlencode_object_key() {
        assert_eq!(urlencode_object_key("dir/a b+c.txt"), "dir/a%20b%2Bc.txt");
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("t1a").is_ok());
        assert!(check_bucket_name("t1").is_ok());
        assert!(check_bucket_name("a").is_ok());
        assert!(check_bucket_name("my.bucket-01").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("a-").is_err());
        assert!(check_bucket_name("UPPER").is_err());
        assert!(check_bucket_name("192.168.1.1").is_err());
        assert!(check_bucket_name("a..b").is_err());
        assert!(check_bucket_name("-abc").is_err());
        assert!(check_bucket_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("f.txt").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name("a/../b.txt").is_err());
        assert!(check_object_name("./b.txt").is_err());
        assert!(check_object_name("a/..").is_err());
        assert!(check_object_name("a/..b/c.txt").is_ok());
        assert!(check_object_name("...").is_ok());
    }
}
