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

use super::error::ValidationErr;
use super::headers::QueryParams;
use super::http::{AddressingStyle, BaseUrl, DEFAULT_INSECURE_PORT, Url};

// ===========================
// Url Tests
// ===========================

#[test]
fn test_url_default() {
    let url = Url::default();
    assert!(!url.https);
    assert!(url.host.is_empty());
    assert_eq!(url.port, 0);
    assert!(url.path.is_empty());
    assert!(url.query.is_empty());
}

#[test]
fn test_url_host_header_value() {
    let mut url = Url {
        https: true,
        host: "example.com".to_string(),
        port: 9000,
        path: "/".to_string(),
        query: QueryParams::new(),
    };
    assert_eq!(url.host_header_value(), "example.com:9000");

    url.port = 0;
    assert_eq!(url.host_header_value(), "example.com");
}

#[test]
fn test_url_display() {
    let mut query = QueryParams::new();
    query.add("prefix", "a b");
    let url = Url {
        https: false,
        host: "localhost".to_string(),
        port: 8080,
        path: "/t1".to_string(),
        query,
    };
    assert_eq!(url.to_string(), "http://localhost:8080/t1?prefix=a%20b");
}

#[test]
fn test_url_display_adds_leading_slash() {
    let url = Url {
        https: true,
        host: "example.com".to_string(),
        port: 0,
        path: "t1/f.txt".to_string(),
        query: QueryParams::new(),
    };
    assert_eq!(url.to_string(), "https://example.com/t1/f.txt");
}

// ===========================
// BaseUrl Tests
// ===========================

#[test]
fn test_base_url_default() {
    let base_url = BaseUrl::default();
    assert!(base_url.https);
    assert_eq!(base_url.host(), "s3.amazonaws.com");
    assert_eq!(base_url.port(), 0);
    assert_eq!(base_url.insecure_port, DEFAULT_INSECURE_PORT);
}

#[test]
fn test_base_url_parse() {
    let base_url: BaseUrl = "s3.amazonaws.com".parse().unwrap();
    assert!(base_url.https);
    assert_eq!(base_url.host(), "s3.amazonaws.com");
    assert_eq!(base_url.port(), 0);

    let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    assert!(!base_url.https);
    assert_eq!(base_url.host(), "127.0.0.1");
    assert_eq!(base_url.port(), 9000);
}

#[test]
fn test_base_url_default_ports_are_dropped() {
    let base_url: BaseUrl = "https://s3.amazonaws.com:443".parse().unwrap();
    assert_eq!(base_url.port(), 0);

    let base_url: BaseUrl = "http://s3.amazonaws.com:80".parse().unwrap();
    assert_eq!(base_url.port(), 0);
}

#[test]
fn test_base_url_parse_errors() {
    for s in [
        "ftp://s3.amazonaws.com",
        "https://s3.amazonaws.com/bucket",
        "https://s3.amazonaws.com/?acl",
    ] {
        let err = s.parse::<BaseUrl>().unwrap_err();
        assert!(
            matches!(err, ValidationErr::InvalidBaseUrl(_)),
            "unexpected error for {s}: {err:?}"
        );
    }
}

#[test]
fn test_build_url() {
    let base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    let mut query = QueryParams::new();
    query.add("max-keys", "10");

    let url = base_url.build_url("t1", &query);
    assert_eq!(url.to_string(), "https://s3.amazonaws.com/t1?max-keys=10");
}

#[test]
fn test_build_insecure_url_from_https_base() {
    let mut base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    let url = base_url.build_insecure_url("t1/f.txt", &QueryParams::new());
    assert!(!url.https);
    assert_eq!(url.to_string(), "http://s3.amazonaws.com/t1/f.txt");

    base_url.insecure_port = 8080;
    let url = base_url.build_insecure_url("t1/f.txt", &QueryParams::new());
    assert_eq!(url.to_string(), "http://s3.amazonaws.com:8080/t1/f.txt");
}

#[test]
fn test_build_insecure_url_keeps_http_port() {
    let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    let url = base_url.build_insecure_url("t1/f.txt", &QueryParams::new());
    assert_eq!(url.to_string(), "http://127.0.0.1:9000/t1/f.txt");
}

// ===========================
// Resource path Tests
// ===========================

#[test]
fn test_resource_path_plain() {
    let base_url = BaseUrl::default();
    assert_eq!(
        base_url.resource_path(AddressingStyle::Plain, Some("AK"), "t1", None),
        "t1"
    );
    assert_eq!(
        base_url.resource_path(AddressingStyle::Plain, Some("AK"), "t1", Some("f.txt")),
        "t1/f.txt"
    );
}

#[test]
fn test_resource_path_namespaced() {
    let base_url = BaseUrl::default();
    assert_eq!(
        base_url.resource_path(AddressingStyle::Namespaced, Some("AK"), "t1", Some("f.txt")),
        "AK-t1/f.txt"
    );
    // without an access key there is no namespace
    assert_eq!(
        base_url.resource_path(AddressingStyle::Namespaced, None, "t1", None),
        "t1"
    );
}

#[test]
fn test_resource_path_encodes_object() {
    let base_url = BaseUrl::default();
    assert_eq!(
        base_url.resource_path(AddressingStyle::Plain, None, "t1", Some("dir/a b+c.txt")),
        "t1/dir/a%20b%2Bc.txt"
    );
    assert_eq!(
        base_url.resource_path(AddressingStyle::Plain, None, "t1", Some("/lead.txt")),
        "t1/lead.txt"
    );
}
