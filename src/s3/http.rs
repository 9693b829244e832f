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

use crate::s3::error::ValidationErr;
use crate::s3::headers::QueryParams;
use crate::s3::utils::urlencode_object_key;
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Port used for the unencrypted public-read variant unless configured otherwise.
pub const DEFAULT_INSECURE_PORT: u16 = 80;

#[derive(Clone, Debug, Default)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: QueryParams,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// How bucket names map onto the first path segment of a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressingStyle {
    /// `<namespace>-<bucket>/<key>`: buckets live in a per-account namespace,
    /// which is the access key ID unless configured otherwise.
    Namespaced,
    /// `<bucket>/<key>`
    #[default]
    Plain,
}

impl AddressingStyle {
    /// Returns the bucket segment as it appears on the wire
    pub fn bucket_segment(&self, namespace: Option<&str>, bucket_name: &str) -> String {
        match (self, namespace) {
            (AddressingStyle::Namespaced, Some(ns)) if !ns.is_empty() => {
                format!("{ns}-{bucket_name}")
            }
            _ => bucket_name.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Port used when an anonymous GET is sent over plain HTTP.
    pub insecure_port: u16,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "s3.amazonaws.com".to_string(),
            port: 0,
            insecure_port: DEFAULT_INSECURE_PORT,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of [`str::parse`] method to create a [`BaseUrl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from host name
    /// let base_url = "s3.amazonaws.com".parse::<BaseUrl>().unwrap();
    /// let base_url = BaseUrl::from_str("s3.amazonaws.com").unwrap();
    /// // Get base URL from IPv4 address
    /// let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    /// // Get base URL from IPv6 address
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            insecure_port: DEFAULT_INSECURE_PORT,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, or 0 when the scheme's default port is used
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the resource path of a bucket or object, without leading `/`.
    ///
    /// This is the path as sent on the wire and as covered by the signature.
    pub fn resource_path(
        &self,
        style: AddressingStyle,
        namespace: Option<&str>,
        bucket_name: &str,
        object_name: Option<&str>,
    ) -> String {
        let mut path = style.bucket_segment(namespace, bucket_name);
        if let Some(v) = object_name {
            path.push('/');
            path.push_str(&urlencode_object_key(v.trim_start_matches('/')));
        }
        path
    }

    /// Builds URL for given resource path and query parameters
    pub fn build_url(&self, resource_path: &str, query: &QueryParams) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: format!("/{resource_path}"),
            query: query.clone(),
        }
    }

    /// Builds the plain HTTP URL used for anonymous reads of public objects.
    ///
    /// If the base URL already uses plain HTTP, its port is kept.
    pub fn build_insecure_url(&self, resource_path: &str, query: &QueryParams) -> Url {
        let port = match self.https {
            false => self.port,
            true if self.insecure_port == DEFAULT_INSECURE_PORT => 0,
            true => self.insecure_port,
        };
        Url {
            https: false,
            host: self.host.clone(),
            port,
            path: format!("/{resource_path}"),
            query: query.clone(),
        }
    }
}
