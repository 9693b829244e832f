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

//! Response types for ListObjects API

use crate::s3::error::Error;
use crate::s3::types::{FromS3Response, S3Request};
use crate::s3::utils::{UtcTime, from_iso8601utc, get_default_text, get_option_text, get_text};
use bytes::{Buf, Bytes};
use xmltree::Element;

/// One object of a bucket listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub last_modified: Option<UtcTime>,
    /// Entity tag without surrounding quotes
    pub etag: Option<String>,
    pub size: u64,
}

/// Response of [list_objects()](crate::s3::client::Client::list_objects) API
#[derive(Clone, Debug, Default)]
pub struct ListBucketResponse {
    pub name: String,
    pub prefix: Option<String>,
    pub marker: Option<String>,
    pub max_keys: Option<u32>,
    pub is_truncated: bool,
    pub contents: Vec<ListEntry>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl ListBucketResponse {
    /// Parses a `ListBucketResult` document
    pub fn from_xml(body: Bytes) -> Result<Self, Error> {
        let root = Element::parse(body.reader())?;
        if root.name != "ListBucketResult" {
            return Err(Error::Xml(format!(
                "unexpected root element <{}> in bucket listing",
                root.name
            )));
        }

        let mut contents = Vec::new();
        for node in root.children.iter() {
            let Some(content) = node.as_element() else {
                continue;
            };
            if content.name != "Contents" {
                continue;
            }

            let last_modified = match get_option_text(content, "LastModified") {
                Some(v) => Some(from_iso8601utc(&v).map_err(|e| {
                    Error::Xml(format!("invalid LastModified '{v}': {e}"))
                })?),
                None => None,
            };
            let size = get_default_text(content, "Size");
            let size = match size.is_empty() {
                true => 0,
                false => size
                    .parse::<u64>()
                    .map_err(|e| Error::Xml(format!("invalid Size '{size}': {e}")))?,
            };

            contents.push(ListEntry {
                key: get_text(content, "Key")?,
                last_modified,
                etag: get_option_text(content, "ETag").map(|v| v.trim_matches('"').to_string()),
                size,
            });
        }

        Ok(Self {
            name: get_default_text(&root, "Name"),
            prefix: non_empty(get_option_text(&root, "Prefix")),
            marker: non_empty(get_option_text(&root, "Marker")),
            max_keys: get_option_text(&root, "MaxKeys").and_then(|v| v.parse().ok()),
            is_truncated: get_default_text(&root, "IsTruncated").eq_ignore_ascii_case("true"),
            contents,
        })
    }

    /// Marker to pass with the next request when the listing is truncated
    pub fn next_marker(&self) -> Option<&str> {
        match self.is_truncated {
            true => self.contents.last().map(|e| e.key.as_str()),
            false => None,
        }
    }
}

impl FromS3Response<ListBucketResponse> for ListBucketResponse {
    fn from_s3response(_s3req: S3Request, output: ListBucketResponse) -> Result<Self, Error> {
        Ok(output)
    }
}
