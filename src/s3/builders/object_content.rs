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

use crate::s3::error::Error;
use crate::s3::transport::RequestBody;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Content of an object to upload.
///
/// In-memory content is sent with a `Content-MD5` header; file content is
/// streamed from disk with the length taken from the file metadata.
#[derive(Clone, Debug)]
pub enum ObjectContent {
    Bytes(Bytes),
    File(PathBuf),
}

impl ObjectContent {
    pub fn empty() -> Self {
        ObjectContent::Bytes(Bytes::new())
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        ObjectContent::File(path.into())
    }

    /// Converts the content into a request body; a missing file fails with
    /// [`Error::LocalIo`]
    pub(crate) fn into_request_body(self) -> Result<RequestBody, Error> {
        match self {
            ObjectContent::Bytes(b) if b.is_empty() => Ok(RequestBody::Empty),
            ObjectContent::Bytes(b) => Ok(RequestBody::Bytes(b)),
            ObjectContent::File(path) => {
                let metadata = std::fs::metadata(&path)?;
                if !metadata.is_file() {
                    return Err(std::io::Error::other(format!("{path:?} is not a file")).into());
                }
                Ok(RequestBody::File {
                    path,
                    len: metadata.len(),
                })
            }
        }
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for ObjectContent {
    fn from(value: Bytes) -> Self {
        ObjectContent::Bytes(value)
    }
}

impl From<String> for ObjectContent {
    fn from(value: String) -> Self {
        ObjectContent::Bytes(Bytes::from(value))
    }
}

impl From<&'static str> for ObjectContent {
    fn from(value: &'static str) -> Self {
        ObjectContent::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<Vec<u8>> for ObjectContent {
    fn from(value: Vec<u8>) -> Self {
        ObjectContent::Bytes(Bytes::from(value))
    }
}

impl From<&Path> for ObjectContent {
    fn from(value: &Path) -> Self {
        ObjectContent::File(value.to_path_buf())
    }
}

impl From<PathBuf> for ObjectContent {
    fn from(value: PathBuf) -> Self {
        ObjectContent::File(value)
    }
}
