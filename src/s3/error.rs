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

//! Error definitions for S3 operations

use crate::s3::utils::get_option_text;
use bytes::{Buf, Bytes};
use thiserror::Error;
use xmltree::Element;

/// Maximum number of body bytes kept in a [`RemoteError`].
pub const MAX_BODY_SNIPPET: usize = 1024;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid client configuration, e.g. empty credentials.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request signing algorithm is not available in this build.
    #[error("signing algorithm unavailable: {0}")]
    CryptoUnavailable(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Local source file could not be read or target file could not be written.
    #[error("local I/O error: {0}")]
    LocalIo(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error("XML parse error: {0}")]
    Xml(String),
}

impl From<xmltree::ParseError> for Error {
    fn from(err: xmltree::ParseError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl Error {
    /// Returns the remote error if the service rejected the request.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Error::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Connection-level failures raised before any response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Transient failures persisted past the retry ceiling.
    #[error("request failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be constructed or sent and retrying cannot help.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Validation errors raised before a request is built.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),
}

/// The service responded with a status outside 200..=299.
#[derive(Clone, Debug, Default, Error)]
#[error("s3 operation failed; status: {status_code} {status_text}, code: {}, message: {}", .code.as_deref().unwrap_or("-"), .message.as_deref().unwrap_or("-"))]
pub struct RemoteError {
    pub status_code: u16,
    pub status_text: String,
    /// Leading bytes of the response body, lossily decoded.
    pub body_snippet: String,
    /// `Code` element of the XML error body, if present.
    pub code: Option<String>,
    /// `Message` element of the XML error body, if present.
    pub message: Option<String>,
}

impl RemoteError {
    /// Builds a remote error from a drained response body.
    pub fn new(status_code: u16, status_text: impl Into<String>, body: Bytes) -> Self {
        // decode past the limit so a character straddling it stays whole
        let decoded_len = body.len().min(MAX_BODY_SNIPPET + 3);
        let mut body_snippet = String::from_utf8_lossy(&body[..decoded_len]).into_owned();
        let mut end = body_snippet.len().min(MAX_BODY_SNIPPET);
        while !body_snippet.is_char_boundary(end) {
            end -= 1;
        }
        body_snippet.truncate(end);

        let (code, message) = match Element::parse(body.reader()) {
            Ok(root) => (
                get_option_text(&root, "Code"),
                get_option_text(&root, "Message"),
            ),
            Err(_) => (None, None),
        };

        Self {
            status_code,
            status_text: status_text.into(),
            body_snippet,
            code,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// True for the service's "bucket already exists" family of rejections.
    pub fn is_bucket_already_exists(&self) -> bool {
        matches!(
            self.code.as_deref(),
            Some("BucketAlreadyExists") | Some("BucketAlreadyOwnedByYou")
        )
    }
}
