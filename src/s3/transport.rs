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

//! HTTP execution with bounded retry and response classification

use crate::s3::error::{Error, RemoteError, TransportError};
use crate::s3::header_constants::{AUTHORIZATION, CONTENT_LENGTH};
use crate::s3::headers::Headers;
use crate::s3::http::Url;
use crate::s3::retry::{RetryPolicy, retry_with_backoff};
use crate::s3::sink::ResponseSink;
use async_std::io::ReadExt;
use bytes::Bytes;
use futures_util::Stream;
use http::Method;
use reqwest::Body;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default time allowed to establish a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default time allowed for a whole request, including reading the response body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Body of an outgoing request.
///
/// The body is re-created for every attempt, so a file is reopened and
/// streamed again after a connection failure.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Bytes(Bytes),
    /// Local file streamed with its known length
    File { path: PathBuf, len: u64 },
}

impl RequestBody {
    pub fn len(&self) -> u64 {
        match self {
            RequestBody::Empty => 0,
            RequestBody::Bytes(b) => b.len() as u64,
            RequestBody::File { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn to_reqwest_body(&self) -> Result<Body, std::io::Error> {
        match self {
            RequestBody::Empty => Ok(Body::from(Bytes::new())),
            RequestBody::Bytes(b) => Ok(Body::from(b.clone())),
            RequestBody::File { path, .. } => {
                let file = async_std::fs::File::open(path).await?;
                Ok(Body::wrap_stream(file_stream(file)))
            }
        }
    }
}

/// Reads the file in chunks
fn file_stream(
    mut file: async_std::fs::File,
) -> impl Stream<Item = std::io::Result<Bytes>> + Send + 'static {
    async_stream::try_stream! {
        let mut buf = vec![0u8; 8192];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            yield Bytes::copy_from_slice(&buf[..n]);
        }
    }
}

/// Proxy that every request is sent through
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    fn to_proxy_url(&self) -> String {
        if self.host.contains("://") {
            format!("{}:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

/// Settings used to construct a [`Transport`]
#[derive(Clone, Debug)]
pub struct TransportConfig {
    pub proxy: Option<ProxyConfig>,
    pub retry_policy: RetryPolicy,
    pub ignore_cert_check: Option<bool>,
    /// Application name and version appended to the user agent
    pub app_info: Option<(String, String)>,
    pub connect_timeout: Duration,
    /// Expiring before response headers arrive counts as a connection failure
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            retry_policy: RetryPolicy::default(),
            ignore_cert_check: None,
            app_info: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

enum AttemptError {
    Send(reqwest::Error),
    Io(std::io::Error),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Send(e) => write!(f, "{e}"),
            AttemptError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl AttemptError {
    /// Failures that happen before any response arrives; request construction
    /// and redirect policy errors are permanent
    fn is_transient(&self) -> bool {
        match self {
            AttemptError::Send(e) => !e.is_builder() && !e.is_redirect(),
            AttemptError::Io(_) => false,
        }
    }
}

/// Executes requests against the remote endpoint
#[derive(Clone, Debug)]
pub struct Transport {
    http_client: reqwest::Client,
    retry_policy: RetryPolicy,
}

impl Transport {
    pub fn new(config: TransportConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout);

        let mut user_agent = String::from("s3lite (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") s3lite-rs/"
            + env!("CARGO_PKG_VERSION");
        if let Some((app_name, app_version)) = config.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.to_proxy_url())
                .map_err(|e| Error::Config(format!("invalid proxy {proxy:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = config.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        Ok(Self {
            http_client: builder
                .build()
                .map_err(|e| Error::Config(format!("unable to build HTTP client: {e}")))?,
            retry_policy: config.retry_policy,
        })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends the request and hands a successful response to `sink`.
    ///
    /// Connection level failures are retried per the retry policy. Any status
    /// outside `200..=299` fails with [`RemoteError`] after the body has been
    /// drained; the sink never sees such a response.
    pub async fn execute<S: ResponseSink>(
        &self,
        method: &Method,
        url: &Url,
        headers: &Headers,
        body: &RequestBody,
        sink: S,
    ) -> Result<S::Output, Error> {
        let url_str = url.to_string();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{method} {url_str}");
            for (name, value) in headers.iter() {
                if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    log::debug!("  {name}: <redacted>");
                } else {
                    log::debug!("  {name}: {value}");
                }
            }
        }

        let resp = retry_with_backoff(
            &self.retry_policy,
            |_| self.send_once(method, &url_str, headers, body),
            AttemptError::is_transient,
        )
        .await
        .map_err(|failure| match failure.error {
            AttemptError::Io(e) => Error::LocalIo(e),
            AttemptError::Send(e) if failure.exhausted => {
                log::warn!("{method} {url_str} failed after {} attempts: {e}", failure.attempts);
                Error::Transport(TransportError::Exhausted {
                    attempts: failure.attempts,
                    source: e,
                })
            }
            AttemptError::Send(e) => Error::Transport(TransportError::Request(e)),
        })?;

        let status = resp.status();
        log::debug!("{method} {url_str} -> {status}");
        if status.is_success() {
            return sink.consume(resp).await;
        }

        let status_text = status.canonical_reason().unwrap_or_default();
        // Draining lets the connection go back to the pool; a body that cannot
        // be read still yields the status
        let body = resp.bytes().await.unwrap_or_default();
        let e = RemoteError::new(status.as_u16(), status_text, body);
        log::warn!(
            "{method} {url_str} failed with {} {}: {}",
            e.status_code,
            e.status_text,
            e.body_snippet
        );
        Err(e.into())
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        headers: &Headers,
        body: &RequestBody,
    ) -> Result<reqwest::Response, AttemptError> {
        let mut req = self.http_client.request(method.clone(), url);
        for (name, value) in headers.iter() {
            req = req.header(name, value);
        }

        if *method == Method::PUT || *method == Method::POST || !body.is_empty() {
            if !headers.contains_key(CONTENT_LENGTH) {
                req = req.header(CONTENT_LENGTH, body.len().to_string());
            }
            req = req.body(body.to_reqwest_body().await.map_err(AttemptError::Io)?);
        }

        req.send().await.map_err(AttemptError::Send)
    }
}
