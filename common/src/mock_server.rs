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

//! In-process object storage server speaking enough of the S3 REST API for
//! the integration tests.
//!
//! Requests are authenticated with the legacy HMAC-SHA1 signature, either in
//! the `Authorization` header or in the query string. Unsigned requests may
//! only read objects stored with the `public-read` ACL.

use bytes::Bytes;
use chrono::SecondsFormat;
use http::{HeaderMap, Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use s3lite::s3::headers::Headers;
use s3lite::s3::signer::{get_canonical_string, sign};
use s3lite::s3::utils::{UtcTime, md5sum_hash, to_http_header_value, utc_now};
use std::collections::{BTreeMap, VecDeque};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const DEFAULT_MAX_KEYS: usize = 1000;

/// Request as received by the server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    /// Raw path, still percent-encoded
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body_len: usize,
}

#[derive(Clone, Debug)]
struct StoredObject {
    data: Bytes,
    content_type: String,
    etag: String,
    last_modified: UtcTime,
    public: bool,
    metadata: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct State {
    access_key: String,
    secret_key: String,
    buckets: BTreeMap<String, BTreeMap<String, StoredObject>>,
    canned: VecDeque<(StatusCode, Bytes)>,
    requests: Vec<RecordedRequest>,
}

/// Handle of a running mock server; the server stops when this is dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server on an ephemeral port of the loopback interface
    pub async fn start(access_key: &str, secret_key: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(State {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            ..Default::default()
        }));

        let shared = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            loop {
                let (stream, remote_addr) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        log::error!("failed to accept connection: {e}");
                        continue;
                    }
                };

                let state = Arc::clone(&shared);
                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { Ok::<_, Infallible>(handle_request(&state, req).await) }
                    });
                    if let Err(e) = http1::Builder::new()
                        .keep_alive(true)
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        log::debug!("connection from {remote_addr} closed: {e}");
                    }
                });
            }
        });

        log::debug!("mock server listening on {addr}");
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to point a client at, e.g. `http://127.0.0.1:41234`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answers the next request with given status and body instead of
    /// processing it. Canned responses are used in the order they were added.
    pub fn respond_with(&self, status: u16, body: impl Into<Bytes>) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.lock().canned.push_back((status, body.into()));
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.lock().buckets.contains_key(bucket)
    }

    /// Stored content of an object
    pub fn object_data(&self, bucket: &str, object: &str) -> Option<Bytes> {
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|b| b.get(object))
            .map(|o| o.data.clone())
    }

    /// User metadata stored with an object, names lowercased
    pub fn object_metadata(&self, bucket: &str, object: &str) -> Vec<(String, String)> {
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|b| b.get(object))
            .map(|o| o.metadata.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

type MockResponse = Response<Full<Bytes>>;

async fn handle_request(state: &Mutex<State>, req: Request<Incoming>) -> MockResponse {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "IncompleteBody",
                &format!("failed to read request body: {e}"),
                parts.uri.path(),
            );
        }
    };

    let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
    state.requests.push(RecordedRequest {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers.clone(),
        body_len: body.len(),
    });
    log::debug!("mock server: {} {}", parts.method, parts.uri);

    if let Some((status, body)) = state.canned.pop_front() {
        return response(status).body(Full::new(body)).expect("valid response");
    }

    let raw_path = parts.uri.path();
    let query = parse_query(parts.uri.query());
    let (bucket, object) = split_path(raw_path);

    let authenticated = match check_auth(&state, &parts.method, raw_path, &query, &parts.headers) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let Some(bucket) = bucket else {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "MethodNotAllowed",
            "listing of buckets is not supported",
            raw_path,
        );
    };

    if !authenticated {
        let public = object.as_ref().is_some_and(|o| {
            parts.method == Method::GET
                && state
                    .buckets
                    .get(&bucket)
                    .and_then(|b| b.get(o))
                    .is_some_and(|o| o.public)
        });
        if !public {
            return error_response(StatusCode::FORBIDDEN, "AccessDenied", "Access Denied", raw_path);
        }
    }

    match (parts.method, object) {
        (Method::PUT, None) => create_bucket(&mut state, &bucket, raw_path),
        (Method::DELETE, None) => delete_bucket(&mut state, &bucket, raw_path),
        (Method::GET, None) => list_bucket(&state, &bucket, &query, raw_path),
        (Method::PUT, Some(object)) => {
            put_object(&mut state, &bucket, &object, &parts.headers, body, raw_path)
        }
        (Method::GET, Some(object)) => get_object(&state, &bucket, &object, raw_path),
        (Method::DELETE, Some(object)) => delete_object(&mut state, &bucket, &object, raw_path),
        (_, _) => error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "MethodNotAllowed",
            "The specified method is not allowed against this resource.",
            raw_path,
        ),
    }
}

/// Returns `Ok(true)` for a correctly signed request, `Ok(false)` for an
/// unsigned one and an error response for a bad signature.
fn check_auth(
    state: &State,
    method: &Method,
    raw_path: &str,
    query: &[(String, String)],
    headers: &HeaderMap,
) -> Result<bool, MockResponse> {
    let resource = raw_path.trim_start_matches('/');

    if let Some(value) = headers.get(http::header::AUTHORIZATION) {
        let value = value.to_str().unwrap_or_default();
        let Some((access_key, signature)) = value
            .strip_prefix("AWS ")
            .and_then(|v| v.split_once(':'))
        else {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "InvalidArgument",
                "Authorization header is invalid",
                raw_path,
            ));
        };
        if access_key != state.access_key {
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "InvalidAccessKeyId",
                "The AWS Access Key Id you provided does not exist in our records.",
                raw_path,
            ));
        }

        let mut signed_headers = Headers::new();
        for (name, value) in headers {
            signed_headers.add(name.as_str(), value.to_str().unwrap_or_default());
        }
        let canonical = get_canonical_string(method.as_str(), resource, &signed_headers, None);
        return verify(state, &canonical, signature, raw_path).map(|_| true);
    }

    let param = |name: &str| {
        query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    };
    if let (Some(access_key), Some(expires), Some(signature)) =
        (param("AWSAccessKeyId"), param("Expires"), param("Signature"))
    {
        if access_key != state.access_key {
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "InvalidAccessKeyId",
                "The AWS Access Key Id you provided does not exist in our records.",
                raw_path,
            ));
        }
        let expired = expires
            .parse::<i64>()
            .map_or(true, |v| v < utc_now().timestamp());
        if expired {
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "AccessDenied",
                "Request has expired",
                raw_path,
            ));
        }
        let canonical =
            get_canonical_string(method.as_str(), resource, &Headers::new(), Some(expires));
        return verify(state, &canonical, signature, raw_path).map(|_| true);
    }

    Ok(false)
}

fn verify(state: &State, canonical: &str, signature: &str, raw_path: &str) -> Result<(), MockResponse> {
    let expected = sign(&state.secret_key, canonical, false).map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            &e.to_string(),
            raw_path,
        )
    })?;
    if expected != signature {
        log::debug!("mock server: signature mismatch for {canonical:?}");
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "SignatureDoesNotMatch",
            "The request signature we calculated does not match the signature you provided.",
            raw_path,
        ));
    }
    Ok(())
}

fn create_bucket(state: &mut State, bucket: &str, raw_path: &str) -> MockResponse {
    if state.buckets.contains_key(bucket) {
        return error_response(
            StatusCode::CONFLICT,
            "BucketAlreadyOwnedByYou",
            "Your previous request to create the named bucket succeeded and you already own it.",
            raw_path,
        );
    }
    state.buckets.insert(bucket.to_string(), BTreeMap::new());
    response(StatusCode::OK)
        .header(http::header::LOCATION, format!("/{bucket}"))
        .body(Full::new(Bytes::new()))
        .expect("valid response")
}

fn delete_bucket(state: &mut State, bucket: &str, raw_path: &str) -> MockResponse {
    match state.buckets.get(bucket) {
        None => no_such_bucket(raw_path),
        Some(objects) if !objects.is_empty() => error_response(
            StatusCode::CONFLICT,
            "BucketNotEmpty",
            "The bucket you tried to delete is not empty",
            raw_path,
        ),
        Some(_) => {
            state.buckets.remove(bucket);
            empty_response(StatusCode::NO_CONTENT)
        }
    }
}

fn list_bucket(
    state: &State,
    bucket: &str,
    query: &[(String, String)],
    raw_path: &str,
) -> MockResponse {
    let Some(objects) = state.buckets.get(bucket) else {
        return no_such_bucket(raw_path);
    };
    let param = |name: &str| {
        query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };
    let prefix = param("prefix");
    let marker = param("marker");
    let max_keys = param("max-keys")
        .parse::<usize>()
        .unwrap_or(DEFAULT_MAX_KEYS);

    let mut matching = objects
        .iter()
        .filter(|(key, _)| key.starts_with(&prefix) && key.as_str() > marker.as_str());
    let page: Vec<_> = matching.by_ref().take(max_keys).collect();
    let is_truncated = matching.next().is_some();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
    );
    xml.push_str(&format!(
        "<Name>{}</Name><Prefix>{}</Prefix><Marker>{}</Marker>\
         <MaxKeys>{max_keys}</MaxKeys><IsTruncated>{is_truncated}</IsTruncated>",
        escape(bucket),
        escape(&prefix),
        escape(&marker),
    ));
    for (key, object) in page {
        xml.push_str(&format!(
            "<Contents><Key>{}</Key><LastModified>{}</LastModified>\
             <ETag>&quot;{}&quot;</ETag><Size>{}</Size>\
             <StorageClass>STANDARD</StorageClass></Contents>",
            escape(key),
            object
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            object.etag,
            object.data.len(),
        ));
    }
    xml.push_str("</ListBucketResult>");

    response(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/xml")
        .body(Full::new(Bytes::from(xml)))
        .expect("valid response")
}

fn put_object(
    state: &mut State,
    bucket: &str,
    object: &str,
    headers: &HeaderMap,
    body: Bytes,
    raw_path: &str,
) -> MockResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    if let Some(md5) = header("content-md5")
        && md5 != md5sum_hash(&body)
    {
        return error_response(
            StatusCode::BAD_REQUEST,
            "BadDigest",
            "The Content-MD5 you specified did not match what we received.",
            raw_path,
        );
    }

    let Some(objects) = state.buckets.get_mut(bucket) else {
        return no_such_bucket(raw_path);
    };

    let etag = format!("{:x}", md5::compute(&body));
    let metadata = headers
        .iter()
        .filter(|(name, _)| name.as_str().starts_with("x-amz-meta-"))
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    objects.insert(
        object.to_string(),
        StoredObject {
            data: body,
            content_type: header("content-type")
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            etag: etag.clone(),
            last_modified: utc_now(),
            public: header("x-amz-acl").as_deref() == Some("public-read"),
            metadata,
        },
    );

    response(StatusCode::OK)
        .header(http::header::ETAG, format!("\"{etag}\""))
        .body(Full::new(Bytes::new()))
        .expect("valid response")
}

fn get_object(state: &State, bucket: &str, object: &str, raw_path: &str) -> MockResponse {
    let Some(objects) = state.buckets.get(bucket) else {
        return no_such_bucket(raw_path);
    };
    let Some(stored) = objects.get(object) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "NoSuchKey",
            "The specified key does not exist.",
            raw_path,
        );
    };

    let mut builder = response(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, stored.content_type.as_str())
        .header(http::header::ETAG, format!("\"{}\"", stored.etag))
        .header(
            http::header::LAST_MODIFIED,
            to_http_header_value(stored.last_modified),
        );
    for (name, value) in &stored.metadata {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .body(Full::new(stored.data.clone()))
        .expect("valid response")
}

fn delete_object(state: &mut State, bucket: &str, object: &str, raw_path: &str) -> MockResponse {
    let Some(objects) = state.buckets.get_mut(bucket) else {
        return no_such_bucket(raw_path);
    };
    objects.remove(object);
    empty_response(StatusCode::NO_CONTENT)
}

fn response(status: StatusCode) -> http::response::Builder {
    Response::builder()
        .status(status)
        .header(http::header::DATE, to_http_header_value(utc_now()))
        .header("x-amz-request-id", uuid::Uuid::new_v4().simple().to_string())
}

fn empty_response(status: StatusCode) -> MockResponse {
    response(status).body(Full::new(Bytes::new())).expect("valid response")
}

fn no_such_bucket(raw_path: &str) -> MockResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "NoSuchBucket",
        "The specified bucket does not exist",
        raw_path,
    )
}

fn error_response(status: StatusCode, code: &str, message: &str, resource: &str) -> MockResponse {
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <Error><Code>{code}</Code><Message>{}</Message><Resource>{}</Resource>\
         <RequestId>{}</RequestId></Error>",
        escape(message),
        escape(resource),
        uuid::Uuid::new_v4().simple(),
    );
    response(status)
        .header(http::header::CONTENT_TYPE, "application/xml")
        .body(Full::new(Bytes::from(xml)))
        .expect("valid response")
}

/// Splits `/bucket/key` into its decoded parts
fn split_path(raw_path: &str) -> (Option<String>, Option<String>) {
    let trimmed = raw_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return (None, None);
    }
    let decode = |s: &str| {
        urlencoding::decode(s)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| s.to_string())
    };
    match trimmed.split_once('/') {
        Some((bucket, key)) if !key.is_empty() => (Some(decode(bucket)), Some(decode(key))),
        Some((bucket, _)) => (Some(decode(bucket)), None),
        None => (Some(decode(trimmed)), None),
    }
}

fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    let decode = |s: &str| {
        urlencoding::decode(&s.replace('+', " "))
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| s.to_string())
    };
    query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
