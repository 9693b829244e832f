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

//! # s3lite
//!
//! A small async client for the S3 REST API that authenticates requests with the
//! legacy HMAC-SHA1 header signature (`Authorization: AWS <access-key>:<signature>`).
//!
//! Each supported operation has a request builder (e.g. [`s3::builders::PutObject`],
//! [`s3::builders::ListObjects`]) obtained from [`s3::Client`]. All builders implement
//! [`s3::types::S3Api`], whose async [`send`](crate::s3::types::S3Api::send) method
//! executes the request and returns a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3lite::s3::Client;
//! use s3lite::s3::creds::StaticProvider;
//! use s3lite::s3::http::BaseUrl;
//! use s3lite::s3::types::S3Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
//!     let client = Client::builder(base_url)
//!         .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
//!         .build()
//!         .unwrap();
//!
//!     client.create_bucket("my-bucket").send().await.unwrap();
//!     client
//!         .put_object("my-bucket", "hello.txt", "Amazon S3 Test File")
//!         .send()
//!         .await
//!         .unwrap();
//! }
//! ```
//!
//! ## Design
//! - Request headers are assembled and signed by [`s3::request::build_headers`]
//! - [`s3::transport::Transport`] executes requests with a bounded retry policy and
//!   hands successful bodies to a [`s3::sink::ResponseSink`]
//! - Every failure surfaces as [`s3::error::Error`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
