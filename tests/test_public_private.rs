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

use s3lite::s3::error::Error;
use s3lite::s3::types::S3Api;
use s3lite_common::test_context::{ACCESS_KEY, TestContext};
use s3lite_common::utils::rand_object_name;

const CONTENT: &str = "Amazon S3 Test File";

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn public_object_is_readable_without_credentials() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let object_name = rand_object_name();

    ctx.client
        .put_object(&bucket_name, &object_name, CONTENT)
        .public(true)
        .send()
        .await
        .unwrap();
    let put = ctx.server.last_request().unwrap();
    assert_eq!(put.headers.get("x-amz-acl").unwrap(), "public-read");

    let resp = ctx
        .anonymous_client()
        .get_public_object(&bucket_name, &object_name)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content, CONTENT.as_bytes());

    let get = ctx.server.last_request().unwrap();
    assert!(!get.headers.contains_key("authorization"));
    assert!(get.headers.contains_key("date"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn signed_requests_carry_authorization() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let object_name = rand_object_name();

    ctx.client
        .put_object(&bucket_name, &object_name, CONTENT)
        .send()
        .await
        .unwrap();
    let put = ctx.server.last_request().unwrap();
    assert!(!put.headers.contains_key("x-amz-acl"));

    ctx.client
        .get_object(&bucket_name, &object_name)
        .send()
        .await
        .unwrap();
    let get = ctx.server.last_request().unwrap();
    let authorization = get.headers.get("authorization").unwrap().to_str().unwrap();
    assert!(authorization.starts_with(&format!("AWS {ACCESS_KEY}:")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn private_object_rejects_anonymous_read() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let object_name = rand_object_name();

    ctx.client
        .put_object(&bucket_name, &object_name, CONTENT)
        .send()
        .await
        .unwrap();

    // an authenticated client may still read anonymously
    let err = ctx
        .client
        .get_public_object(&bucket_name, &object_name)
        .send()
        .await
        .unwrap_err();
    let e = err.as_remote().unwrap();
    assert_eq!(e.status_code, 403);
    assert_eq!(e.code.as_deref(), Some("AccessDenied"));
    assert!(
        !ctx.server
            .last_request()
            .unwrap()
            .headers
            .contains_key("authorization")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn signed_operation_without_credentials_is_config_error() {
    let ctx = TestContext::new().await;
    let before = ctx.server.requests().len();

    let err = ctx
        .anonymous_client()
        .create_bucket("t1")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err}");
    // nothing reached the server
    assert_eq!(ctx.server.requests().len(), before);
}
