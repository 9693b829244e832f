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
use s3lite_common::test_context::TestContext;
use s3lite_common::utils::{rand_object_name, temp_file_path};

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn no_content_reaches_sink() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;

    ctx.server.respond_with(204, "");
    let resp = ctx
        .client
        .get_object(&bucket_name, rand_object_name())
        .send()
        .await
        .unwrap();
    assert!(resp.content.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn not_found_is_remote_error() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;

    let err = ctx
        .client
        .get_object(&bucket_name, "missing.txt")
        .send()
        .await
        .unwrap_err();
    let Error::Remote(e) = err else {
        panic!("unexpected error: {err}");
    };
    assert!(e.is_not_found());
    assert_eq!(e.status_text, "Not Found");
    assert_eq!(e.code.as_deref(), Some("NoSuchKey"));
    assert_eq!(e.message.as_deref(), Some("The specified key does not exist."));
    assert!(e.body_snippet.contains("<Code>NoSuchKey</Code>"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn server_error_is_remote_error_without_retry() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let before = ctx.server.requests().len();

    ctx.server.respond_with(500, "backend exploded");
    let err = ctx
        .client
        .list_objects(&bucket_name)
        .send()
        .await
        .unwrap_err();
    let e = err.as_remote().unwrap();
    assert_eq!(e.status_code, 500);
    assert_eq!(e.status_text, "Internal Server Error");
    assert_eq!(e.body_snippet, "backend exploded");
    assert!(e.code.is_none());
    // a response was received, so the request is not repeated
    assert_eq!(ctx.server.requests().len(), before + 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn long_error_body_is_truncated() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;

    ctx.server.respond_with(503, "x".repeat(5000));
    let err = ctx
        .client
        .delete_bucket(&bucket_name)
        .send()
        .await
        .unwrap_err();
    let e = err.as_remote().unwrap();
    assert_eq!(e.status_code, 503);
    assert_eq!(e.body_snippet.len(), 1024);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn failed_download_leaves_no_file() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let target = temp_file_path("never.txt");

    let err = ctx
        .client
        .get_object(&bucket_name, "missing.txt")
        .to_file(&target)
        .send()
        .await
        .unwrap_err();
    assert!(err.as_remote().unwrap().is_not_found());
    assert!(!target.exists());
    assert!(!target.parent().unwrap().exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn missing_bucket_is_not_found() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .list_objects("no-such-bucket")
        .send()
        .await
        .unwrap_err();
    let e = err.as_remote().unwrap();
    assert!(e.is_not_found());
    assert_eq!(e.code.as_deref(), Some("NoSuchBucket"));
}
