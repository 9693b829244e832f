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
use s3lite::s3::utils::utc_now;
use s3lite_common::test_context::{ACCESS_KEY, TestContext};
use s3lite_common::utils::rand_object_name;

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn get_presigned_object_url() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let object_name = rand_object_name();

    ctx.client
        .put_object(&bucket_name, &object_name, "Amazon S3 Test File")
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client
        .get_presigned_object_url(&bucket_name, &object_name, 3600)
        .send()
        .await
        .unwrap();
    assert!(
        resp.url
            .starts_with(&format!("{}/{bucket_name}/{object_name}?", ctx.server.base_url()))
    );
    assert!(resp.url.contains(&format!("AWSAccessKeyId={ACCESS_KEY}")));
    assert!(resp.url.contains(&format!("Expires={}", resp.expires.timestamp())));
    assert!(resp.expires > utc_now());

    // the URL works without any credentials
    let http_resp = reqwest::get(&resp.url).await.unwrap();
    assert_eq!(http_resp.status(), 200);
    assert_eq!(http_resp.text().await.unwrap(), "Amazon S3 Test File");
    let req = ctx.server.last_request().unwrap();
    assert!(!req.headers.contains_key("authorization"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn expired_presigned_url_is_rejected() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    let object_name = rand_object_name();

    ctx.client
        .put_object(&bucket_name, &object_name, "Amazon S3 Test File")
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client
        .get_presigned_object_url(&bucket_name, &object_name, 60)
        .request_time(Some(utc_now() - chrono::Duration::hours(1)))
        .send()
        .await
        .unwrap();

    let http_resp = reqwest::get(&resp.url).await.unwrap();
    assert_eq!(http_resp.status(), 403);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn presign_requires_credentials() {
    let ctx = TestContext::new().await;
    let err = ctx
        .anonymous_client()
        .get_presigned_object_url("t1", "f.txt", 60)
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
