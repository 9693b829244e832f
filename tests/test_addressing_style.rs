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

use s3lite::s3::Client;
use s3lite::s3::error::Error;
use s3lite::s3::http::{AddressingStyle, BaseUrl};
use s3lite::s3::types::S3Api;
use s3lite_common::test_context::{ACCESS_KEY, TestContext};

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn namespaced_buckets_carry_access_key() {
    let ctx = TestContext::with_addressing_style(AddressingStyle::Namespaced).await;

    ctx.client.create_bucket("t1").send().await.unwrap();
    assert!(ctx.server.has_bucket(&format!("{ACCESS_KEY}-t1")));
    assert!(!ctx.server.has_bucket("t1"));

    ctx.client
        .put_object("t1", "f.txt", "Amazon S3 Test File")
        .send()
        .await
        .unwrap();
    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.path, format!("/{ACCESS_KEY}-t1/f.txt"));

    let resp = ctx.client.get_object("t1", "f.txt").send().await.unwrap();
    // responses name the bucket as the caller did
    assert_eq!(resp.bucket, "t1");
    assert_eq!(resp.content, "Amazon S3 Test File".as_bytes());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn plain_buckets_are_used_as_is() {
    let ctx = TestContext::new().await;

    ctx.client.create_bucket("t1").send().await.unwrap();
    assert!(ctx.server.has_bucket("t1"));
    assert_eq!(ctx.server.last_request().unwrap().path, "/t1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn namespaced_anonymous_read_uses_configured_namespace() {
    let ctx = TestContext::with_addressing_style(AddressingStyle::Namespaced).await;

    ctx.client.create_bucket("t1").send().await.unwrap();
    ctx.client
        .put_object("t1", "f.txt", "Amazon S3 Test File")
        .public(true)
        .send()
        .await
        .unwrap();

    let anon = ctx.anonymous_client();
    assert_eq!(
        anon.resource_path("t1", Some("f.txt")),
        ctx.client.resource_path("t1", Some("f.txt"))
    );

    let resp = anon.get_public_object("t1", "f.txt").send().await.unwrap();
    assert_eq!(resp.content, "Amazon S3 Test File".as_bytes());
    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.path, format!("/{ACCESS_KEY}-t1/f.txt"));
    assert!(!req.headers.contains_key("authorization"));
}

#[test]
fn namespaced_without_namespace_or_credentials_is_rejected() {
    let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    let err = Client::builder(base_url.clone())
        .addressing_style(AddressingStyle::Namespaced)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err}");

    let client = Client::builder(base_url)
        .addressing_style(AddressingStyle::Namespaced)
        .namespace(Some("team".into()))
        .build()
        .unwrap();
    assert_eq!(client.resource_path("t1", None), "team-t1");
}
