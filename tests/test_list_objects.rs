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

use s3lite::s3::response::ListBucketResponse;
use s3lite::s3::types::S3Api;
use s3lite_common::test_context::TestContext;

async fn put_objects(ctx: &TestContext, bucket_name: &str, names: &[&str]) {
    for name in names {
        ctx.client
            .put_object(bucket_name, *name, format!("content of {name}"))
            .send()
            .await
            .unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    put_objects(&ctx, &bucket_name, &["a.txt", "b.txt", "photos/1.jpg"]).await;

    let resp: ListBucketResponse = ctx.client.list_objects(&bucket_name).send().await.unwrap();
    assert_eq!(resp.name, bucket_name);
    assert!(!resp.is_truncated);
    let keys: Vec<&str> = resp.contents.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["a.txt", "b.txt", "photos/1.jpg"]);

    let entry = &resp.contents[0];
    assert_eq!(entry.size, "content of a.txt".len() as u64);
    assert_eq!(
        entry.etag.as_deref(),
        Some(format!("{:x}", md5::compute("content of a.txt")).as_str())
    );
    assert!(entry.last_modified.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_with_prefix() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    put_objects(&ctx, &bucket_name, &["a.txt", "photos/1.jpg", "photos/2.jpg"]).await;

    let resp = ctx
        .client
        .list_objects(&bucket_name)
        .prefix(Some("photos/".into()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.prefix.as_deref(), Some("photos/"));
    let keys: Vec<&str> = resp.contents.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["photos/1.jpg", "photos/2.jpg"]);

    // query parameters are sent on the wire
    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query.as_deref(), Some("prefix=photos%2F"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_pages_with_marker() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    put_objects(&ctx, &bucket_name, &["1", "2", "3", "4", "5"]).await;

    let mut keys = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = 0;
    loop {
        let resp = ctx
            .client
            .list_objects(&bucket_name)
            .marker(marker.take())
            .max_keys(Some(2))
            .send()
            .await
            .unwrap();
        pages += 1;
        assert_eq!(resp.max_keys, Some(2));
        keys.extend(resp.contents.iter().map(|e| e.key.clone()));
        match resp.next_marker() {
            Some(v) => marker = Some(v.to_string()),
            None => break,
        }
    }
    assert_eq!(pages, 3);
    assert_eq!(keys, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn purge_removes_all_objects() {
    let ctx = TestContext::new().await;
    let bucket_name = ctx.create_bucket_helper().await;
    put_objects(&ctx, &bucket_name, &["a", "b", "c"]).await;

    let resp = ctx
        .client
        .delete_and_purge_bucket(&bucket_name)
        .await
        .unwrap();
    assert!(resp.is_some());
    assert!(!ctx.server.has_bucket(&bucket_name));

    // purging a missing bucket is not an error
    let resp = ctx
        .client
        .delete_and_purge_bucket(&bucket_name)
        .await
        .unwrap();
    assert!(resp.is_none());
}
