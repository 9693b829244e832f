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

use rand::distr::{Alphanumeric, SampleString};
use std::path::PathBuf;

pub fn rand_bucket_name() -> String {
    format!(
        "s3lite-{}",
        Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
    )
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Returns a path in the system temp directory that does not exist yet
pub fn temp_file_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("s3lite-test-{}", uuid::Uuid::new_v4()))
        .join(name)
}
