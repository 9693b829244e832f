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

//! Argument builders for [Client](crate::s3::client::Client) APIs

mod create_bucket;
mod delete_bucket;
mod delete_object;
mod get_object;
mod get_presigned_object_url;
mod list_objects;
mod object_content;
mod put_object;

pub use create_bucket::*;
pub use delete_bucket::*;
pub use delete_object::*;
pub use get_object::*;
pub use get_presigned_object_url::*;
pub use list_objects::*;
pub use object_content::*;
pub use put_object::*;
