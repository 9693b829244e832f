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

//! Generic request type and the traits shared by all request builders

use crate::s3::client::Client;
use crate::s3::error::Error;
use crate::s3::headers::{Headers, QueryParams};
use crate::s3::sink::ResponseSink;
use crate::s3::transport::RequestBody;
use async_trait::async_trait;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: Client,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: QueryParams,

    /// Operation specific headers; `Date`, ACL and `Authorization` are added on execution
    #[builder(default)]
    pub(crate) headers: Headers,

    #[builder(default)]
    pub(crate) body: RequestBody,

    /// Grant public read access to the created resource
    #[builder(default = false)]
    pub(crate) make_public: bool,

    /// Sign the request; anonymous requests go to the plain HTTP endpoint
    #[builder(default = true)]
    pub(crate) use_auth: bool,
}

impl S3Request {
    /// Execute the request, handing a successful response to `sink`. Only used in [`S3Api::send()`]
    pub async fn execute<S: ResponseSink>(&self, sink: S) -> Result<S::Output, Error> {
        self.client.execute(self, sink).await
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }
}

/// Converts a request builder into a concrete request and the sink that
/// consumes its successful response.
pub trait ToS3Request: Sized {
    type Sink: ResponseSink;

    /// Consumes this request builder; validation failures surface here,
    /// before any network activity.
    fn to_s3request(self) -> Result<(S3Request, Self::Sink), Error>;
}

/// Builds a typed response from the executed request and the sink output
pub trait FromS3Response<O>: Sized {
    fn from_s3response(s3req: S3Request, output: O) -> Result<Self, Error>;
}

/// Common interface of all request builders
#[async_trait]
pub trait S3Api: ToS3Request + Send {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response<<Self::Sink as ResponseSink>::Output>;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// The future completes after the whole exchange, including every retry,
    /// has finished.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let (req, sink) = self.to_s3request()?;
        let output = req.execute(sink).await?;
        Self::S3Response::from_s3response(req, output)
    }
}
