//! Production authentication handler backed by an upstream service.
//!
//! Relays the canonical request to the configured authentication service over
//! HTTP and converts the wire response back into the handler response shape.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::BoxError;
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use url::Url;

use crate::auth::handler::{AuthHandler, AuthRequest, AuthResponse};

/// Authentication handler that forwards to an upstream HTTP service.
///
/// Constructed once at startup and shared by every bridge invocation.
pub struct UpstreamAuthHandler {
    client: Client<HttpConnector, Body>,
    base_url: Url,
}

impl UpstreamAuthHandler {
    /// Create a handler relaying to the given upstream base URL.
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, base_url }
    }

    /// Rewrite the canonical URL so it targets the upstream authority while
    /// keeping the original path and query.
    fn upstream_target(&self, url: &Url) -> Url {
        let mut target = self.base_url.clone();
        target.set_path(url.path());
        target.set_query(url.query());
        target
    }
}

#[async_trait]
impl AuthHandler for UpstreamAuthHandler {
    async fn handle(&self, request: AuthRequest) -> Result<AuthResponse, BoxError> {
        let target = self.upstream_target(&request.url);

        let mut builder = Request::builder()
            .method(request.method.clone())
            .uri(target.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let body = match request.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };
        let outbound = builder.body(body)?;

        let response = self.client.request(outbound).await?;

        let status = response.status().as_u16();
        let mut headers = Vec::with_capacity(response.headers().len());
        for (name, value) in response.headers().iter() {
            if let Ok(text) = value.to_str() {
                headers.push((name.as_str().to_owned(), text.to_owned()));
            }
        }

        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            None
        } else {
            Some(String::from_utf8(bytes.to_vec())?)
        };

        Ok(AuthResponse {
            status,
            headers,
            body,
        })
    }
}
