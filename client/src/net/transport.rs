//! `gloo-net` implementation of the gateway transport.
//!
//! Outside the browser (`csr` off) the transport reports every request as a
//! transport failure, so pages compile and render without issuing I/O.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use yoga::ApiError;
#[cfg(feature = "csr")]
use yoga::transport::Method;
use yoga::transport::{HttpRequest, HttpResponse};

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl yoga::transport::HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait::async_trait(?Send)]
impl yoga::transport::HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(unavailable(&request))
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable(request: &HttpRequest) -> ApiError {
    ApiError::Transport(format!("no browser transport for {} {}", request.method, request.url))
}
