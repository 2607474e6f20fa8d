//! reqwest-backed transport.

use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::Client;
use tracing::debug;

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::{FetchError, Result};

/// Production transport over a shared `reqwest::Client`.
///
/// Every request carries `Cache-Control: no-store`, so a logical cache miss
/// always reaches the network. No timeout is configured here.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        let mut builder = builder.header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(method = ?request.method, url = %request.url, status, "upstream exchange");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
