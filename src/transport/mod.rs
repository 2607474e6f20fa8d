//! Transport Module
//!
//! The one seam between the fetch layer and the network: send a request,
//! get back a status code and raw body bytes.

mod http;

#[cfg(test)]
pub(crate) mod stub;

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

pub use http::ReqwestTransport;

// == Method ==
/// HTTP methods used against the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

// == Request ==
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, only sent for `Post`
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }
}

// == Response ==
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// == Transport Trait ==
/// Performs a single HTTP exchange.
///
/// Implementations report only transport failures as errors (as
/// `FetchError::Network`). Any status code, including 4xx and 5xx, is a
/// successful exchange at this level.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        (**self).send(request)
    }
}
