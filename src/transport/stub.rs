//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::{FetchError, Result};

/// Replays queued outcomes in order and records every request it sees.
/// Once the queue is empty every call fails with a network error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse::new(status, body.as_bytes())))
    }

    pub fn respond_json(self, body: Value) -> Self {
        self.respond(200, &body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Err(FetchError::Network(message.to_string())))
    }

    fn push(self, outcome: Result<HttpResponse>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".to_string())))
    }
}
