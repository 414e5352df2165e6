//! Shared fixtures for async flow tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::state::context::AppContext;
use crate::storage::MemoryStore;

pub const TEST_BASE_URL: &str = "https://backend.test";

// =========================================================================
// MockTransport
// =========================================================================

/// Replays queued responses in order and records every request it sees.
/// An empty queue answers like an unreachable host.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, message: &str) {
        self.responses.lock().unwrap().push_back(Err(TransportError(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("connection refused".to_owned())))
    }
}

// =========================================================================
// Context builders
// =========================================================================

pub fn test_config() -> AppConfig {
    AppConfig::default().with_base_url(TEST_BASE_URL).unwrap()
}

/// Context wired to a fresh mock transport and in-memory store.
pub fn test_context() -> (AppContext, Arc<MockTransport>, Arc<MemoryStore>) {
    let transport = MockTransport::new();
    let store = Arc::new(MemoryStore::new());
    let ctx = AppContext::new(test_config(), transport.clone(), store.clone());
    (ctx, transport, store)
}

/// Same as [`test_context`] with a token already stored.
pub fn signed_in_context() -> (AppContext, Arc<MockTransport>, Arc<MemoryStore>) {
    let (ctx, transport, store) = test_context();
    ctx.session.record_auth("test-token", false).unwrap();
    (ctx, transport, store)
}

pub fn dashboard_json() -> serde_json::Value {
    serde_json::json!({
        "nickname": "nine",
        "position": "fw",
        "teamName": "FC Dynamo",
        "seasonGoals": 14,
        "seasonAssists": 6,
        "seasonMatches": 20,
        "nextMatch": {
            "opponentTeamName": "Rovers",
            "matchDate": "2026-10-24",
            "matchTime": "18:30",
            "location": "North Park"
        },
        "teamProgress": { "chemistryScore": 8.2, "recentResults": ["Win", "Win", "Draw", "Lose", "Win"] }
    })
}
