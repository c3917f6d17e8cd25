// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared helpers for unit tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::Engine;
use solana_sdk::{hash::Hash, transaction::Transaction};
use tower::ServiceExt;

use crate::{
    api::router,
    blockchain::{ChainRpc, SolanaClientError},
    state::AppState,
};

/// In-memory stand-in for the RPC node.
pub struct MockRpc {
    pub rent_exempt_minimum: u64,
    pub minimum_delegation: u64,
    pub blockhash: Hash,
    /// When set, every call fails with a transport error carrying this text.
    pub fail_with: Option<&'static str>,
    pub calls: AtomicUsize,
}

impl Default for MockRpc {
    fn default() -> Self {
        Self {
            rent_exempt_minimum: 890_880,
            minimum_delegation: 1,
            blockhash: Hash::new_unique(),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockRpc {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), SolanaClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(reason) => Err(SolanaClientError::Transport(reason.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChainRpc for MockRpc {
    async fn minimum_balance_for_rent_exemption(
        &self,
        _data_len: usize,
    ) -> Result<u64, SolanaClientError> {
        self.record()?;
        Ok(self.rent_exempt_minimum)
    }

    async fn stake_minimum_delegation(&self) -> Result<u64, SolanaClientError> {
        self.record()?;
        Ok(self.minimum_delegation)
    }

    async fn latest_blockhash(&self) -> Result<Hash, SolanaClientError> {
        self.record()?;
        Ok(self.blockhash)
    }

    async fn health(&self) -> Result<(), SolanaClientError> {
        self.record()
    }
}

/// Router backed by `rpc`, deriving origins from the `Host` header.
pub fn test_app(rpc: Arc<MockRpc>) -> Router {
    router(AppState::new(rpc, None))
}

/// Response pieces collected by [`send`].
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }

    /// The `message` field of an error body.
    pub fn error_message(&self) -> String {
        self.json()["message"]
            .as_str()
            .expect("error body has a message")
            .to_string()
    }
}

/// Drive one request through `app`.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "localhost:8080");
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Decode the base64 wire transaction of a build response.
pub fn decode_transaction(encoded: &str) -> Transaction {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("transaction is base64");
    bincode::deserialize(&bytes).expect("transaction decodes")
}
