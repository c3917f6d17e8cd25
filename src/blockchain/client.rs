// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Solana JSON-RPC client for the few node queries the actions need.

use std::str::FromStr;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use solana_sdk::hash::Hash;

use super::types::*;

/// Node queries used while building action transactions.
///
/// Handlers hold this as `Arc<dyn ChainRpc>` so tests can substitute a mock
/// node.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Minimum lamports for an account holding `data_len` bytes to be rent exempt.
    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, SolanaClientError>;

    /// Current minimum stake delegation, in lamports.
    async fn stake_minimum_delegation(&self) -> Result<u64, SolanaClientError>;

    /// Latest blockhash, used as the transaction's recent checkpoint.
    async fn latest_blockhash(&self) -> Result<Hash, SolanaClientError>;

    /// Node health check.
    async fn health(&self) -> Result<(), SolanaClientError>;
}

/// JSON-RPC 2.0 client over HTTP.
#[derive(Debug, Clone)]
pub struct SolanaRpcClient {
    rpc_url: url::Url,
    http: reqwest::Client,
}

impl SolanaRpcClient {
    /// Create a new client for the given endpoint.
    pub fn new(rpc_url: &str) -> Result<Self, SolanaClientError> {
        let rpc_url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| {
            SolanaClientError::InvalidRpcUrl(e.to_string())
        })?;

        Ok(Self {
            rpc_url,
            http: reqwest::Client::new(),
        })
    }

    /// The endpoint this client talks to.
    pub fn rpc_url(&self) -> &url::Url {
        &self.rpc_url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, SolanaClientError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(self.rpc_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SolanaClientError::Transport(e.to_string()))?;

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| SolanaClientError::InvalidResponse(format!("{method}: {e}")))?;

        if let Some(error) = body.error {
            return Err(SolanaClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result
            .ok_or_else(|| SolanaClientError::InvalidResponse(format!("{method}: missing result")))
    }
}

#[async_trait]
impl ChainRpc for SolanaRpcClient {
    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, SolanaClientError> {
        self.call("getMinimumBalanceForRentExemption", json!([data_len]))
            .await
    }

    async fn stake_minimum_delegation(&self) -> Result<u64, SolanaClientError> {
        let result: RpcContextValue<u64> =
            self.call("getStakeMinimumDelegation", json!([])).await?;
        Ok(result.value)
    }

    async fn latest_blockhash(&self) -> Result<Hash, SolanaClientError> {
        let result: RpcContextValue<LatestBlockhash> =
            self.call("getLatestBlockhash", json!([])).await?;
        Hash::from_str(&result.value.blockhash).map_err(|e| {
            SolanaClientError::InvalidResponse(format!("getLatestBlockhash: {e}"))
        })
    }

    async fn health(&self) -> Result<(), SolanaClientError> {
        let status: String = self.call("getHealth", json!([])).await?;
        if status == "ok" {
            Ok(())
        } else {
            Err(SolanaClientError::InvalidResponse(format!(
                "getHealth: unexpected status {status}"
            )))
        }
    }
}

/// Errors that can occur while talking to the RPC node.
#[derive(Debug, thiserror::Error)]
pub enum SolanaClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC transport error: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}
