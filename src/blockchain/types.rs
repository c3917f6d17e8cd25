// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use serde::Deserialize;
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};

/// Solana cluster configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Cluster moniker as accepted in `SOLANA_RPC`
    pub name: &'static str,
    /// Public RPC endpoint URL
    pub rpc_url: &'static str,
}

/// Solana devnet. Used when no RPC endpoint is configured.
pub const DEVNET: NetworkConfig = NetworkConfig {
    name: "devnet",
    rpc_url: "https://api.devnet.solana.com",
};

/// Solana testnet.
pub const TESTNET: NetworkConfig = NetworkConfig {
    name: "testnet",
    rpc_url: "https://api.testnet.solana.com",
};

/// Solana mainnet-beta.
pub const MAINNET_BETA: NetworkConfig = NetworkConfig {
    name: "mainnet-beta",
    rpc_url: "https://api.mainnet-beta.solana.com",
};

const CLUSTERS: [NetworkConfig; 3] = [DEVNET, TESTNET, MAINNET_BETA];

/// Resolve the configured RPC setting to an endpoint URL.
///
/// Accepts a cluster moniker or a URL. Unset or blank values fall back to
/// devnet.
pub fn resolve_rpc_url(raw: Option<&str>) -> String {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return DEVNET.rpc_url.to_string(),
    };

    CLUSTERS
        .iter()
        .find(|cluster| cluster.name.eq_ignore_ascii_case(value))
        .map(|cluster| cluster.rpc_url.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// SPL Memo program.
pub const MEMO_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

/// Priority fee attached to memo transactions, in micro-lamports per compute unit.
pub const MEMO_COMPUTE_UNIT_PRICE: u64 = 1_000;

/// Lamports moved into every newly created stake account.
pub const STAKE_ACCOUNT_FUNDING_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Convert a SOL amount to lamports.
///
/// Rounds to the nearest lamport. Values beyond `u64::MAX` lamports saturate.
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64).round() as u64
}

// =============================================================================
// JSON-RPC wire types
// =============================================================================

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC error member.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Result wrapper used by context-aware RPC methods.
#[derive(Debug, Deserialize)]
pub struct RpcContextValue<T> {
    pub value: T,
}

/// `getLatestBlockhash` value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    #[allow(dead_code)]
    pub last_valid_block_height: u64,
}
