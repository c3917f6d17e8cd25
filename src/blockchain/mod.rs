// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Solana integration module.
//!
//! This module provides functionality for:
//! - Querying the RPC node (rent minimum, stake minimum, latest blockhash)
//! - Building memo, stake and transfer instructions
//! - Stamping, partially signing and encoding transactions for wallets

pub mod client;
pub mod transactions;
pub mod types;

pub use client::{ChainRpc, SolanaClientError, SolanaRpcClient};
pub use transactions::*;
pub use types::*;
