// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Solana Actions server
//!
//! Serves action metadata to wallet clients and builds unsigned Solana
//! transactions (memo, native stake, SOL transfer) for the requesting
//! account to sign.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Solana JSON-RPC client and transaction builders
//! - `config` - Environment configuration

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
