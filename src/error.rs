// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::blockchain::{SolanaClientError, TxBuildError};

/// Message returned for failures whose detail must not reach the caller.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Error body in the shape action clients expect.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// A query parameter that is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub parameter: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn invalid_parameter(parameter: &'static str) -> Self {
        Self {
            parameter,
            message: format!("Invalid input query parameter: {parameter}"),
        }
    }
}

/// Everything that can stop an action request.
///
/// Every variant maps to a 400. Upstream and internal failures are logged in
/// full but answered with [`UNKNOWN_ERROR_MESSAGE`].
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid \"account\" provided")]
    InvalidAccount,

    #[error("Minimum stake value is: {minimum}")]
    BelowMinimumStake { minimum: u64 },

    #[error("account may not be rent exempt: {recipient}")]
    NotRentExempt { recipient: Pubkey },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Upstream(#[from] SolanaClientError),

    #[error(transparent)]
    Transaction(#[from] TxBuildError),

    #[error("{0}")]
    Internal(String),
}

impl ActionError {
    /// Message safe to return to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ActionError::Validation(_)
            | ActionError::InvalidAccount
            | ActionError::BelowMinimumStake { .. }
            | ActionError::NotRentExempt { .. } => self.to_string(),
            ActionError::MalformedBody(_)
            | ActionError::Upstream(_)
            | ActionError::Transaction(_)
            | ActionError::Internal(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        match &self {
            ActionError::Upstream(_) | ActionError::Transaction(_) | ActionError::Internal(_) => {
                tracing::error!(error = %self, "action request failed");
            }
            _ => tracing::warn!(error = %self, "action request rejected"),
        }
        ApiError::bad_request(self.public_message()).into_response()
    }
}
