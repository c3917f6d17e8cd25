// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer action: sends native SOL from the signer to a recipient.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    Json,
};
use solana_sdk::pubkey::Pubkey;
use utoipa::IntoParams;

use super::{
    action_href, amount_links, icon_url,
    origin::RequestOrigin,
    params::{address_param, amount_param, signer_account, AmountRule, QueryParams},
    response::action_response,
};
use crate::{
    blockchain::{sol_to_lamports, transfer_action},
    error::{ActionError, ValidationError},
    models::{ActionGetResponse, ActionPostRequest, ActionPostResponse},
    state::AppState,
};

/// Recipient used when the request names none (a devnet wallet).
pub const DEFAULT_SOL_ADDRESS: Pubkey =
    solana_sdk::pubkey!("nick6zJc6HpW3kfBm4xS2dmbuVRyb5F3AnUvj5ymzR5");

/// SOL sent when the request names no amount.
pub const DEFAULT_SOL_AMOUNT: f64 = 1.0;

pub const TRANSFER_PATH: &str = "/actions/transfer-sol";

/// Query parameters of the transfer action.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransferQuery {
    /// Recipient address.
    pub to: Option<String>,
    /// Amount of SOL to send. Zero passes validation.
    pub amount: Option<String>,
}

struct TransferParams {
    to: Pubkey,
    amount: f64,
}

// Unlike stake, a zero amount passes here and is caught by the rent check.
fn validated_query(raw: Option<&str>) -> Result<TransferParams, ValidationError> {
    let params = QueryParams::parse(raw);
    Ok(TransferParams {
        to: address_param(&params, "to", DEFAULT_SOL_ADDRESS)?,
        amount: amount_param(&params, DEFAULT_SOL_AMOUNT, AmountRule::NonNegative)?,
    })
}

#[utoipa::path(
    get,
    path = "/actions/transfer-sol",
    params(TransferQuery),
    tag = "Actions",
    responses(
        (status = 200, body = ActionGetResponse),
        (status = 400, description = "Invalid query parameter")
    )
)]
pub async fn describe_transfer(
    RequestOrigin(origin): RequestOrigin,
    RawQuery(query): RawQuery,
) -> Result<Json<ActionGetResponse>, ActionError> {
    let TransferParams { to, .. } = validated_query(query.as_deref())?;

    let base_href = action_href(&origin, TRANSFER_PATH, &[("to", &to.to_string())])?;

    Ok(Json(
        ActionGetResponse::new(
            icon_url(&origin)?,
            "Transfer Native SOL",
            "Transfer SOL from one Wallet to another",
            "Transfer",
        )
        .with_actions(amount_links(
            &base_href,
            "Send",
            "Send SOL",
            "Enter the amount of SOL to send",
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/actions/transfer-sol",
    params(TransferQuery),
    request_body = ActionPostRequest,
    tag = "Actions",
    responses(
        (status = 200, body = ActionPostResponse),
        (status = 400, description = "Invalid input, recipient would not be rent exempt, or upstream failure")
    )
)]
pub async fn build_transfer(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let TransferParams { to, amount } = validated_query(query.as_deref())?;
    let account = signer_account(&body)?;

    let lamports = sol_to_lamports(amount);
    let minimum_balance = state.rpc.minimum_balance_for_rent_exemption(0).await?;
    if lamports < minimum_balance {
        return Err(ActionError::NotRentExempt { recipient: to });
    }

    let response = action_response(
        state.rpc.as_ref(),
        transfer_action(&account, &to, lamports),
        &account,
        format!("Send {amount} SOL to {to}"),
    )
    .await?;

    tracing::info!(action = "transfer", %account, recipient = %to, lamports, "built transaction");
    Ok(Json(response))
}
