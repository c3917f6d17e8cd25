// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Stake action: creates a new stake account and delegates it to a validator.

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
    blockchain::{sol_to_lamports, stake_action},
    error::{ActionError, ValidationError},
    models::{ActionGetResponse, ActionPostRequest, ActionPostResponse},
    state::AppState,
};

/// Vote account used when the request names no validator.
pub const DEFAULT_VALIDATOR_VOTE_PUBKEY: Pubkey =
    solana_sdk::pubkey!("5ZWgXcyqrrNpQHCme5SdC5hCeYb2o3fEJhF7Gok3bTVN");

/// SOL staked when the request names no amount.
pub const DEFAULT_STAKE_AMOUNT: f64 = 1.0;

pub const STAKE_PATH: &str = "/actions/stake";

/// Query parameters of the stake action.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StakeQuery {
    /// Vote account of the validator to delegate to.
    pub validator: Option<String>,
    /// Amount of SOL to stake. Must be greater than zero.
    pub amount: Option<String>,
}

struct StakeParams {
    validator: Pubkey,
    amount: f64,
}

fn validated_query(raw: Option<&str>) -> Result<StakeParams, ValidationError> {
    let params = QueryParams::parse(raw);
    Ok(StakeParams {
        validator: address_param(&params, "validator", DEFAULT_VALIDATOR_VOTE_PUBKEY)?,
        amount: amount_param(&params, DEFAULT_STAKE_AMOUNT, AmountRule::Positive)?,
    })
}

#[utoipa::path(
    get,
    path = "/actions/stake",
    params(StakeQuery),
    tag = "Actions",
    responses(
        (status = 200, body = ActionGetResponse),
        (status = 400, description = "Invalid query parameter")
    )
)]
pub async fn describe_stake(
    RequestOrigin(origin): RequestOrigin,
    RawQuery(query): RawQuery,
) -> Result<Json<ActionGetResponse>, ActionError> {
    let StakeParams { validator, .. } = validated_query(query.as_deref())?;

    let validator = validator.to_string();
    let base_href = action_href(&origin, STAKE_PATH, &[("validator", &validator)])?;

    Ok(Json(
        ActionGetResponse::new(
            icon_url(&origin)?,
            "Staking SOL",
            format!("Stake your SOL to the {validator} validator to secure Solana Network."),
            "Stake your SOL",
        )
        .with_actions(amount_links(
            &base_href,
            "Stake",
            "Stake SOL",
            "Enter the amount of SOL to Stake",
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/actions/stake",
    params(StakeQuery),
    request_body = ActionPostRequest,
    tag = "Actions",
    responses(
        (status = 200, body = ActionPostResponse),
        (status = 400, description = "Invalid input, amount below the minimum delegation, or upstream failure")
    )
)]
pub async fn build_stake(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let StakeParams { validator, amount } = validated_query(query.as_deref())?;
    let account = signer_account(&body)?;

    let minimum = state.rpc.stake_minimum_delegation().await?;
    if sol_to_lamports(amount) < minimum {
        return Err(ActionError::BelowMinimumStake { minimum });
    }

    let action = stake_action(&account, &validator);
    let response = action_response(
        state.rpc.as_ref(),
        action,
        &account,
        format!("Stake {amount} SOL to validator {validator}"),
    )
    .await?;

    tracing::info!(action = "stake", %account, %validator, amount, "built transaction");
    Ok(Json(response))
}
