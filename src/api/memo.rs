// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Memo action: writes a fixed memo on-chain.

use axum::{body::Bytes, extract::State, Json};

use super::{icon_url, origin::RequestOrigin, params::signer_account, response::action_response};
use crate::{
    blockchain::memo_action,
    error::ActionError,
    models::{ActionGetResponse, ActionPostRequest, ActionPostResponse},
    state::AppState,
};

/// UTF-8 payload of every memo this action writes.
pub const MEMO_MESSAGE: &str = "this is a simple memo message2";

pub const MEMO_PATH: &str = "/actions/memo";

#[utoipa::path(
    get,
    path = "/actions/memo",
    tag = "Actions",
    responses(
        (status = 200, body = ActionGetResponse),
        (status = 400, description = "Origin could not be determined")
    )
)]
pub async fn describe_memo(
    RequestOrigin(origin): RequestOrigin,
) -> Result<Json<ActionGetResponse>, ActionError> {
    Ok(Json(ActionGetResponse::new(
        icon_url(&origin)?,
        "Memo Demo",
        "This is a super simple action",
        "Send Memo",
    )))
}

#[utoipa::path(
    post,
    path = "/actions/memo",
    request_body = ActionPostRequest,
    tag = "Actions",
    responses(
        (status = 200, body = ActionPostResponse),
        (status = 400, description = "Invalid account or upstream failure")
    )
)]
pub async fn build_memo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let account = signer_account(&body)?;

    let response = action_response(
        state.rpc.as_ref(),
        memo_action(MEMO_MESSAGE),
        &account,
        "Post this memo on-chain",
    )
    .await?;

    tracing::info!(action = "memo", %account, "built transaction");
    Ok(Json(response))
}
