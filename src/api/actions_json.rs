// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::models::{ActionRule, ActionsJson};

/// Maps every path under `/actions/` onto itself.
#[utoipa::path(
    get,
    path = "/actions.json",
    tag = "Actions",
    responses(
        (status = 200, description = "Path rules for action clients", body = ActionsJson)
    )
)]
pub async fn actions_json() -> Json<ActionsJson> {
    Json(ActionsJson {
        rules: vec![ActionRule {
            path_pattern: "/actions/**".to_string(),
            api_path: "/actions/**".to_string(),
        }],
    })
}
