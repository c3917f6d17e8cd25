// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::{header, HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use url::Url;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ActionError,
    models::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
        ActionRule, ActionsJson, LinkedAction,
    },
    state::AppState,
};

pub mod actions_json;
pub mod health;
pub mod memo;
pub mod origin;
pub mod params;
pub mod response;
pub mod stake;
pub mod transfer;

/// Path of the icon served alongside the actions, relative to the origin.
pub const ICON_PATH: &str = "/solana_devs.jpg";

/// Headers every action client expects on every response, preflight included.
const ACTIONS_CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,PUT,OPTIONS"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Authorization, Content-Encoding, Accept-Encoding",
    ),
];

fn with_action_headers(mut routes: Router) -> Router {
    for (name, value) in ACTIONS_CORS_HEADERS {
        routes = routes.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }
    routes
}

pub fn router(state: AppState) -> Router {
    // OPTIONS shares the GET handler so preflights get the metadata too.
    let action_routes = Router::new()
        .route(
            memo::MEMO_PATH,
            get(memo::describe_memo)
                .options(memo::describe_memo)
                .post(memo::build_memo),
        )
        .route(
            stake::STAKE_PATH,
            get(stake::describe_stake)
                .options(stake::describe_stake)
                .post(stake::build_stake),
        )
        .route(
            transfer::TRANSFER_PATH,
            get(transfer::describe_transfer)
                .options(transfer::describe_transfer)
                .post(transfer::build_transfer),
        )
        .route(
            "/actions.json",
            get(actions_json::actions_json).options(actions_json::actions_json),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(with_action_headers(action_routes))
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Absolute URL of the action icon under `origin`.
pub fn icon_url(origin: &Url) -> Result<String, ActionError> {
    origin
        .join(ICON_PATH.trim_start_matches('/'))
        .map(|url| url.to_string())
        .map_err(|e| ActionError::Internal(format!("cannot build icon url: {e}")))
}

/// Absolute URL of `path` under `origin` with `query` appended.
///
/// `path` is resolved relative to `origin`, so a path prefix on the origin
/// (from `PUBLIC_BASE_URL`) is kept.
pub fn action_href(origin: &Url, path: &str, query: &[(&str, &str)]) -> Result<String, ActionError> {
    let mut url = origin
        .join(path.trim_start_matches('/'))
        .map_err(|e| ActionError::Internal(format!("cannot build href for {path}: {e}")))?;
    url.query_pairs_mut().extend_pairs(query);
    Ok(url.to_string())
}

/// Preset 1, 5 and 10 SOL links plus a templated custom-amount link.
///
/// `base_href` must already carry a query string.
pub fn amount_links(
    base_href: &str,
    verb: &str,
    custom_label: &str,
    parameter_label: &str,
) -> Vec<LinkedAction> {
    let mut links: Vec<LinkedAction> = [1, 5, 10]
        .into_iter()
        .map(|sol| {
            LinkedAction::new(
                format!("{verb} {sol} SOL"),
                format!("{base_href}&amount={sol}"),
            )
        })
        .collect();

    links.push(
        LinkedAction::new(custom_label, format!("{base_href}&amount={{amount}}")).with_parameter(
            ActionParameter {
                name: "amount".to_string(),
                label: parameter_label.to_string(),
                required: true,
            },
        ),
    );
    links
}

#[derive(OpenApi)]
#[openapi(
    paths(
        memo::describe_memo,
        memo::build_memo,
        stake::describe_stake,
        stake::build_stake,
        transfer::describe_transfer,
        transfer::build_transfer,
        actions_json::actions_json,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            ActionGetResponse,
            ActionLinks,
            LinkedAction,
            ActionParameter,
            ActionPostRequest,
            ActionPostResponse,
            ActionsJson,
            ActionRule,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Actions", description = "Discovery and transaction building for action clients"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
