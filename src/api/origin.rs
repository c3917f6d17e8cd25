// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the origin that discovery links point at.
//!
//! ```rust,ignore
//! async fn describe(RequestOrigin(origin): RequestOrigin) -> impl IntoResponse {
//!     let icon = origin.join("icon.jpg")?;
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts, HeaderMap, Uri},
};
use url::Url;

use crate::{error::ActionError, state::AppState};

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Base URL (`scheme://host[:port]/[prefix/]`) that discovery links hang off.
///
/// Taken from `PUBLIC_BASE_URL` when configured, keeping any path prefix.
/// Otherwise built from the proxy headers, the `Host` header or the request
/// URI authority, in that order. The scheme defaults to `http`. The path
/// always ends in `/`, so relative joins stay under the prefix.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub Url);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = ActionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(base) = &state.public_base_url {
            return Ok(RequestOrigin(base_url(base.clone())));
        }
        origin_from_request(&parts.headers, &parts.uri).map(RequestOrigin)
    }
}

/// Strip query and fragment and make the path end in `/`.
fn base_url(mut url: Url) -> Url {
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn origin_from_request(headers: &HeaderMap, uri: &Uri) -> Result<Url, ActionError> {
    let host = first_header_value(headers, FORWARDED_HOST)
        .or_else(|| first_header_value(headers, HOST.as_str()))
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .ok_or_else(|| ActionError::Internal("request has no Host header".to_string()))?;
    let scheme = first_header_value(headers, FORWARDED_PROTO)
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    Url::parse(&format!("{scheme}://{host}/"))
        .map_err(|e| ActionError::Internal(format!("cannot build origin from {host}: {e}")))
}
