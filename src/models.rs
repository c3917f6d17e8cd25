// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Wire types of the action discovery protocol. All types derive
//! `Serialize`, `Deserialize`, and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! ## Model Categories
//!
//! - **Discovery**: metadata and links returned for `GET`/`OPTIONS`
//! - **Build**: request and response bodies for `POST`
//! - **Domain rules**: the `actions.json` mapping file

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Discovery Models
// =============================================================================

/// Metadata describing an action.
///
/// Built fresh for every discovery request. Only the icon and link origins
/// depend on the request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionGetResponse {
    /// Always `"action"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Absolute URL of the action's icon.
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Label of the default button.
    pub label: String,
    /// Links offered instead of the default button, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

impl ActionGetResponse {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: "action".to_string(),
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            label: label.into(),
            links: None,
        }
    }

    pub fn with_actions(mut self, actions: Vec<LinkedAction>) -> Self {
        self.links = Some(ActionLinks { actions });
        self
    }
}

/// Container for the linked actions of a discovery response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// One invocable link.
///
/// A link with parameters is a form: its `href` contains `{name}`
/// placeholders the client substitutes before calling it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ActionParameter>,
}

impl LinkedAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ActionParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A user-supplied value referenced from a link's `href`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionParameter {
    /// Placeholder name, matching `{name}` in the href.
    pub name: String,
    /// Prompt shown to the user.
    pub label: String,
    pub required: bool,
}

// =============================================================================
// Build Models
// =============================================================================

/// Body of a build request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ActionPostRequest {
    /// Base58 address of the signing wallet.
    #[serde(default)]
    pub account: Option<String>,
}

/// Response to a build request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionPostResponse {
    /// Always `"transaction"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64 wire encoding of the transaction for the wallet to sign.
    pub transaction: String,
    /// Human-readable description of what the transaction does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Domain Rules
// =============================================================================

/// Contents of `actions.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

/// Maps website paths to action API paths.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}
