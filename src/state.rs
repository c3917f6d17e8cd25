// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use url::Url;

use crate::blockchain::ChainRpc;

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub rpc: Arc<dyn ChainRpc>,
    /// Origin for icons and action links; `None` derives it from the request.
    pub public_base_url: Option<Url>,
}

impl AppState {
    pub fn new(rpc: Arc<dyn ChainRpc>, public_base_url: Option<Url>) -> Self {
        Self {
            rpc,
            public_base_url,
        }
    }
}
