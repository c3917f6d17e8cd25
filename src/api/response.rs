// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Response envelope for build requests.

use solana_sdk::pubkey::Pubkey;

use crate::{
    blockchain::{encode_transaction, ChainRpc, UnsignedAction},
    error::ActionError,
    models::ActionPostResponse,
};

/// Finish `action` for `account` and wrap it with `message`.
///
/// Sets `account` as fee payer, stamps the node's latest blockhash, applies
/// the action's auxiliary signatures and encodes the result.
pub async fn action_response(
    rpc: &dyn ChainRpc,
    action: UnsignedAction,
    account: &Pubkey,
    message: impl Into<String>,
) -> Result<ActionPostResponse, ActionError> {
    let blockhash = rpc.latest_blockhash().await?;
    let transaction = action.into_transaction(account, blockhash)?;

    Ok(ActionPostResponse {
        kind: "transaction".to_string(),
        transaction: encode_transaction(&transaction)?,
        message: Some(message.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blockchain::{memo_action, SolanaClientError},
        test_support::{decode_transaction, MockRpc},
    };

    #[tokio::test]
    async fn stamps_payer_and_blockhash() {
        let rpc = MockRpc::default();
        let account = Pubkey::new_unique();

        let response = action_response(&rpc, memo_action("m"), &account, "done")
            .await
            .unwrap();

        assert_eq!(response.kind, "transaction");
        assert_eq!(response.message.as_deref(), Some("done"));
        let tx = decode_transaction(&response.transaction);
        assert_eq!(tx.message.account_keys[0], account);
        assert_eq!(tx.message.recent_blockhash, rpc.blockhash);
    }

    #[tokio::test]
    async fn rpc_failure_is_upstream_error() {
        let rpc = MockRpc {
            fail_with: Some("node down"),
            ..MockRpc::default()
        };

        let err = action_response(&rpc, memo_action("m"), &Pubkey::new_unique(), "done")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ActionError::Upstream(SolanaClientError::Transport(_))
        ));
    }
}
