// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction building for the memo, stake and transfer actions.
//!
//! Builders only assemble instructions. [`UnsignedAction::into_transaction`]
//! then sets the fee payer, stamps the recent blockhash and partially signs
//! with any server-generated keypairs. The end user's signature slot is left
//! empty for the wallet to fill.

use base64::Engine;
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    hash::Hash,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::Keypair,
    signer::{Signer, SignerError},
    stake::{
        instruction as stake_instruction,
        state::{Authorized, Lockup},
    },
    system_instruction,
    transaction::Transaction,
};

use super::types::{MEMO_COMPUTE_UNIT_PRICE, MEMO_PROGRAM_ID, STAKE_ACCOUNT_FUNDING_LAMPORTS};

/// Instructions for one action plus the keypairs that must co-sign them.
#[derive(Debug)]
pub struct UnsignedAction {
    instructions: Vec<Instruction>,
    signers: Vec<Keypair>,
}

impl UnsignedAction {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            signers: Vec::new(),
        }
    }

    /// Attach a server-generated keypair that must also sign.
    pub fn with_signer(mut self, signer: Keypair) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Auxiliary signers, in the order they were attached.
    pub fn signers(&self) -> &[Keypair] {
        &self.signers
    }

    /// Build the legacy transaction with `fee_payer` in the first signer slot
    /// and `recent_blockhash` as its checkpoint, then apply auxiliary
    /// signatures.
    pub fn into_transaction(
        self,
        fee_payer: &Pubkey,
        recent_blockhash: Hash,
    ) -> Result<Transaction, TxBuildError> {
        let message =
            Message::new_with_blockhash(&self.instructions, Some(fee_payer), &recent_blockhash);
        let mut transaction = Transaction::new_unsigned(message);

        if !self.signers.is_empty() {
            transaction.try_partial_sign(&self.signers, recent_blockhash)?;
        }

        Ok(transaction)
    }
}

/// Priority fee followed by a memo carrying `memo` as UTF-8.
pub fn memo_action(memo: &str) -> UnsignedAction {
    UnsignedAction::new(vec![
        ComputeBudgetInstruction::set_compute_unit_price(MEMO_COMPUTE_UNIT_PRICE),
        Instruction::new_with_bytes(MEMO_PROGRAM_ID, memo.as_bytes(), vec![]),
    ])
}

/// Create a fresh stake account owned by `account` and delegate it to `vote_account`.
///
/// The new stake account's keypair is generated here and attached as an
/// auxiliary signer; the same key is the stake account in the delegate
/// instruction.
pub fn stake_action(account: &Pubkey, vote_account: &Pubkey) -> UnsignedAction {
    let stake_keypair = Keypair::new();
    let stake_pubkey = stake_keypair.pubkey();

    let authorized = Authorized {
        staker: *account,
        withdrawer: *account,
    };

    let mut instructions = stake_instruction::create_account(
        account,
        &stake_pubkey,
        &authorized,
        &Lockup::default(),
        STAKE_ACCOUNT_FUNDING_LAMPORTS,
    );
    instructions.push(stake_instruction::delegate_stake(
        &stake_pubkey,
        account,
        vote_account,
    ));

    UnsignedAction::new(instructions).with_signer(stake_keypair)
}

/// Move `lamports` from `from` to `to`.
pub fn transfer_action(from: &Pubkey, to: &Pubkey, lamports: u64) -> UnsignedAction {
    UnsignedAction::new(vec![system_instruction::transfer(from, to, lamports)])
}

/// Encode a transaction in the wire format wallets expect (bincode, base64).
pub fn encode_transaction(transaction: &Transaction) -> Result<String, TxBuildError> {
    let bytes = bincode::serialize(transaction)
        .map_err(|e| TxBuildError::Encoding(e.to_string()))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Errors that can occur while finishing a transaction.
#[derive(Debug, thiserror::Error)]
pub enum TxBuildError {
    #[error("Failed to apply auxiliary signature: {0}")]
    Signing(#[from] SignerError),

    #[error("Failed to encode transaction: {0}")]
    Encoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{
        compute_budget, native_token::LAMPORTS_PER_SOL, signature::Signature, stake, system_program,
    };

    fn decode(encoded: &str) -> Transaction {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        bincode::deserialize(&bytes).unwrap()
    }

    #[test]
    fn memo_action_has_priority_fee_then_memo() {
        let action = memo_action("hello");
        let ixs = action.instructions();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, compute_budget::id());
        assert_eq!(ixs[1].program_id, MEMO_PROGRAM_ID);
        assert_eq!(ixs[1].data, b"hello");
        assert!(ixs[1].accounts.is_empty());
        assert!(action.signers().is_empty());
    }

    #[test]
    fn stake_action_creates_and_delegates_the_generated_account() {
        let account = Pubkey::new_unique();
        let vote = Pubkey::new_unique();
        let action = stake_action(&account, &vote);

        assert_eq!(action.signers().len(), 1);
        let stake_pubkey = action.signers()[0].pubkey();

        let ixs = action.instructions();
        // system create, stake initialize, stake delegate
        assert_eq!(ixs.len(), 3);
        assert_eq!(ixs[0].program_id, system_program::id());
        assert_eq!(ixs[1].program_id, stake::program::id());

        let delegate = ixs.last().unwrap();
        assert_eq!(delegate.program_id, stake::program::id());
        assert_eq!(delegate.accounts[0].pubkey, stake_pubkey);
        assert_eq!(delegate.accounts[1].pubkey, vote);
        assert!(delegate
            .accounts
            .iter()
            .any(|meta| meta.pubkey == account && meta.is_signer));
    }

    #[test]
    fn stake_action_generates_a_new_account_each_time() {
        let account = Pubkey::new_unique();
        let vote = Pubkey::new_unique();
        let first = stake_action(&account, &vote);
        let second = stake_action(&account, &vote);
        assert_ne!(first.signers()[0].pubkey(), second.signers()[0].pubkey());
    }

    #[test]
    fn transfer_action_moves_lamports() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let action = transfer_action(&from, &to, 2 * LAMPORTS_PER_SOL);

        let ixs = action.instructions();
        assert_eq!(ixs.len(), 1);
        assert_eq!(ixs[0].program_id, system_program::id());
        assert_eq!(ixs[0].accounts[0].pubkey, from);
        assert_eq!(ixs[0].accounts[1].pubkey, to);
    }

    #[test]
    fn into_transaction_sets_fee_payer_and_blockhash() {
        let payer = Pubkey::new_unique();
        let blockhash = Hash::new_unique();

        let tx = memo_action("hi").into_transaction(&payer, blockhash).unwrap();

        assert_eq!(tx.message.account_keys[0], payer);
        assert_eq!(tx.message.recent_blockhash, blockhash);
        assert_eq!(tx.signatures, vec![Signature::default()]);
    }

    #[test]
    fn into_transaction_partially_signs_with_auxiliary_signers() {
        let payer = Pubkey::new_unique();
        let blockhash = Hash::new_unique();
        let action = stake_action(&payer, &Pubkey::new_unique());
        let stake_pubkey = action.signers()[0].pubkey();

        let tx = action.into_transaction(&payer, blockhash).unwrap();

        assert_eq!(tx.message.account_keys[0], payer);
        assert_eq!(tx.signatures.len(), 2);
        assert_eq!(tx.signatures[0], Signature::default());

        let stake_index = tx
            .message
            .account_keys
            .iter()
            .position(|key| *key == stake_pubkey)
            .unwrap();
        let stake_signature = tx.signatures[stake_index];
        assert_ne!(stake_signature, Signature::default());
        assert!(stake_signature.verify(stake_pubkey.as_ref(), &tx.message_data()));
    }

    #[test]
    fn encoded_transaction_decodes_back() {
        let payer = Pubkey::new_unique();
        let blockhash = Hash::new_unique();
        let tx = transfer_action(&payer, &Pubkey::new_unique(), 5)
            .into_transaction(&payer, blockhash)
            .unwrap();

        let decoded = decode(&encode_transaction(&tx).unwrap());
        assert_eq!(decoded, tx);
    }
}
