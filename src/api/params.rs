// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request validation shared by the actions.
//!
//! Query strings follow URL search-param semantics: the first occurrence of a
//! key wins and a key with an empty value still counts as present. Defaults
//! apply only to absent keys.

use std::str::FromStr;

use serde_json::Value;
use solana_sdk::pubkey::Pubkey;

use crate::error::{ActionError, ValidationError};

/// Decoded query string of a request.
#[derive(Debug, Default, Clone)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self(pairs)
    }

    /// First value for `name`, if the key is present at all.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Lower bound an action puts on its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
}

impl AmountRule {
    fn admits(self, amount: f64) -> bool {
        match self {
            AmountRule::Positive => amount > 0.0,
            AmountRule::NonNegative => amount >= 0.0,
        }
    }
}

/// Parse an address-valued query parameter, falling back to `default` when absent.
pub fn address_param(
    params: &QueryParams,
    name: &'static str,
    default: Pubkey,
) -> Result<Pubkey, ValidationError> {
    match params.get(name) {
        None => Ok(default),
        Some(raw) => {
            Pubkey::from_str(raw).map_err(|_| ValidationError::invalid_parameter(name))
        }
    }
}

/// Parse the `amount` query parameter, falling back to `default` when absent.
///
/// The value must be a finite number accepted by `rule`.
pub fn amount_param(
    params: &QueryParams,
    default: f64,
    rule: AmountRule,
) -> Result<f64, ValidationError> {
    let amount = match params.get("amount") {
        None => default,
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::invalid_parameter("amount"))?,
    };

    if amount.is_finite() && rule.admits(amount) {
        Ok(amount)
    } else {
        Err(ValidationError::invalid_parameter("amount"))
    }
}

/// Parse the build request body and its `account` field.
///
/// The body follows [`ActionPostRequest`](crate::models::ActionPostRequest).
/// A body that is not JSON is a [`ActionError::MalformedBody`]; an `account`
/// that is missing, not a string or not an address is
/// [`ActionError::InvalidAccount`].
pub fn signer_account(body: &[u8]) -> Result<Pubkey, ActionError> {
    let request: Value =
        serde_json::from_slice(body).map_err(|e| ActionError::MalformedBody(e.to_string()))?;

    request
        .get("account")
        .and_then(Value::as_str)
        .and_then(|account| Pubkey::from_str(account).ok())
        .ok_or(ActionError::InvalidAccount)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_KEY: &str = "nick6zJc6HpW3kfBm4xS2dmbuVRyb5F3AnUvj5ymzR5";

    fn default_key() -> Pubkey {
        Pubkey::from_str(DEFAULT_KEY).unwrap()
    }

    #[test]
    fn query_params_first_occurrence_wins() {
        let params = QueryParams::parse(Some("amount=1&amount=2&to="));
        assert_eq!(params.get("amount"), Some("1"));
        assert_eq!(params.get("to"), Some(""));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn query_params_decode_percent_encoding() {
        let params = QueryParams::parse(Some("amount=%31.5"));
        assert_eq!(params.get("amount"), Some("1.5"));
    }

    #[test]
    fn address_defaults_only_when_absent() {
        let params = QueryParams::parse(None);
        assert_eq!(address_param(&params, "to", default_key()).unwrap(), default_key());
    }

    #[test]
    fn address_parses_when_present() {
        let key = Pubkey::new_unique();
        let params = QueryParams::parse(Some(&format!("to={key}")));
        assert_eq!(address_param(&params, "to", default_key()).unwrap(), key);
    }

    #[test]
    fn invalid_address_names_the_parameter() {
        for raw in ["to=abc", "to=", "to=0OIl", "to=nick6zJc6HpW3kfBm4xS2dmbuVRyb5F3AnUvj5ymzR5nick"] {
            let params = QueryParams::parse(Some(raw));
            let err = address_param(&params, "to", default_key()).unwrap_err();
            assert_eq!(err.parameter, "to");
            assert_eq!(err.message, "Invalid input query parameter: to");
        }
    }

    #[test]
    fn amount_defaults_when_absent() {
        let params = QueryParams::parse(Some("to=x"));
        assert_eq!(amount_param(&params, 1.0, AmountRule::Positive).unwrap(), 1.0);
    }

    #[test]
    fn amount_parses_decimals() {
        let params = QueryParams::parse(Some("amount=0.25"));
        assert_eq!(amount_param(&params, 1.0, AmountRule::Positive).unwrap(), 0.25);
    }

    #[test]
    fn amount_rejects_garbage_and_non_finite_values() {
        for raw in ["amount=abc", "amount=", "amount=NaN", "amount=inf", "amount=1e400"] {
            let params = QueryParams::parse(Some(raw));
            let err = amount_param(&params, 1.0, AmountRule::NonNegative).unwrap_err();
            assert_eq!(err.message, "Invalid input query parameter: amount", "{raw}");
        }
    }

    #[test]
    fn zero_amount_depends_on_rule() {
        let params = QueryParams::parse(Some("amount=0"));
        assert!(amount_param(&params, 1.0, AmountRule::Positive).is_err());
        assert_eq!(amount_param(&params, 1.0, AmountRule::NonNegative).unwrap(), 0.0);
    }

    #[test]
    fn negative_amount_is_rejected_by_both_rules() {
        let params = QueryParams::parse(Some("amount=-1"));
        assert!(amount_param(&params, 1.0, AmountRule::Positive).is_err());
        assert!(amount_param(&params, 1.0, AmountRule::NonNegative).is_err());
    }

    #[test]
    fn signer_account_parses_valid_body() {
        let key = Pubkey::new_unique();
        let body = format!(r#"{{"account":"{key}"}}"#);
        assert_eq!(signer_account(body.as_bytes()).unwrap(), key);
    }

    #[test]
    fn signer_account_rejects_bad_addresses() {
        for body in [r#"{"account":"nope"}"#, r#"{}"#, r#"{"account":null}"#, "[]"] {
            assert!(matches!(
                signer_account(body.as_bytes()),
                Err(ActionError::InvalidAccount)
            ));
        }
    }

    #[test]
    fn signer_account_rejects_non_string_account() {
        for body in [r#"{"account":42}"#, r#"{"account":["x"]}"#, r#"{"account":{}}"#] {
            assert!(
                matches!(signer_account(body.as_bytes()), Err(ActionError::InvalidAccount)),
                "{body}"
            );
        }
    }

    #[test]
    fn signer_account_rejects_non_json_body() {
        assert!(matches!(
            signer_account(b"account=abc"),
            Err(ActionError::MalformedBody(_))
        ));
    }
}
