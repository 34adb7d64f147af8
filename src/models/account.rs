//! Account API request/response types.
//!
//! This module defines:
//! - `NewAccountRequest`: Request body for opening an account
//! - `NewAccountResponse`: Response body returned to clients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for opening a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_type": "Saving",
///   "amount": 6000
/// }
/// ```
///
/// `customer_id` may be omitted from the body; when the request is routed
/// under `/customers/{customer_id}/account` it is taken from the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccountRequest {
    /// Owning customer
    #[serde(default)]
    pub customer_id: String,

    /// Account kind label, e.g. "Saving" or "Checking"
    pub account_type: String,

    /// Opening deposit
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

/// Response body for a newly opened account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "95471"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccountResponse {
    pub account_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_id_is_optional() {
        let request: NewAccountRequest =
            serde_json::from_value(json!({ "account_type": "Saving", "amount": 100 })).unwrap();

        assert_eq!(request.customer_id, "");
        assert_eq!(request.account_type, "Saving");
        assert_eq!(request.amount, Decimal::from(100));
    }

    #[test]
    fn amount_accepts_fractional_numbers() {
        let request: NewAccountRequest =
            serde_json::from_value(json!({ "account_type": "Checking", "amount": 250.75 }))
                .unwrap();

        assert_eq!(request.amount, Decimal::new(25075, 2));
    }

    #[test]
    fn missing_account_type_is_rejected() {
        let result = serde_json::from_value::<NewAccountRequest>(json!({ "amount": 100 }));

        assert!(result.is_err());
    }
}
