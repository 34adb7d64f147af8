//! Transaction API request/response types.
//!
//! This module defines:
//! - `TransactionRequest`: Request body for a withdrawal or deposit
//! - `TransactionResponse`: Response body returned to clients
//! - `TIMESTAMP_LAYOUT`: chrono format of `transaction_date`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// chrono format string for transaction timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Request to apply a transaction to an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 100,
///   "transaction_type": "withdrawal",
///   "transaction_date": "2025-12-21 16:00:00"
/// }
/// ```
///
/// `account_id` and `customer_id` are filled from the path when routed under
/// `/customers/{customer_id}/account/{account_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(default)]
    pub account_id: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Transaction kind label, e.g. "withdrawal" or "deposit"
    pub transaction_type: String,

    /// Formatted with [`TIMESTAMP_LAYOUT`]
    pub transaction_date: String,

    #[serde(default)]
    pub customer_id: String,
}

/// Response returned for a completed transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_id": "234",
///   "account_id": "90720",
///   "amount": 100,
///   "transaction_type": "withdrawal",
///   "transaction_date": "2025-12-21 16:00:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: String,
    pub account_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub transaction_type: String,
    pub transaction_date: String,
}
