//! API request and response types.

/// Account opening
pub mod account;
/// Withdrawals and deposits
pub mod transaction;
