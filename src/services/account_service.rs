//! Account service contract consumed by the HTTP handlers.

use crate::{
    error::AppError,
    models::account::{NewAccountRequest, NewAccountResponse},
    models::transaction::{TransactionRequest, TransactionResponse},
};
use async_trait::async_trait;

/// Business operations behind the account endpoints.
///
/// Implementations own validation and persistence. Any failure is reported
/// as an [`AppError`] whose code becomes the HTTP response status.
///
/// The handlers share one instance across all in-flight requests, so
/// implementations must tolerate concurrent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Opens an account and returns its generated identifier.
    async fn new_account(&self, request: NewAccountRequest)
    -> Result<NewAccountResponse, AppError>;

    /// Applies a withdrawal or deposit to an existing account.
    async fn make_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, AppError>;
}
