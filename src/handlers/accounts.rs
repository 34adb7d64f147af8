//! Account HTTP handlers.
//!
//! This module implements the account endpoints:
//! - /account - Open an account (any method)
//! - /customers - Apply a transaction (any method)
//! - POST /customers/{customer_id}/account - Open an account for a customer
//! - POST /customers/{customer_id}/account/{account_id} - Apply a transaction to a customer's account
//!
//! Every handler makes exactly one call to the [`AccountService`] and maps
//! its outcome straight onto the response.
//!
//! [`AccountService`]: crate::services::AccountService

use crate::{
    error::AppError,
    extract::JsonBody,
    models::account::{NewAccountRequest, NewAccountResponse},
    models::transaction::{TransactionRequest, TransactionResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Open a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_type": "Saving",
///   "amount": 6000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"account_id": "..."}`
/// - **Error (400)**: Body is not a valid `NewAccountRequest`
/// - **Error (any)**: Status and message taken from the service error
pub async fn new_account(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewAccountRequest>,
) -> Result<(StatusCode, Json<NewAccountResponse>), AppError> {
    let response = state
        .account_service
        .new_account(request)
        .await
        .inspect_err(|e| tracing::warn!(code = e.code, "Account creation failed: {}", e.message))?;

    tracing::info!(account_id = %response.account_id, "Account created");

    Ok((StatusCode::CREATED, Json(response)))
}

/// Open a new account for the customer named in the path.
///
/// The path segment overrides any `customer_id` present in the body.
pub async fn new_customer_account(
    state: State<AppState>,
    Path(customer_id): Path<String>,
    JsonBody(mut request): JsonBody<NewAccountRequest>,
) -> Result<(StatusCode, Json<NewAccountResponse>), AppError> {
    request.customer_id = customer_id;

    new_account(state, JsonBody(request)).await
}

/// Apply a transaction to an account.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100,
///   "transaction_type": "withdrawal",
///   "transaction_date": "2025-12-21 16:00:00"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The recorded transaction
/// - **Error (400)**: Body is not a valid `TransactionRequest`
/// - **Error (any)**: Status and message taken from the service error
pub async fn make_transaction(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TransactionRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let response = state
        .account_service
        .make_transaction(request)
        .await
        .inspect_err(|e| tracing::warn!(code = e.code, "Transaction failed: {}", e.message))?;

    tracing::info!(
        transaction_id = %response.transaction_id,
        account_id = %response.account_id,
        "Transaction completed"
    );

    Ok(Json(response))
}

/// Apply a transaction to the customer's account named in the path.
pub async fn make_customer_transaction(
    state: State<AppState>,
    Path((customer_id, account_id)): Path<(String, String)>,
    JsonBody(mut request): JsonBody<TransactionRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    request.customer_id = customer_id;
    request.account_id = account_id;

    make_transaction(state, JsonBody(request)).await
}
