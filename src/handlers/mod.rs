//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Delegates to the account service
//! 3. Returns HTTP response (JSON, status code)

/// Account and transaction endpoints
pub mod accounts;
/// Liveness endpoint
pub mod health;
