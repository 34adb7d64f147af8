//! Business logic services.
//!
//! Handlers never talk to storage directly. They delegate to the services
//! declared here, which embedding applications implement.

pub mod account_service;

pub use account_service::AccountService;
#[cfg(test)]
pub use account_service::MockAccountService;
