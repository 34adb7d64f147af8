//! Banking account API - HTTP layer
//!
//! A REST front end for opening accounts and making transactions. Handlers
//! decode JSON bodies, delegate to an injected [`AccountService`], and map the
//! service's [`AppError`] codes directly onto HTTP statuses.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Business Logic**: supplied by the embedding application through
//!   the [`AccountService`] trait
//! - **Format**: JSON requests/responses
//!
//! # Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use banking_account_handler::{config::Config, server, services::AccountService};
//! # async fn run(service: Arc<dyn AccountService>) -> anyhow::Result<()> {
//! server::init_tracing();
//! let config = Config::from_env()?;
//! server::serve(config, service).await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod state;

pub use error::AppError;
pub use services::AccountService;
