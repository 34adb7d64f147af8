//! Runs the account API against an in-memory `AccountService`.
//!
//! ```sh
//! SERVER_PORT=8000 cargo run --example in_memory_server
//! curl -X POST localhost:8000/customers/2001/account \
//!      -d '{"account_type":"Saving","amount":6000}'
//! ```

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use banking_account_handler::{
    AccountService, AppError,
    config::Config,
    models::account::{NewAccountRequest, NewAccountResponse},
    models::transaction::{TransactionRequest, TransactionResponse},
    server,
};
use rust_decimal::Decimal;

/// Balances keyed by account id. Nothing survives a restart.
#[derive(Default)]
struct InMemoryAccounts {
    balances: Mutex<HashMap<String, Decimal>>,
    next_id: AtomicU64,
}

impl InMemoryAccounts {
    fn next_id(&self) -> String {
        (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

#[async_trait]
impl AccountService for InMemoryAccounts {
    async fn new_account(
        &self,
        request: NewAccountRequest,
    ) -> Result<NewAccountResponse, AppError> {
        let account_id = self.next_id();
        self.balances
            .lock()
            .map_err(|_| AppError::unexpected("Account store unavailable"))?
            .insert(account_id.clone(), request.amount);

        Ok(NewAccountResponse { account_id })
    }

    async fn make_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        let mut balances = self
            .balances
            .lock()
            .map_err(|_| AppError::unexpected("Account store unavailable"))?;
        let balance = balances
            .get_mut(&request.account_id)
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        match request.transaction_type.as_str() {
            "deposit" => *balance += request.amount,
            "withdrawal" if *balance >= request.amount => *balance -= request.amount,
            "withdrawal" => return Err(AppError::validation("Insufficient balance")),
            other => {
                return Err(AppError::validation(format!(
                    "Unknown transaction type: {}",
                    other
                )));
            }
        }

        Ok(TransactionResponse {
            transaction_id: self.next_id(),
            account_id: request.account_id,
            amount: request.amount,
            transaction_type: request.transaction_type,
            transaction_date: request.transaction_date,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    server::serve(config, Arc::new(InMemoryAccounts::default())).await
}
