//! Deposits, withdrawals, transfers and payments against accounts.
//!
//! The `transactions` table exists in a few layouts in the wild, see
//! [TransactionColumns] for how the app finds its way around them.

mod db;
mod domain;
mod endpoints;
mod schema;

pub use db::{
    create_transaction, create_transaction_table, delete_transaction, get_all_transactions,
    get_transaction, seed_transactions, update_transaction,
};
pub use domain::{
    NewTransaction, Transaction, TransactionForm, TransactionId, TransactionType,
    TransactionUpdate, UpdateTransactionForm,
};
pub use endpoints::{
    TransactionState, create_transaction_endpoint, delete_transaction_endpoint,
    get_transaction_endpoint, get_transactions_endpoint, update_transaction_endpoint,
};
pub use schema::{DateColumn, TransactionColumns, TypeColumn, resolve_transaction_columns};
