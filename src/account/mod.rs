//! Customer accounts and their balances.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_account, create_account_table, delete_account, get_account, get_account_summaries,
    seed_accounts, update_account,
};
pub use domain::{Account, AccountForm, AccountId, AccountSummary, AccountUpdateForm};
pub use endpoints::{
    AccountState, create_account_endpoint, delete_account_endpoint, get_account_endpoint,
    get_accounts_endpoint, update_account_endpoint,
};
