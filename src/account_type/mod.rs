//! Account types such as savings or checking accounts.

mod db;
mod endpoints;

pub use db::{
    AccountType, AccountTypeForm, AccountTypeId, create_account_type, create_account_type_table,
    delete_account_type, get_account_type, get_all_account_types, seed_account_types,
    update_account_type,
};
pub use endpoints::{
    AccountTypeState, create_account_type_endpoint, delete_account_type_endpoint,
    get_account_type_endpoint, get_account_types_endpoint, update_account_type_endpoint,
};
