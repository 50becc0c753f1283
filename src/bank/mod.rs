//! Bank branches.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_bank, create_bank_table, delete_bank, get_all_banks, get_bank, seed_banks, update_bank,
};
pub use domain::{Bank, BankForm, BankId, NewBank};
pub use endpoints::{
    BankState, create_bank_endpoint, delete_bank_endpoint, get_bank_endpoint, get_banks_endpoint,
    update_bank_endpoint,
};
