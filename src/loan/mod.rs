//! Loans taken out by customers.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_loan, create_loan_table, delete_loan, get_all_loans, get_loan, seed_loans, update_loan,
};
pub use domain::{Loan, LoanForm, LoanId, LoanStatus, NewLoanForm};
pub use endpoints::{
    LoanState, create_loan_endpoint, delete_loan_endpoint, get_loan_endpoint, get_loans_endpoint,
    update_loan_endpoint,
};
