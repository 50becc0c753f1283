//! Bank customers, the people who hold accounts and loans.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_customer, create_customer_table, delete_customer, get_all_customers, get_customer,
    seed_customers, update_customer,
};
pub use domain::{Customer, CustomerForm, CustomerId, Gender, MAX_AGE, MIN_AGE, NewCustomer};
pub use endpoints::{
    CustomerState, create_customer_endpoint, delete_customer_endpoint, get_customer_endpoint,
    get_customers_endpoint, update_customer_endpoint,
};
