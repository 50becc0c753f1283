//! Account domain types.

use serde::{Deserialize, Serialize};

use crate::{account_type::AccountTypeId, customer::CustomerId, database_id::DatabaseId};

/// Database identifier for an account.
pub type AccountId = DatabaseId;

/// An account held by a customer.
///
/// Balances are expected to be non-negative but this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    pub account_type_id: AccountTypeId,
    pub balance: f64,
}

/// An account joined with the names of its customer and account type, used
/// for listing accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub customer_name: String,
    pub account_type: String,
    pub balance: f64,
}

/// The request body for opening an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountForm {
    pub customer_id: CustomerId,
    pub account_type_id: AccountTypeId,
    pub balance: f64,
}

/// The request body for replacing an account's type and balance.
///
/// The owning customer cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdateForm {
    pub account_type_id: AccountTypeId,
    pub balance: f64,
}
