//! Transaction domain types and request validation.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, account::AccountId, database_id::DatabaseId};

/// Database identifier for a transaction.
pub type TransactionId = DatabaseId;

/// The kinds of transaction the bank records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

impl TransactionType {
    /// Every transaction type, ordered by numeric code.
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
        TransactionType::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Transfer => "Transfer",
            TransactionType::Payment => "Payment",
        }
    }

    /// The code stored in tables that keep the type as an integer.
    pub fn code(&self) -> i64 {
        match self {
            TransactionType::Deposit => 1,
            TransactionType::Withdrawal => 2,
            TransactionType::Transfer => 3,
            TransactionType::Payment => 4,
        }
    }

    /// The inverse of [TransactionType::code], `None` for unknown codes.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|transaction_type| transaction_type.code() == code)
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    /// Parse one of the four labels, matching case exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|transaction_type| transaction_type.as_str() == s)
            .ok_or_else(|| Error::InvalidTransactionType(s.to_owned()))
    }
}

/// A transaction as read from the database.
///
/// `transaction_type` is a label rather than a [TransactionType] because rows
/// written by other tools may hold codes or labels the app does not know.
/// `description` is always `None` for tables without a description column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    pub transaction_type: String,
    pub amount: f64,
    pub description: Option<String>,
    pub transaction_date: Option<String>,
}

/// The request body for recording a transaction.
///
/// A missing type or amount is reported by [TransactionForm::validate] rather
/// than as a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionForm {
    pub account_id: AccountId,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// The request body for replacing a transaction's type, amount and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTransactionForm {
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A transaction that has passed validation and may be written to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: Option<String>,
}

/// A validated replacement for a transaction's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionUpdate {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: Option<String>,
}

/// The type is checked before the amount, so a request that gets both wrong
/// is reported as an invalid type.
fn validate_fields(transaction_type: &str, amount: f64) -> Result<TransactionType, Error> {
    let transaction_type = transaction_type.parse()?;

    if amount <= 0.0 {
        return Err(Error::NonPositiveAmount);
    }

    Ok(transaction_type)
}

impl TransactionForm {
    /// # Errors
    ///
    /// Returns [Error::InvalidTransactionType] if the type is not one of the
    /// four labels and [Error::NonPositiveAmount] if the amount is zero or less.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let transaction_type = validate_fields(&self.transaction_type, self.amount)?;

        Ok(NewTransaction {
            account_id: self.account_id,
            transaction_type,
            amount: self.amount,
            description: self.description,
        })
    }
}

impl UpdateTransactionForm {
    /// # Errors
    ///
    /// See [TransactionForm::validate].
    pub fn validate(self) -> Result<TransactionUpdate, Error> {
        let transaction_type = validate_fields(&self.transaction_type, self.amount)?;

        Ok(TransactionUpdate {
            transaction_type,
            amount: self.amount,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod transaction_type_tests {
    use crate::{Error, transaction::TransactionType};

    #[test]
    fn code_round_trips_for_every_type() {
        for transaction_type in TransactionType::ALL {
            assert_eq!(
                TransactionType::from_code(transaction_type.code()),
                Some(transaction_type)
            );
        }
    }

    #[test]
    fn codes_match_stored_values() {
        assert_eq!(TransactionType::Deposit.code(), 1);
        assert_eq!(TransactionType::Withdrawal.code(), 2);
        assert_eq!(TransactionType::Transfer.code(), 3);
        assert_eq!(TransactionType::Payment.code(), 4);
        assert_eq!(TransactionType::from_code(0), None);
        assert_eq!(TransactionType::from_code(5), None);
    }

    #[test]
    fn parses_labels_case_sensitively() {
        assert_eq!("Payment".parse::<TransactionType>(), Ok(TransactionType::Payment));
        assert_eq!(
            "payment".parse::<TransactionType>(),
            Err(Error::InvalidTransactionType("payment".to_owned()))
        );
    }
}
