//! Loan domain types.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::{customer::CustomerId, database_id::DatabaseId};

/// Database identifier for a loan.
pub type LoanId = DatabaseId;

/// Where a loan is in the approval process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LoanStatus::Pending),
            "Approved" => Ok(LoanStatus::Approved),
            "Rejected" => Ok(LoanStatus::Rejected),
            other => Err(format!("unknown loan status \"{other}\"")),
        }
    }
}

impl ToSql for LoanStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for LoanStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: String| FromSqlError::Other(error.into()))
    }
}

/// A loan owed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub customer_id: CustomerId,
    pub amount: f64,
    pub status: LoanStatus,
}

/// The request body for creating a loan.
///
/// New loans are [LoanStatus::Pending] unless told otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoanForm {
    pub customer_id: CustomerId,
    pub amount: f64,
    #[serde(default)]
    pub status: LoanStatus,
}

/// The request body for replacing a loan, every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanForm {
    pub customer_id: CustomerId,
    pub amount: f64,
    pub status: LoanStatus,
}

impl From<NewLoanForm> for LoanForm {
    fn from(form: NewLoanForm) -> Self {
        Self {
            customer_id: form.customer_id,
            amount: form.amount,
            status: form.status,
        }
    }
}

#[cfg(test)]
mod loan_form_tests {
    use crate::loan::{LoanForm, LoanStatus, NewLoanForm};

    #[test]
    fn new_loan_status_defaults_to_pending() {
        let form: NewLoanForm =
            serde_json::from_str(r#"{"customer_id": 1, "amount": 500.0}"#).unwrap();

        assert_eq!(form.status, LoanStatus::Pending);
    }

    #[test]
    fn new_loan_keeps_given_status() {
        let form: NewLoanForm =
            serde_json::from_str(r#"{"customer_id": 1, "amount": 500.0, "status": "Approved"}"#)
                .unwrap();

        assert_eq!(form.status, LoanStatus::Approved);
    }

    #[test]
    fn update_requires_status() {
        let result = serde_json::from_str::<LoanForm>(r#"{"customer_id": 1, "amount": 500.0}"#);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_status() {
        let result = serde_json::from_str::<NewLoanForm>(
            r#"{"customer_id": 1, "amount": 500.0, "status": "Forgiven"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn status_label_round_trips() {
        for status in [
            LoanStatus::Pending,
            LoanStatus::Approved,
            LoanStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<LoanStatus>(), Ok(status));
        }
    }
}
