//! Bank domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// Database identifier for a bank.
pub type BankId = DatabaseId;

/// A bank branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,
    pub name: String,
    pub branch: String,
    pub location: String,
    pub phone_number: Option<String>,
}

/// The request body for creating or replacing a bank.
///
/// Every field defaults to empty so that missing fields are reported with a
/// validation message instead of a JSON parsing error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BankForm {
    pub name: String,
    pub branch: String,
    pub location: String,
    pub phone_number: Option<String>,
}

/// A bank that has passed validation and may be written to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBank {
    pub name: String,
    pub branch: String,
    pub location: String,
    pub phone_number: Option<String>,
}

impl BankForm {
    /// Trim the fields and check that name, branch and location are set.
    ///
    /// A blank phone number is stored as `NULL`.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingBankFields] if name, branch or location is empty.
    pub fn validate(self) -> Result<NewBank, Error> {
        let name = self.name.trim();
        let branch = self.branch.trim();
        let location = self.location.trim();

        if name.is_empty() || branch.is_empty() || location.is_empty() {
            return Err(Error::MissingBankFields);
        }

        let phone_number = self
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone_number| !phone_number.is_empty())
            .map(str::to_owned);

        Ok(NewBank {
            name: name.to_owned(),
            branch: branch.to_owned(),
            location: location.to_owned(),
            phone_number,
        })
    }
}
