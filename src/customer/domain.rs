//! Core customer domain types.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// Database identifier for a customer.
pub type CustomerId = DatabaseId;

/// The youngest age accepted for a customer.
pub const MIN_AGE: i64 = 1;
/// The oldest age accepted for a customer.
pub const MAX_AGE: i64 = 120;

/// The gender recorded for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The label stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(format!("unknown gender \"{other}\"")),
        }
    }
}

impl ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: String| FromSqlError::Other(error.into()))
    }
}

/// A customer of the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
}

/// The request body for creating or replacing a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub age: i64,
    pub gender: Gender,
}

/// A customer that has passed validation and may be written to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i64,
    pub gender: Gender,
}

impl CustomerForm {
    /// Check the form and trim the customer's name.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyField] if the name is empty or whitespace and
    /// [Error::AgeOutOfRange] if the age is outside of [MIN_AGE]..=[MAX_AGE].
    pub fn validate(self) -> Result<NewCustomer, Error> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(Error::EmptyField("Name"));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(Error::AgeOutOfRange(self.age));
        }

        Ok(NewCustomer {
            name: name.to_owned(),
            age: self.age,
            gender: self.gender,
        })
    }
}
