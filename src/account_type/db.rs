//! Account type model and its database operations.

use rusqlite::{Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// Database identifier for an account type.
pub type AccountTypeId = DatabaseId;

/// A kind of account, e.g. 'Savings'.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountType {
    pub account_type_id: AccountTypeId,
    pub type_name: String,
}

/// The request body for creating or renaming an account type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTypeForm {
    pub type_name: String,
}

impl AccountTypeForm {
    /// The trimmed type name.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyField] if the name is empty or whitespace.
    pub fn validate(&self) -> Result<&str, Error> {
        let type_name = self.type_name.trim();

        if type_name.is_empty() {
            Err(Error::EmptyField("Type name"))
        } else {
            Ok(type_name)
        }
    }
}

/// Create an account type and return it with its generated ID.
pub fn create_account_type(type_name: &str, connection: &Connection) -> Result<AccountType, Error> {
    connection.execute(
        "INSERT INTO account_types (type_name) VALUES (?1)",
        (type_name,),
    )?;

    Ok(AccountType {
        account_type_id: connection.last_insert_rowid(),
        type_name: type_name.to_owned(),
    })
}

/// Retrieve a single account type by ID.
pub fn get_account_type(
    account_type_id: AccountTypeId,
    connection: &Connection,
) -> Result<AccountType, Error> {
    connection
        .prepare("SELECT account_type_id, type_name FROM account_types WHERE account_type_id = :id")?
        .query_row(&[(":id", &account_type_id)], map_row)
        .optional()?
        .ok_or(Error::AccountTypeNotFound)
}

/// Retrieve all account types ordered by ID.
pub fn get_all_account_types(connection: &Connection) -> Result<Vec<AccountType>, Error> {
    connection
        .prepare("SELECT account_type_id, type_name FROM account_types ORDER BY account_type_id")?
        .query_map([], map_row)?
        .map(|maybe_type| maybe_type.map_err(Error::from))
        .collect()
}

/// Rename an account type.
pub fn update_account_type(
    account_type_id: AccountTypeId,
    type_name: &str,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE account_types SET type_name = ?1 WHERE account_type_id = ?2",
        (type_name, account_type_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::AccountTypeNotFound);
    }

    Ok(())
}

/// Delete an account type by ID.
pub fn delete_account_type(
    account_type_id: AccountTypeId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM account_types WHERE account_type_id = ?1",
        [account_type_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::AccountTypeNotFound);
    }

    Ok(())
}

pub fn create_account_type_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account_types (
            account_type_id INTEGER PRIMARY KEY,
            type_name TEXT NOT NULL UNIQUE
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample account types if they are missing.
pub fn seed_account_types(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO account_types (account_type_id, type_name) VALUES
            (1, 'Savings'),
            (2, 'Checking'),
            (3, 'Business');",
    )
}

fn map_row(row: &Row) -> Result<AccountType, rusqlite::Error> {
    Ok(AccountType {
        account_type_id: row.get(0)?,
        type_name: row.get(1)?,
    })
}
