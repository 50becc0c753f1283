//! Database operations for banks.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    bank::{Bank, BankId, NewBank},
};

/// Create a bank and return it with its generated ID.
pub fn create_bank(bank: &NewBank, connection: &Connection) -> Result<Bank, Error> {
    connection.execute(
        "INSERT INTO banks (name, branch, location, phone_number) VALUES (?1, ?2, ?3, ?4)",
        params![bank.name, bank.branch, bank.location, bank.phone_number],
    )?;

    Ok(Bank {
        id: connection.last_insert_rowid(),
        name: bank.name.clone(),
        branch: bank.branch.clone(),
        location: bank.location.clone(),
        phone_number: bank.phone_number.clone(),
    })
}

/// Retrieve a single bank by ID.
pub fn get_bank(bank_id: BankId, connection: &Connection) -> Result<Bank, Error> {
    connection
        .prepare("SELECT id, name, branch, location, phone_number FROM banks WHERE id = :id")?
        .query_row(&[(":id", &bank_id)], map_row)
        .optional()?
        .ok_or(Error::BankNotFound)
}

/// Retrieve all banks ordered by ID.
pub fn get_all_banks(connection: &Connection) -> Result<Vec<Bank>, Error> {
    connection
        .prepare("SELECT id, name, branch, location, phone_number FROM banks ORDER BY id")?
        .query_map([], map_row)?
        .map(|maybe_bank| maybe_bank.map_err(Error::from))
        .collect()
}

/// Replace every field of a bank.
pub fn update_bank(bank_id: BankId, bank: &NewBank, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE banks SET name = ?1, branch = ?2, location = ?3, phone_number = ?4 WHERE id = ?5",
        params![bank.name, bank.branch, bank.location, bank.phone_number, bank_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::BankNotFound);
    }

    Ok(())
}

/// Delete a bank by ID.
pub fn delete_bank(bank_id: BankId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM banks WHERE id = ?1", [bank_id])?;

    if rows_affected == 0 {
        return Err(Error::BankNotFound);
    }

    Ok(())
}

pub fn create_bank_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS banks (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            branch TEXT NOT NULL,
            location TEXT NOT NULL,
            phone_number TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample banks if they are missing.
pub fn seed_banks(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO banks (id, name, branch, location, phone_number) VALUES
            (1, 'First National Bank', 'Main Branch', 'New York, NY', '212-555-0100'),
            (2, 'City Bank', 'Downtown Branch', 'Los Angeles, CA', '213-555-0200'),
            (3, 'Metro Bank', 'Central Branch', 'Chicago, IL', '312-555-0300');",
    )
}

fn map_row(row: &Row) -> Result<Bank, rusqlite::Error> {
    Ok(Bank {
        id: row.get(0)?,
        name: row.get(1)?,
        branch: row.get(2)?,
        location: row.get(3)?,
        phone_number: row.get(4)?,
    })
}
