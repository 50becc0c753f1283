//! Database operations for loans.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    loan::{Loan, LoanForm, LoanId},
};

/// Create a loan and return it with its generated ID.
///
/// # Errors
/// Returns an [Error::SqlError] if the customer does not exist.
pub fn create_loan(form: &LoanForm, connection: &Connection) -> Result<Loan, Error> {
    connection.execute(
        "INSERT INTO loans (customer_id, amount, status) VALUES (?1, ?2, ?3)",
        params![form.customer_id, form.amount, form.status],
    )?;

    Ok(Loan {
        id: connection.last_insert_rowid(),
        customer_id: form.customer_id,
        amount: form.amount,
        status: form.status,
    })
}

/// Retrieve a single loan by ID.
pub fn get_loan(loan_id: LoanId, connection: &Connection) -> Result<Loan, Error> {
    connection
        .prepare("SELECT id, customer_id, amount, status FROM loans WHERE id = :id")?
        .query_row(&[(":id", &loan_id)], map_row)
        .optional()?
        .ok_or(Error::LoanNotFound)
}

pub fn get_all_loans(connection: &Connection) -> Result<Vec<Loan>, Error> {
    connection
        .prepare("SELECT id, customer_id, amount, status FROM loans ORDER BY id")?
        .query_map([], map_row)?
        .map(|maybe_loan| maybe_loan.map_err(Error::from))
        .collect()
}

/// Replace the customer, amount and status of a loan.
///
/// # Errors
/// Returns [Error::LoanNotFound] if no loan has `loan_id`.
pub fn update_loan(loan_id: LoanId, form: &LoanForm, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE loans SET customer_id = ?1, amount = ?2, status = ?3 WHERE id = ?4",
        params![form.customer_id, form.amount, form.status, loan_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::LoanNotFound);
    }

    Ok(())
}

pub fn delete_loan(loan_id: LoanId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM loans WHERE id = ?1", [loan_id])?;

    if rows_affected == 0 {
        return Err(Error::LoanNotFound);
    }

    Ok(())
}

pub fn create_loan_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS loans (
            id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'Pending'
                CHECK (status IN ('Pending', 'Approved', 'Rejected')),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(customer_id) REFERENCES customers(customer_id)
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample loans if they are missing.
///
/// The sample customers must exist first.
pub fn seed_loans(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO loans (id, customer_id, amount, status) VALUES
            (1, 1, 10000.00, 'Approved'),
            (2, 2, 5000.00, 'Pending'),
            (3, 3, 25000.00, 'Approved');",
    )
}

fn map_row(row: &Row) -> Result<Loan, rusqlite::Error> {
    Ok(Loan {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        amount: row.get(2)?,
        status: row.get(3)?,
    })
}
