//! Database operations for transactions.
//!
//! Every query that touches the type, date or description columns is built
//! from a [TransactionColumns] layout. Column names only ever come from the
//! fixed set in [super::schema], values are always bound as parameters.

use rusqlite::{Connection, OptionalExtension, Row, params_from_iter, types::Value};

use crate::{
    Error,
    db::timestamp_now,
    transaction::{
        NewTransaction, Transaction, TransactionColumns, TransactionId, TransactionType,
        TransactionUpdate,
    },
};

/// Record a transaction dated now and return it with its generated ID.
///
/// The description is dropped if the table has no description column.
///
/// # Errors
/// Returns an [Error::SqlError] if the account does not exist.
pub fn create_transaction(
    transaction: &NewTransaction,
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction_date = timestamp_now()?;
    let description = columns
        .has_description
        .then(|| transaction.description.clone())
        .flatten();

    insert_transaction(
        None,
        transaction.account_id,
        transaction.transaction_type,
        transaction.amount,
        description.as_deref(),
        &transaction_date,
        columns,
        connection,
    )?;

    Ok(Transaction {
        transaction_id: connection.last_insert_rowid(),
        account_id: transaction.account_id,
        transaction_type: transaction.transaction_type.to_string(),
        amount: transaction.amount,
        description,
        transaction_date: Some(transaction_date),
    })
}

/// Retrieve a single transaction by ID.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if no transaction has `transaction_id`.
pub fn get_transaction(
    transaction_id: TransactionId,
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let query = format!("{} WHERE transaction_id = ?1", select_clause(columns));

    connection
        .prepare(&query)?
        .query_row([transaction_id], |row| map_row(row, columns))
        .optional()?
        .ok_or(Error::TransactionNotFound)
}

/// Retrieve every transaction, newest first.
pub fn get_all_transactions(
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let query = format!(
        "{} ORDER BY {} DESC, transaction_id DESC",
        select_clause(columns),
        columns.date_column.name()
    );

    connection
        .prepare(&query)?
        .query_map([], |row| map_row(row, columns))?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace the type and amount of a transaction, and its description if the
/// table has one.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if no transaction has `transaction_id`.
pub fn update_transaction(
    transaction_id: TransactionId,
    update: &TransactionUpdate,
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<(), Error> {
    let type_column = columns.type_column.name();
    let mut values = vec![
        columns.type_column.encode(update.transaction_type),
        Value::Real(update.amount),
    ];

    let query = if columns.has_description {
        values.push(optional_text(update.description.as_deref()));
        format!(
            "UPDATE transactions SET {type_column} = ?1, amount = ?2, description = ?3 \
            WHERE transaction_id = ?4"
        )
    } else {
        format!("UPDATE transactions SET {type_column} = ?1, amount = ?2 WHERE transaction_id = ?3")
    };
    values.push(Value::Integer(transaction_id));

    let rows_affected = connection.execute(&query, params_from_iter(values))?;

    if rows_affected == 0 {
        return Err(Error::TransactionNotFound);
    }

    Ok(())
}

/// Delete a transaction by ID, this works for any table layout.
pub fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM transactions WHERE transaction_id = ?1",
        [transaction_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::TransactionNotFound);
    }

    Ok(())
}

/// Create the table in the layout described by [TransactionColumns::default].
///
/// An existing table is left alone, whatever its layout.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            transaction_id INTEGER PRIMARY KEY,
            account_id INTEGER NOT NULL,
            transaction_type TEXT NOT NULL
                CHECK (transaction_type IN ('Deposit', 'Withdrawal', 'Transfer', 'Payment')),
            amount REAL NOT NULL,
            description TEXT,
            transaction_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(account_id) REFERENCES accounts(account_id)
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample transactions if they are missing.
///
/// The sample accounts must exist first.
pub fn seed_transactions(
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<(), Error> {
    let samples = [
        (1, 1, TransactionType::Deposit, 1000.0, "Initial deposit", "2025-01-02 09:00:00"),
        (2, 1, TransactionType::Withdrawal, 500.0, "ATM withdrawal", "2025-01-05 14:30:00"),
        (3, 2, TransactionType::Deposit, 2500.0, "Salary deposit", "2025-01-15 08:00:00"),
        (4, 3, TransactionType::Transfer, 1000.0, "Transfer to savings", "2025-01-20 17:45:00"),
    ];

    for (transaction_id, account_id, transaction_type, amount, description, date) in samples {
        let description = columns.has_description.then_some(description);

        insert_transaction(
            Some(transaction_id),
            account_id,
            transaction_type,
            amount,
            description,
            date,
            columns,
            connection,
        )?;
    }

    Ok(())
}

/// Insert one row. Rows with an explicit ID that already exists are skipped.
#[allow(clippy::too_many_arguments)]
fn insert_transaction(
    transaction_id: Option<TransactionId>,
    account_id: i64,
    transaction_type: TransactionType,
    amount: f64,
    description: Option<&str>,
    transaction_date: &str,
    columns: &TransactionColumns,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut column_names = Vec::with_capacity(6);
    let mut values = Vec::with_capacity(6);

    if let Some(transaction_id) = transaction_id {
        column_names.push("transaction_id");
        values.push(Value::Integer(transaction_id));
    }

    column_names.push("account_id");
    values.push(Value::Integer(account_id));
    column_names.push(columns.type_column.name());
    values.push(columns.type_column.encode(transaction_type));
    column_names.push("amount");
    values.push(Value::Real(amount));

    if columns.has_description {
        column_names.push("description");
        values.push(optional_text(description));
    }

    column_names.push(columns.date_column.name());
    values.push(Value::Text(transaction_date.to_owned()));

    let placeholders = (1..=values.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let insert = if transaction_id.is_some() {
        "INSERT OR IGNORE"
    } else {
        "INSERT"
    };
    let query = format!(
        "{insert} INTO transactions ({}) VALUES ({placeholders})",
        column_names.join(", ")
    );

    connection.execute(&query, params_from_iter(values))?;

    Ok(())
}

fn optional_text(text: Option<&str>) -> Value {
    text.map_or(Value::Null, |text| Value::Text(text.to_owned()))
}

fn select_clause(columns: &TransactionColumns) -> String {
    let description = if columns.has_description {
        "description"
    } else {
        "NULL"
    };

    format!(
        "SELECT transaction_id, account_id, {}, amount, {description}, {} FROM transactions",
        columns.type_column.name(),
        columns.date_column.name()
    )
}

fn map_row(row: &Row, columns: &TransactionColumns) -> Result<Transaction, rusqlite::Error> {
    let raw_type: Value = row.get(2)?;

    Ok(Transaction {
        transaction_id: row.get(0)?,
        account_id: row.get(1)?,
        transaction_type: columns.type_column.decode(raw_type),
        amount: row.get(3)?,
        description: row.get(4)?,
        transaction_date: row.get(5)?,
    })
}
