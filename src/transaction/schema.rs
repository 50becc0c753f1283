//! Finds the columns of the `transactions` table that vary between databases.
//!
//! Databases set up by different tools name the type and date columns
//! differently, and some keep the type as an integer code. The layout is read
//! from `pragma_table_info` once at startup and handed to the handlers through
//! the app state.

use rusqlite::{Connection, types::Value};

use crate::{Error, error::SchemaError, transaction::TransactionType};

/// The column that holds the transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeColumn {
    /// `transaction_type`, the type label as text.
    TransactionType,
    /// `transaction_type_id`, the type as an integer code.
    TransactionTypeId,
    /// `type`, the type label as text.
    Type,
}

impl TypeColumn {
    /// Candidates in the order they are looked for.
    const PRIORITY: [TypeColumn; 3] = [
        TypeColumn::TransactionType,
        TypeColumn::TransactionTypeId,
        TypeColumn::Type,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TypeColumn::TransactionType => "transaction_type",
            TypeColumn::TransactionTypeId => "transaction_type_id",
            TypeColumn::Type => "type",
        }
    }

    /// The value to store in this column for `transaction_type`.
    pub fn encode(&self, transaction_type: TransactionType) -> Value {
        match self {
            TypeColumn::TransactionTypeId => Value::Integer(transaction_type.code()),
            TypeColumn::TransactionType | TypeColumn::Type => {
                Value::Text(transaction_type.as_str().to_owned())
            }
        }
    }

    /// Turn a stored value back into a type label.
    ///
    /// Known codes in the integer column become labels. Anything else, such
    /// as an unknown code, is passed through as its string form.
    pub fn decode(&self, value: Value) -> String {
        match (self, value) {
            (TypeColumn::TransactionTypeId, Value::Integer(code)) => {
                TransactionType::from_code(code)
                    .map(|transaction_type| transaction_type.as_str().to_owned())
                    .unwrap_or_else(|| code.to_string())
            }
            (_, Value::Integer(number)) => number.to_string(),
            (_, Value::Real(number)) => number.to_string(),
            (_, Value::Text(text)) => text,
            (_, Value::Blob(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
            (_, Value::Null) => String::new(),
        }
    }
}

/// The column that holds when the transaction happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateColumn {
    TransactionDate,
    CreatedAt,
}

impl DateColumn {
    const PRIORITY: [DateColumn; 2] = [DateColumn::TransactionDate, DateColumn::CreatedAt];

    pub fn name(&self) -> &'static str {
        match self {
            DateColumn::TransactionDate => "transaction_date",
            DateColumn::CreatedAt => "created_at",
        }
    }
}

/// The layout of the `transactions` table.
///
/// [Default] gives the layout created by [super::create_transaction_table].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionColumns {
    pub type_column: TypeColumn,
    pub date_column: DateColumn,
    /// Whether the table has a `description` column.
    pub has_description: bool,
}

impl Default for TransactionColumns {
    fn default() -> Self {
        Self {
            type_column: TypeColumn::TransactionType,
            date_column: DateColumn::TransactionDate,
            has_description: true,
        }
    }
}

impl TransactionColumns {
    /// Pick the type and date columns from the column names of a table.
    ///
    /// # Errors
    ///
    /// Returns [SchemaError::MissingTypeColumn] if none of the type columns
    /// exist and [SchemaError::MissingDateColumn] if none of the date columns
    /// exist. The type column is checked first.
    pub fn from_column_names<S: AsRef<str>>(column_names: &[S]) -> Result<Self, SchemaError> {
        let has_column = |name: &str| column_names.iter().any(|column| column.as_ref() == name);

        let type_column = TypeColumn::PRIORITY
            .into_iter()
            .find(|column| has_column(column.name()))
            .ok_or(SchemaError::MissingTypeColumn)?;
        let date_column = DateColumn::PRIORITY
            .into_iter()
            .find(|column| has_column(column.name()))
            .ok_or(SchemaError::MissingDateColumn)?;

        Ok(Self {
            type_column,
            date_column,
            has_description: has_column("description"),
        })
    }
}

/// Read the live columns of the `transactions` table and work out its layout.
///
/// A missing table has no columns and is reported as a missing type column.
///
/// # Errors
///
/// Returns [Error::Schema] if the layout is not supported, or [Error::SqlError]
/// if the table information could not be read.
pub fn resolve_transaction_columns(connection: &Connection) -> Result<TransactionColumns, Error> {
    let column_names = connection
        .prepare("SELECT name FROM pragma_table_info('transactions')")?
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let columns = TransactionColumns::from_column_names(&column_names)?;
    tracing::debug!("Resolved transactions table layout: {columns:?}");

    Ok(columns)
}

#[cfg(test)]
mod transaction_columns_tests {
    use rusqlite::{Connection, types::Value};

    use crate::{
        Error,
        error::SchemaError,
        transaction::{
            DateColumn, TransactionColumns, TransactionType, TypeColumn,
            resolve_transaction_columns,
        },
    };

    #[test]
    fn prefers_transaction_type_over_other_type_columns() {
        let columns = TransactionColumns::from_column_names(&[
            "type",
            "transaction_type_id",
            "transaction_type",
            "transaction_date",
        ])
        .unwrap();

        assert_eq!(columns.type_column, TypeColumn::TransactionType);
    }

    #[test]
    fn prefers_type_id_over_type() {
        let columns =
            TransactionColumns::from_column_names(&["type", "transaction_type_id", "created_at"])
                .unwrap();

        assert_eq!(columns.type_column, TypeColumn::TransactionTypeId);
        assert_eq!(columns.date_column, DateColumn::CreatedAt);
        assert!(!columns.has_description);
    }

    #[test]
    fn prefers_transaction_date_over_created_at() {
        let columns = TransactionColumns::from_column_names(&[
            "type",
            "created_at",
            "transaction_date",
            "description",
        ])
        .unwrap();

        assert_eq!(
            columns,
            TransactionColumns {
                type_column: TypeColumn::Type,
                date_column: DateColumn::TransactionDate,
                has_description: true,
            }
        );
    }

    #[test]
    fn missing_type_column_is_an_error() {
        let result = TransactionColumns::from_column_names(&["amount", "transaction_date"]);

        assert_eq!(result, Err(SchemaError::MissingTypeColumn));
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let result = TransactionColumns::from_column_names(&["amount", "transaction_type"]);

        assert_eq!(result, Err(SchemaError::MissingDateColumn));
    }

    #[test]
    fn encodes_codes_only_for_type_id_column() {
        assert_eq!(
            TypeColumn::TransactionTypeId.encode(TransactionType::Transfer),
            Value::Integer(3)
        );
        assert_eq!(
            TypeColumn::Type.encode(TransactionType::Transfer),
            Value::Text("Transfer".to_owned())
        );
    }

    #[test]
    fn decodes_known_codes_and_passes_through_unknown_ones() {
        let column = TypeColumn::TransactionTypeId;

        assert_eq!(column.decode(Value::Integer(2)), "Withdrawal");
        assert_eq!(column.decode(Value::Integer(9)), "9");
        assert_eq!(column.decode(Value::Text("Legacy".to_owned())), "Legacy");
    }

    #[test]
    fn text_columns_decode_values_as_is() {
        assert_eq!(TypeColumn::TransactionType.decode(Value::Integer(1)), "1");
        assert_eq!(
            TypeColumn::TransactionType.decode(Value::Text("Deposit".to_owned())),
            "Deposit"
        );
    }

    #[test]
    fn resolves_layout_of_live_table() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute(
                "CREATE TABLE transactions (
                    transaction_id INTEGER PRIMARY KEY,
                    account_id INTEGER NOT NULL,
                    transaction_type_id INTEGER NOT NULL,
                    amount REAL NOT NULL,
                    created_at TEXT
                )",
                (),
            )
            .unwrap();

        let columns = resolve_transaction_columns(&connection).unwrap();

        assert_eq!(
            columns,
            TransactionColumns {
                type_column: TypeColumn::TransactionTypeId,
                date_column: DateColumn::CreatedAt,
                has_description: false,
            }
        );
    }

    #[test]
    fn missing_table_reports_missing_type_column() {
        let connection = Connection::open_in_memory().unwrap();

        let result = resolve_transaction_columns(&connection);

        assert_eq!(result, Err(Error::Schema(SchemaError::MissingTypeColumn)));
    }
}
