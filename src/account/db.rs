//! Database operations for accounts.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    account::{Account, AccountForm, AccountId, AccountSummary, AccountUpdateForm},
};

/// Open an account and return it with its generated ID.
///
/// # Errors
/// Returns an [Error::SqlError] if the customer or account type does not exist.
pub fn create_account(form: &AccountForm, connection: &Connection) -> Result<Account, Error> {
    connection.execute(
        "INSERT INTO accounts (customer_id, account_type_id, balance) VALUES (?1, ?2, ?3)",
        params![form.customer_id, form.account_type_id, form.balance],
    )?;

    Ok(Account {
        account_id: connection.last_insert_rowid(),
        customer_id: form.customer_id,
        account_type_id: form.account_type_id,
        balance: form.balance,
    })
}

/// Retrieve a single account by ID.
pub fn get_account(account_id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare(
            "SELECT account_id, customer_id, account_type_id, balance \
            FROM accounts WHERE account_id = :id",
        )?
        .query_row(&[(":id", &account_id)], map_row)
        .optional()?
        .ok_or(Error::AccountNotFound)
}

/// Retrieve every account with its customer's name and account type name.
pub fn get_account_summaries(connection: &Connection) -> Result<Vec<AccountSummary>, Error> {
    connection
        .prepare(
            "SELECT a.account_id, c.name, t.type_name, a.balance
            FROM accounts a
            INNER JOIN customers c ON a.customer_id = c.customer_id
            INNER JOIN account_types t ON a.account_type_id = t.account_type_id
            ORDER BY a.account_id",
        )?
        .query_map([], |row| {
            Ok(AccountSummary {
                id: row.get(0)?,
                customer_name: row.get(1)?,
                account_type: row.get(2)?,
                balance: row.get(3)?,
            })
        })?
        .map(|maybe_summary| maybe_summary.map_err(Error::from))
        .collect()
}

/// Replace an account's type and balance.
pub fn update_account(
    account_id: AccountId,
    form: &AccountUpdateForm,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE accounts SET account_type_id = ?1, balance = ?2 WHERE account_id = ?3",
        params![form.account_type_id, form.balance, account_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::AccountNotFound);
    }

    Ok(())
}

/// Delete an account by ID.
pub fn delete_account(account_id: AccountId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM accounts WHERE account_id = :id", &[(":id", &account_id)])?;

    if rows_affected == 0 {
        return Err(Error::AccountNotFound);
    }

    Ok(())
}

pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            account_id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            account_type_id INTEGER NOT NULL,
            balance REAL NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(customer_id) REFERENCES customers(customer_id),
            FOREIGN KEY(account_type_id) REFERENCES account_types(account_type_id)
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample accounts if they are missing.
///
/// The sample customers and account types must exist first.
pub fn seed_accounts(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO accounts (account_id, customer_id, account_type_id, balance) VALUES
            (1, 1, 1, 5000.00),
            (2, 1, 2, 2500.00),
            (3, 2, 1, 3000.00),
            (4, 3, 3, 15000.00);",
    )
}

fn map_row(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        account_id: row.get(0)?,
        customer_id: row.get(1)?,
        account_type_id: row.get(2)?,
        balance: row.get(3)?,
    })
}

#[cfg(test)]
mod account_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        account::{
            Account, AccountForm, AccountSummary, AccountUpdateForm, create_account,
            delete_account, get_account, get_account_summaries, update_account,
        },
        account_type::create_account_type,
        customer::{Gender, NewCustomer, create_customer},
        test_utils::get_test_connection,
    };

    struct Fixture {
        connection: Connection,
        customer_id: i64,
        savings_id: i64,
        checking_id: i64,
    }

    fn get_fixture() -> Fixture {
        let connection = get_test_connection();
        let customer = create_customer(
            &NewCustomer {
                name: "John Doe".to_owned(),
                age: 30,
                gender: Gender::Male,
            },
            &connection,
        )
        .expect("Could not create test customer");
        let savings = create_account_type("Savings", &connection).unwrap();
        let checking = create_account_type("Checking", &connection).unwrap();

        Fixture {
            connection,
            customer_id: customer.customer_id,
            savings_id: savings.account_type_id,
            checking_id: checking.account_type_id,
        }
    }

    fn must_create_account(fixture: &Fixture, balance: f64) -> Account {
        create_account(
            &AccountForm {
                customer_id: fixture.customer_id,
                account_type_id: fixture.savings_id,
                balance,
            },
            &fixture.connection,
        )
        .expect("Could not create test account")
    }

    #[test]
    fn create_then_get_returns_input_fields() {
        let fixture = get_fixture();

        let account = must_create_account(&fixture, 123.45);

        let got = get_account(account.account_id, &fixture.connection).unwrap();
        assert_eq!(got, account);
        assert_eq!(got.customer_id, fixture.customer_id);
        assert_eq!(got.account_type_id, fixture.savings_id);
        assert_eq!(got.balance, 123.45);
    }

    #[test]
    fn create_with_unknown_customer_fails() {
        let fixture = get_fixture();

        let result = create_account(
            &AccountForm {
                customer_id: fixture.customer_id + 100,
                account_type_id: fixture.savings_id,
                balance: 1.0,
            },
            &fixture.connection,
        );

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn summaries_join_customer_and_type_names() {
        let fixture = get_fixture();
        let account = must_create_account(&fixture, 50.0);

        let summaries = get_account_summaries(&fixture.connection).unwrap();

        assert_eq!(
            summaries,
            vec![AccountSummary {
                id: account.account_id,
                customer_name: "John Doe".to_owned(),
                account_type: "Savings".to_owned(),
                balance: 50.0,
            }]
        );
    }

    #[test]
    fn update_replaces_type_and_balance() {
        let fixture = get_fixture();
        let account = must_create_account(&fixture, 50.0);

        update_account(
            account.account_id,
            &AccountUpdateForm {
                account_type_id: fixture.checking_id,
                balance: 75.5,
            },
            &fixture.connection,
        )
        .unwrap();

        let got = get_account(account.account_id, &fixture.connection).unwrap();
        assert_eq!(got.account_type_id, fixture.checking_id);
        assert_eq!(got.balance, 75.5);
        assert_eq!(got.customer_id, fixture.customer_id);
    }

    #[test]
    fn missing_account_returns_not_found() {
        let fixture = get_fixture();
        let form = AccountUpdateForm {
            account_type_id: fixture.savings_id,
            balance: 1.0,
        };

        assert_eq!(
            get_account(999, &fixture.connection),
            Err(Error::AccountNotFound)
        );
        assert_eq!(
            update_account(999, &form, &fixture.connection),
            Err(Error::AccountNotFound)
        );
        assert_eq!(
            delete_account(999, &fixture.connection),
            Err(Error::AccountNotFound)
        );
    }

    #[test]
    fn delete_then_get_returns_not_found() {
        let fixture = get_fixture();
        let account = must_create_account(&fixture, 10.0);

        delete_account(account.account_id, &fixture.connection).unwrap();

        assert_eq!(
            get_account(account.account_id, &fixture.connection),
            Err(Error::AccountNotFound)
        );
    }
}
