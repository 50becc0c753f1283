//! Database operations for customers.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    customer::{Customer, CustomerId, NewCustomer},
};

/// Create a customer and return it with its generated ID.
pub fn create_customer(customer: &NewCustomer, connection: &Connection) -> Result<Customer, Error> {
    connection.execute(
        "INSERT INTO customers (name, age, gender) VALUES (?1, ?2, ?3)",
        params![customer.name, customer.age, customer.gender],
    )?;

    let customer_id = connection.last_insert_rowid();

    Ok(Customer {
        customer_id,
        name: customer.name.clone(),
        age: customer.age,
        gender: customer.gender,
    })
}

/// Retrieve a single customer by ID.
///
/// # Errors
/// Returns [Error::CustomerNotFound] if no customer has `customer_id`.
pub fn get_customer(customer_id: CustomerId, connection: &Connection) -> Result<Customer, Error> {
    connection
        .prepare("SELECT customer_id, name, age, gender FROM customers WHERE customer_id = :id")?
        .query_row(&[(":id", &customer_id)], map_row)
        .optional()?
        .ok_or(Error::CustomerNotFound)
}

/// Retrieve all customers ordered by ID.
pub fn get_all_customers(connection: &Connection) -> Result<Vec<Customer>, Error> {
    connection
        .prepare("SELECT customer_id, name, age, gender FROM customers ORDER BY customer_id")?
        .query_map([], map_row)?
        .map(|maybe_customer| maybe_customer.map_err(Error::from))
        .collect()
}

/// Replace every field of a customer.
///
/// # Errors
/// Returns [Error::CustomerNotFound] if no customer has `customer_id`.
pub fn update_customer(
    customer_id: CustomerId,
    customer: &NewCustomer,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE customers SET name = ?1, age = ?2, gender = ?3 WHERE customer_id = ?4",
        params![customer.name, customer.age, customer.gender, customer_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::CustomerNotFound);
    }

    Ok(())
}

/// Delete a customer by ID.
///
/// # Errors
/// Returns [Error::CustomerNotFound] if no customer has `customer_id`.
pub fn delete_customer(customer_id: CustomerId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM customers WHERE customer_id = ?1", [customer_id])?;

    if rows_affected == 0 {
        return Err(Error::CustomerNotFound);
    }

    Ok(())
}

pub fn create_customer_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS customers (
            customer_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL CHECK (age BETWEEN 1 AND 120),
            gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample customers if they are missing.
pub fn seed_customers(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO customers (customer_id, name, age, gender) VALUES
            (1, 'John Doe', 30, 'Male'),
            (2, 'Jane Smith', 25, 'Female'),
            (3, 'Bob Johnson', 45, 'Male');",
    )
}

fn map_row(row: &Row) -> Result<Customer, rusqlite::Error> {
    Ok(Customer {
        customer_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
    })
}

#[cfg(test)]
mod customer_query_tests {
    use std::collections::HashSet;

    use rusqlite::Connection;

    use crate::{
        Error,
        customer::{
            Gender, NewCustomer, create_customer, delete_customer, get_all_customers,
            get_customer, update_customer,
        },
        test_utils::get_test_connection,
    };

    fn ann() -> NewCustomer {
        NewCustomer {
            name: "Ann".to_owned(),
            age: 40,
            gender: Gender::Female,
        }
    }

    fn must_create(customer: &NewCustomer, connection: &Connection) -> crate::customer::Customer {
        create_customer(customer, connection).expect("Could not create test customer")
    }

    #[test]
    fn create_customer_succeeds() {
        let connection = get_test_connection();

        let customer = must_create(&ann(), &connection);

        assert!(customer.customer_id > 0);
        assert_eq!(customer.name, "Ann");
        assert_eq!(customer.age, 40);
        assert_eq!(customer.gender, Gender::Female);
    }

    #[test]
    fn get_customer_returns_created_customer() {
        let connection = get_test_connection();
        let inserted = must_create(&ann(), &connection);

        let selected = get_customer(inserted.customer_id, &connection);

        assert_eq!(selected, Ok(inserted));
    }

    #[test]
    fn get_customer_with_invalid_id_returns_not_found() {
        let connection = get_test_connection();
        let inserted = must_create(&ann(), &connection);

        let selected = get_customer(inserted.customer_id + 123, &connection);

        assert_eq!(selected, Err(Error::CustomerNotFound));
    }

    #[test]
    fn get_all_customers_returns_every_customer() {
        let connection = get_test_connection();
        let bob = NewCustomer {
            name: "Bob".to_owned(),
            age: 45,
            gender: Gender::Male,
        };
        let want = HashSet::from([
            must_create(&ann(), &connection).customer_id,
            must_create(&bob, &connection).customer_id,
        ]);

        let got = get_all_customers(&connection)
            .expect("Could not get customers")
            .into_iter()
            .map(|customer| customer.customer_id)
            .collect::<HashSet<_>>();

        assert_eq!(want, got);
    }

    #[test]
    fn update_customer_replaces_all_fields() {
        let connection = get_test_connection();
        let customer = must_create(&ann(), &connection);
        let replacement = NewCustomer {
            name: "Annie".to_owned(),
            age: 41,
            gender: Gender::Other,
        };

        update_customer(customer.customer_id, &replacement, &connection).unwrap();

        let updated = get_customer(customer.customer_id, &connection).unwrap();
        assert_eq!(updated.name, "Annie");
        assert_eq!(updated.age, 41);
        assert_eq!(updated.gender, Gender::Other);
    }

    #[test]
    fn update_customer_with_invalid_id_returns_not_found() {
        let connection = get_test_connection();

        let result = update_customer(999, &ann(), &connection);

        assert_eq!(result, Err(Error::CustomerNotFound));
    }

    #[test]
    fn delete_then_get_returns_not_found() {
        let connection = get_test_connection();
        let customer = must_create(&ann(), &connection);

        delete_customer(customer.customer_id, &connection).unwrap();

        assert_eq!(
            get_customer(customer.customer_id, &connection),
            Err(Error::CustomerNotFound)
        );
    }

    #[test]
    fn delete_customer_with_invalid_id_returns_not_found() {
        let connection = get_test_connection();

        assert_eq!(
            delete_customer(999, &connection),
            Err(Error::CustomerNotFound)
        );
    }
}
