//! Database initialization for the application.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, admin, category, design};

/// The categories seeded on first start. Seeding is insert-if-absent, so
/// admins can freely rename the set by deleting and creating categories.
pub const STARTER_CATEGORIES: [&str; 4] = ["Logos", "Posters", "Branding", "Web"];

/// Create the application tables if they do not exist and enable foreign
/// key enforcement.
///
/// Table creation happens in a single exclusive transaction so a partially
/// initialized schema is never left behind.
///
/// # Errors
///
/// Returns an [Error::SqlError] if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction =
        Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    admin::create_admin_table(&transaction)?;
    category::create_category_table(&transaction)?;
    design::create_design_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        let count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                WHERE type = 'table' AND name IN ('admin', 'category', 'design');",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");
        initialize(&connection).expect("Could not re-initialize database");
    }

    #[test]
    fn enforces_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        let result = connection.execute(
            "INSERT INTO design (title, image_url, category_id, created_at)
            VALUES ('x', 'x.png', 42, '2026-01-01T00:00:00Z');",
            [],
        );

        assert!(result.is_err());
    }
}
