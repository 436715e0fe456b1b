//! Code for creating the admin table and fetching admin accounts from the
//! database.
//!
//! Admin accounts are the only users of the application. There is no public
//! registration flow, accounts are created with the `create_admin` binary.

use std::fmt::Display;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{Error, PasswordHash};

/// A newtype wrapper for integer admin IDs.
///
/// This helps disambiguate admin IDs from the catalog's category and design
/// IDs, leading to better compile time errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct AdminId(i64);

impl AdminId {
    /// Create a new admin ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the admin ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for AdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An administrator account.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    /// The admin's ID in the application database.
    pub id: AdminId,
    /// The name the admin logs in with. Unique.
    pub username: String,
    /// The admin's password hash.
    pub password_hash: PasswordHash,
}

/// Create the admin table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_admin_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS admin (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Create and insert a new admin into the database.
///
/// # Errors
///
/// Returns an [Error::DuplicateUsername] if `username` is already taken, or
/// an [Error::SqlError] if another SQL related error occurred.
pub fn create_admin(
    username: &str,
    password_hash: PasswordHash,
    connection: &Connection,
) -> Result<Admin, Error> {
    connection.execute(
        "INSERT INTO admin (username, password_hash) VALUES (?1, ?2)",
        (username, password_hash.as_ref()),
    )?;

    let id = AdminId::new(connection.last_insert_rowid());

    Ok(Admin {
        id,
        username: username.to_owned(),
        password_hash,
    })
}

/// Get the admin with a username equal to `username`.
///
/// # Errors
///
/// This function will return an [Error::NotFound] if `username` does not
/// belong to an admin account, or an [Error::SqlError] if there was an error
/// trying to access the database.
pub fn get_admin_by_username(username: &str, connection: &Connection) -> Result<Admin, Error> {
    connection
        .prepare("SELECT id, username, password_hash FROM admin WHERE username = :username")?
        .query_row(&[(":username", username)], |row| {
            let raw_id = row.get(0)?;
            let username: String = row.get(1)?;
            let raw_password_hash: String = row.get(2)?;

            Ok(Admin {
                id: AdminId::new(raw_id),
                username,
                password_hash: PasswordHash::new_unchecked(&raw_password_hash),
            })
        })
        .map_err(|error| error.into())
}

/// Get the number of admin accounts in the database.
///
/// # Errors
///
/// Returns an [Error::SqlError] if an SQL related error occurred.
pub fn count_admins(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM admin;", [], |row| {
            row.get::<_, i64>(0).map(|count| count as usize)
        })
        .map_err(|error| error.into())
}

#[cfg(test)]
mod admin_tests {
    use rusqlite::Connection;

    use crate::{Error, PasswordHash};

    use super::{count_admins, create_admin, create_admin_table, get_admin_by_username};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_admin_table(&connection).expect("Could not create admin table");
        connection
    }

    #[test]
    fn create_admin_succeeds() {
        let connection = get_test_db_connection();
        let hash = PasswordHash::new_unchecked("notarealhash");

        let admin = create_admin("alice", hash.clone(), &connection)
            .expect("Could not create test admin");

        assert!(admin.id.as_i64() > 0);
        assert_eq!(admin.username, "alice");
        assert_eq!(admin.password_hash, hash);
    }

    #[test]
    fn create_admin_fails_on_duplicate_username() {
        let connection = get_test_db_connection();
        let hash = PasswordHash::new_unchecked("notarealhash");
        create_admin("alice", hash.clone(), &connection).expect("Could not create test admin");

        let result = create_admin("alice", hash, &connection);

        assert_eq!(result, Err(Error::DuplicateUsername));
        assert_eq!(count_admins(&connection), Ok(1));
    }

    #[test]
    fn get_admin_by_username_succeeds() {
        let connection = get_test_db_connection();
        let inserted =
            create_admin("alice", PasswordHash::new_unchecked("notarealhash"), &connection)
                .expect("Could not create test admin");

        let selected = get_admin_by_username("alice", &connection);

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_admin_by_unknown_username_returns_not_found() {
        let connection = get_test_db_connection();

        let selected = get_admin_by_username("nobody", &connection);

        assert_eq!(selected, Err(Error::NotFound));
    }
}
