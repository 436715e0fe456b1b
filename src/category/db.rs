//! Database operations for categories.
//!
//! These functions are the passive persistence layer. Deleting a category
//! must also clear the references held by designs, which spans two tables,
//! so that path lives in [crate::Catalog] rather than here.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
};

/// Create a category and return it with its generated ID.
///
/// # Errors
///
/// Returns an [Error::DuplicateCategoryName] if a category with the same
/// name already exists. The store is not modified in that case.
pub fn create_category(name: CategoryName, connection: &Connection) -> Result<Category, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO category (name, created_at) VALUES (?1, ?2);",
        (name.as_ref(), created_at),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name,
        created_at,
    })
}

/// Retrieve a single category by ID.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, name, created_at FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories in creation order.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name, created_at FROM category ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Delete a category row by ID.
///
/// This is the raw row delete. Callers outside the catalog service must use
/// [crate::Catalog::delete_category], which also clears the references held
/// by designs in the same transaction.
///
/// # Errors
///
/// Returns an [Error::NotFound] if the category doesn't exist.
pub fn delete_category(category_id: CategoryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Get the number of categories in the database.
pub fn count_categories(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM category;", [], |row| {
            row.get::<_, i64>(0).map(|count| count as usize)
        })
        .map_err(|error| error.into())
}

/// Insert each of `names` as a category if no category with that name
/// exists yet.
///
/// Seeding is insert-if-absent only: re-seeding after admin edits does not
/// restore the original creation order.
pub fn seed_categories(names: &[&str], connection: &Connection) -> Result<(), Error> {
    let mut statement = connection
        .prepare("INSERT OR IGNORE INTO category (name, created_at) VALUES (?1, ?2);")?;

    for name in names {
        statement.execute((name, OffsetDateTime::now_utc()))?;
    }

    Ok(())
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let created_at = row.get(2)?;

    Ok(Category {
        id,
        name: CategoryName::new_unchecked(&raw_name),
        created_at,
    })
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let name = CategoryName::new("");

        assert_eq!(name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let name = CategoryName::new("\n\t \r");

        assert_eq!(name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let name = CategoryName::new("  Logos ").unwrap();

        assert_eq!(name.as_ref(), "Logos");
    }
}
