//! Database operations for designs.
//!
//! The featured flag is flipped with a single SQL statement
//! ([toggle_featured]) so the read-modify-write happens inside SQLite
//! rather than in application code. Combined with the app-wide connection
//! mutex this gives strict alternation under concurrent toggles.

use rusqlite::{Connection, Row, types::Value};
use time::OffsetDateTime;

use crate::{
    Error,
    category::CategoryId,
    design::{Design, DesignId, DesignTitle, NewDesign},
};

/// Filter options for listing designs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignFilter {
    /// Only return designs filed under this category.
    pub category_id: Option<CategoryId>,
    /// Only return featured designs.
    pub featured_only: bool,
}

/// A design joined with the name of its category, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignWithCategory {
    /// The design itself.
    pub design: Design,
    /// The name of the design's category, if it has one.
    pub category_name: Option<String>,
}

const DESIGN_COLUMNS: &str = "id, title, image_url, category_id, featured, created_at";

/// Create a design and return it with its generated ID.
///
/// New designs always start with `featured = false`.
///
/// # Errors
///
/// Returns an [Error::InvalidCategory] if `new_design.category_id` is set
/// but does not refer to an existing category (foreign key violation).
pub fn create_design(new_design: NewDesign, connection: &Connection) -> Result<Design, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection
        .execute(
            "INSERT INTO design (title, image_url, category_id, featured, created_at)
            VALUES (?1, ?2, ?3, 0, ?4);",
            (
                new_design.title.as_ref(),
                &new_design.image_url,
                new_design.category_id,
                created_at,
            ),
        )
        .map_err(|error| match Error::from(error) {
            Error::InvalidCategory(None) => Error::InvalidCategory(new_design.category_id),
            other => other,
        })?;

    Ok(Design {
        id: connection.last_insert_rowid(),
        title: new_design.title,
        image_url: new_design.image_url,
        category_id: new_design.category_id,
        featured: false,
        created_at,
    })
}

/// Retrieve a single design by ID.
pub fn get_design(design_id: DesignId, connection: &Connection) -> Result<Design, Error> {
    connection
        .prepare(&format!(
            "SELECT {DESIGN_COLUMNS} FROM design WHERE id = :id;"
        ))?
        .query_row(&[(":id", &design_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve designs in creation order, optionally filtered by category
/// and/or featured flag.
///
/// Re-listing is safe and reflects the current state of the store.
pub fn get_all_designs(
    filter: &DesignFilter,
    connection: &Connection,
) -> Result<Vec<Design>, Error> {
    let mut sql = format!("SELECT {DESIGN_COLUMNS} FROM design");
    let mut clauses = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(category_id) = filter.category_id {
        params.push(Value::Integer(category_id));
        clauses.push(format!("category_id = ?{}", params.len()));
    }

    if filter.featured_only {
        clauses.push("featured = 1".to_owned());
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(" ORDER BY id ASC;");

    connection
        .prepare(&sql)?
        .query_map(rusqlite::params_from_iter(params), map_row)?
        .map(|maybe_design| maybe_design.map_err(|error| error.into()))
        .collect()
}

/// Retrieve designs joined with their category names, featured designs
/// first, then newest first. This is the ordering the gallery and the admin
/// listing both display.
pub fn get_designs_with_category(
    category_id: Option<CategoryId>,
    connection: &Connection,
) -> Result<Vec<DesignWithCategory>, Error> {
    let base = "SELECT design.id, design.title, design.image_url, design.category_id,
            design.featured, design.created_at, category.name
        FROM design LEFT JOIN category ON design.category_id = category.id";
    let order = " ORDER BY design.featured DESC, design.id DESC;";

    let map = |row: &Row| -> Result<DesignWithCategory, rusqlite::Error> {
        Ok(DesignWithCategory {
            design: map_row(row)?,
            category_name: row.get(6)?,
        })
    };

    let mut statement;
    let rows = match category_id {
        Some(category_id) => {
            statement = connection.prepare(&format!(
                "{base} WHERE design.category_id = :category_id{order}"
            ))?;
            statement.query_map(&[(":category_id", &category_id)], map)?
        }
        None => {
            statement = connection.prepare(&format!("{base}{order}"))?;
            statement.query_map([], map)?
        }
    };

    rows.map(|maybe_design| maybe_design.map_err(|error| error.into()))
        .collect()
}

/// Set the featured flag to an explicit value and return the updated design.
///
/// # Errors
///
/// Returns an [Error::NotFound] if the design doesn't exist.
pub fn set_featured(
    design_id: DesignId,
    featured: bool,
    connection: &Connection,
) -> Result<Design, Error> {
    connection
        .prepare(&format!(
            "UPDATE design SET featured = ?2 WHERE id = ?1 RETURNING {DESIGN_COLUMNS};"
        ))?
        .query_row((design_id, featured), map_row)
        .map_err(|error| error.into())
}

/// Invert the featured flag and return the new value.
///
/// The negation happens inside a single UPDATE statement, so each completed
/// toggle observes and inverts the most recently committed value. Two
/// near-simultaneous toggles can never both read the same pre-toggle value.
///
/// # Errors
///
/// Returns an [Error::NotFound] if the design doesn't exist.
pub fn toggle_featured(design_id: DesignId, connection: &Connection) -> Result<bool, Error> {
    connection
        .prepare("UPDATE design SET featured = 1 - featured WHERE id = ?1 RETURNING featured;")?
        .query_row([design_id], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Clear the category reference on every design filed under `category_id`.
/// Returns the number of designs that were updated.
///
/// Used only by the category-delete cascade in [crate::Catalog].
pub fn clear_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<usize, Error> {
    connection
        .execute(
            "UPDATE design SET category_id = NULL WHERE category_id = ?1",
            [category_id],
        )
        .map_err(|error| error.into())
}

/// Delete a design by ID.
///
/// Designs have no dependents, so there is no cascade.
///
/// # Errors
///
/// Returns an [Error::NotFound] if the design doesn't exist.
pub fn delete_design(design_id: DesignId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM design WHERE id = ?1", [design_id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Get the number of designs in the database.
pub fn count_designs(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM design;", [], |row| {
            row.get::<_, i64>(0).map(|count| count as usize)
        })
        .map_err(|error| error.into())
}

/// Get the number of featured designs in the database.
pub fn count_featured_designs(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM design WHERE featured = 1;", [], |row| {
            row.get::<_, i64>(0).map(|count| count as usize)
        })
        .map_err(|error| error.into())
}

/// Initialize the design table.
///
/// The foreign key constraint backstops the category validation done in the
/// catalog service. It requires `PRAGMA foreign_keys = ON`, which
/// [crate::initialize_db] sets.
pub fn create_design_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS design (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            image_url TEXT NOT NULL,
            category_id INTEGER REFERENCES category(id),
            featured INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_design_category ON design(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Design, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_title: String = row.get(1)?;
    let image_url = row.get(2)?;
    let category_id = row.get(3)?;
    let featured = row.get(4)?;
    let created_at = row.get(5)?;

    Ok(Design {
        id,
        title: DesignTitle::new_unchecked(&raw_title),
        image_url,
        category_id,
        featured,
        created_at,
    })
}
