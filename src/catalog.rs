//! The catalog service: the single write path for categories and designs.
//!
//! [Catalog] is constructed once per process and handed to request handlers
//! through their endpoint state structs. It is the only component that
//! performs multi-table writes, and it guarantees the catalog's consistency
//! rules hold after every operation it completes:
//!
//! 1. Category names are unique; colliding creates are rejected.
//! 2. A design's category reference, when present, resolves to an existing
//!    category at the moment of write.
//! 3. Deleting a category clears the reference on every dependent design
//!    in the same transaction; designs are never deleted by the cascade.
//! 4. Toggling the featured flag strictly alternates relative to committed
//!    values, even under concurrent requests.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error,
    category::{self, Category, CategoryId, CategoryName},
    design::{self, Design, DesignFilter, DesignId, DesignWithCategory, NewDesign},
};

/// Counts of catalog contents, shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    /// Total number of designs.
    pub designs: usize,
    /// Total number of categories.
    pub categories: usize,
    /// Number of designs currently featured.
    pub featured: usize,
}

/// The invariant-preserving interface to the category and design stores.
#[derive(Debug, Clone)]
pub struct Catalog {
    db_connection: Arc<Mutex<Connection>>,
}

impl Catalog {
    /// Create a catalog service over a shared database connection.
    ///
    /// The connection must already be initialized with
    /// [crate::initialize_db].
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an [Error::DuplicateCategoryName] on a name collision; the
    /// store is left unchanged.
    pub fn create_category(&self, name: CategoryName) -> Result<Category, Error> {
        let connection = self.lock()?;
        category::create_category(name, &connection)
    }

    /// Look up a category by ID.
    pub fn category(&self, category_id: CategoryId) -> Result<Category, Error> {
        let connection = self.lock()?;
        category::get_category(category_id, &connection)
    }

    /// All categories in creation order.
    pub fn categories(&self) -> Result<Vec<Category>, Error> {
        let connection = self.lock()?;
        category::get_all_categories(&connection)
    }

    /// Delete a category, clearing the reference on every design that was
    /// filed under it.
    ///
    /// Both steps run in one SQLite transaction, so a concurrent reader can
    /// never observe a design pointing at a deleted category, and a failure
    /// mid-way leaves both tables untouched (the delete can simply be
    /// re-issued).
    ///
    /// # Errors
    ///
    /// Returns an [Error::NotFound] if the category doesn't exist.
    pub fn delete_category(&self, category_id: CategoryId) -> Result<(), Error> {
        let connection = self.lock()?;
        let transaction =
            Transaction::new_unchecked(&connection, TransactionBehavior::Immediate)?;

        category::get_category(category_id, &transaction)?;
        let cleared = design::clear_category(category_id, &transaction)?;
        category::db::delete_category(category_id, &transaction)?;

        transaction.commit()?;

        tracing::debug!("deleted category {category_id}, cleared {cleared} design reference(s)");

        Ok(())
    }

    /// Create a design, validating its category reference.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidCategory] if a category ID is supplied but
    /// does not resolve.
    pub fn create_design(&self, new_design: NewDesign) -> Result<Design, Error> {
        let connection = self.lock()?;

        if let Some(category_id) = new_design.category_id {
            category::get_category(category_id, &connection)
                .map_err(|error| match error {
                    Error::NotFound => Error::InvalidCategory(Some(category_id)),
                    other => other,
                })?;
        }

        design::create_design(new_design, &connection)
    }

    /// Look up a design by ID.
    pub fn design(&self, design_id: DesignId) -> Result<Design, Error> {
        let connection = self.lock()?;
        design::get_design(design_id, &connection)
    }

    /// Designs in creation order, optionally filtered.
    pub fn designs(&self, filter: &DesignFilter) -> Result<Vec<Design>, Error> {
        let connection = self.lock()?;
        design::get_all_designs(filter, &connection)
    }

    /// Designs joined with category names in display order: featured first,
    /// then newest. Consumed by the public gallery and the admin listing.
    pub fn designs_for_gallery(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<DesignWithCategory>, Error> {
        let connection = self.lock()?;
        design::get_designs_with_category(category_id, &connection)
    }

    /// Invert a design's featured flag and return the new value.
    ///
    /// Each completed toggle observes and inverts the most recently
    /// committed value: the connection mutex serializes callers and the
    /// store flips the flag in a single UPDATE statement, so N completed
    /// toggles always land on the initial value XOR (N mod 2).
    ///
    /// # Errors
    ///
    /// Returns an [Error::NotFound] if the design doesn't exist.
    pub fn toggle_featured(&self, design_id: DesignId) -> Result<bool, Error> {
        let connection = self.lock()?;
        design::toggle_featured(design_id, &connection)
    }

    /// Set a design's featured flag to an explicit value and return the
    /// updated design.
    pub fn set_featured(&self, design_id: DesignId, featured: bool) -> Result<Design, Error> {
        let connection = self.lock()?;
        design::set_featured(design_id, featured, &connection)
    }

    /// Delete a design. Designs have no dependents, so there is no cascade.
    pub fn delete_design(&self, design_id: DesignId) -> Result<(), Error> {
        let connection = self.lock()?;
        design::db::delete_design(design_id, &connection)
    }

    /// Content counts for the admin dashboard.
    pub fn counts(&self) -> Result<CatalogCounts, Error> {
        let connection = self.lock()?;

        Ok(CatalogCounts {
            designs: design::count_designs(&connection)?,
            categories: category::count_categories(&connection)?,
            featured: design::count_featured_designs(&connection)?,
        })
    }

    /// Insert each of `names` as a category if absent. Safe to call on
    /// every startup.
    pub fn seed_categories(&self, names: &[&str]) -> Result<(), Error> {
        let connection = self.lock()?;
        category::seed_categories(names, &connection)
    }
}
