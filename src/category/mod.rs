//! Categories group designs in the portfolio, e.g. 'Logos' or 'Posters'.

mod create;
pub(crate) mod db;
mod delete;
mod domain;
mod list;

pub use create::create_category_endpoint;
pub(crate) use db::{
    count_categories, create_category, create_category_table, get_all_categories, get_category,
    seed_categories,
};
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryId, CategoryName};
pub(crate) use domain::CategoryFormData;
pub use list::get_categories_page;
