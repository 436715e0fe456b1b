//! Designs are the portfolio items: an image with a title, an optional
//! category, and a featured flag.

mod create;
pub(crate) mod db;
mod delete;
mod domain;
mod featured;
mod list;

pub use create::create_design_endpoint;
pub(crate) use db::{
    DesignFilter, clear_category, count_designs, count_featured_designs, create_design,
    create_design_table, get_all_designs, get_design, get_designs_with_category, set_featured,
    toggle_featured,
};
pub use delete::delete_design_endpoint;
pub use domain::{Design, DesignId, DesignTitle, NewDesign};
pub(crate) use db::DesignWithCategory;
pub(crate) use domain::DesignFormData;
pub use featured::toggle_featured_endpoint;
pub use list::get_designs_page;
