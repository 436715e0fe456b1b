//! Category creation endpoint.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, endpoints,
    catalog::Catalog,
    category::{CategoryFormData, CategoryName},
};

/// The state needed for creating a category.
#[derive(Clone)]
pub struct CreateCategoryEndpointState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for CreateCategoryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Handle category creation form submission.
///
/// On success the client is redirected back to the categories page so the
/// new category shows up in the listing.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryEndpointState>,
    Form(new_category): Form<CategoryFormData>,
) -> Response {
    let name = match CategoryName::new(&new_category.name) {
        Ok(name) => name,
        Err(error) => return error.into_alert_response(),
    };

    match state.catalog.create_category(name) {
        Ok(_) => (
            HxRedirect(endpoints::CATEGORIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An error occurred while creating a category: {error}");
            error.into_alert_response()
        }
    }
}
