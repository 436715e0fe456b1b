//! Category deletion endpoint.
//!
//! Deleting a category unfiles its designs rather than deleting them, see
//! [Catalog::delete_category].

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, alert::Alert, catalog::Catalog, category::CategoryId};

/// The state needed for deleting a category.
#[derive(Clone)]
pub struct DeleteCategoryEndpointState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for DeleteCategoryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Handle category deletion. Returns a success alert or an error.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<DeleteCategoryEndpointState>,
) -> Response {
    match state.catalog.delete_category(category_id) {
        Ok(_) => Alert::success(
            "Category deleted",
            "Designs filed under it have been kept but are now uncategorised.",
        )
        .into_response(),
        Err(error) => {
            tracing::error!(
                "An error occurred while deleting category {category_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_category_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{
        catalog::Catalog,
        category::CategoryName,
        db::initialize,
        design::{DesignTitle, NewDesign},
        test_utils::{assert_valid_html, get_header, parse_html_fragment},
    };

    use super::{DeleteCategoryEndpointState, delete_category_endpoint};

    fn get_test_state() -> DeleteCategoryEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        DeleteCategoryEndpointState {
            catalog: Catalog::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn delete_category_endpoint_succeeds() {
        let state = get_test_state();
        let category = state
            .catalog
            .create_category(CategoryName::new_unchecked("Murals"))
            .expect("Could not create test category");

        let response = delete_category_endpoint(Path(category.id), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_category_unfiles_designs() {
        let state = get_test_state();
        let category = state
            .catalog
            .create_category(CategoryName::new_unchecked("Murals"))
            .expect("Could not create test category");
        let design = state
            .catalog
            .create_design(NewDesign {
                title: DesignTitle::new_unchecked("Station mural"),
                image_url: "/static/uploads/mural.png".to_owned(),
                category_id: Some(category.id),
            })
            .expect("Could not create test design");

        let response = delete_category_endpoint(Path(category.id), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let design = state.catalog.design(design.id).unwrap();
        assert_eq!(design.category_id, None);
    }

    #[tokio::test]
    async fn delete_missing_category_returns_error_html() {
        let state = get_test_state();

        let response = delete_category_endpoint(Path(999999), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            get_header(&response, "content-type"),
            "text/html; charset=utf-8"
        );

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
    }
}
