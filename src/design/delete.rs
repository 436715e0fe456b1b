//! Design deletion endpoint.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, alert::Alert, catalog::Catalog, design::DesignId};

/// The state needed for deleting a design.
#[derive(Clone)]
pub struct DeleteDesignEndpointState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for DeleteDesignEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Handle design deletion. Returns a success alert or an error.
pub async fn delete_design_endpoint(
    Path(design_id): Path<DesignId>,
    State(state): State<DeleteDesignEndpointState>,
) -> Response {
    match state.catalog.delete_design(design_id) {
        Ok(_) => Alert::success("Design deleted", "").into_response(),
        Err(error) => {
            tracing::error!("An error occurred while deleting design {design_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_design_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{
        catalog::Catalog,
        db::initialize,
        design::{DesignFilter, DesignTitle, NewDesign},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    use super::{DeleteDesignEndpointState, delete_design_endpoint};

    fn get_test_state() -> DeleteDesignEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        DeleteDesignEndpointState {
            catalog: Catalog::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn delete_design_endpoint_succeeds() {
        let state = get_test_state();
        let design = state
            .catalog
            .create_design(NewDesign {
                title: DesignTitle::new_unchecked("Festival poster"),
                image_url: "/static/uploads/poster.png".to_owned(),
                category_id: None,
            })
            .expect("Could not create test design");

        let response = delete_design_endpoint(Path(design.id), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            state
                .catalog
                .designs(&DesignFilter::default())
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_missing_design_returns_error_html() {
        let state = get_test_state();

        let response = delete_design_endpoint(Path(999999), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
    }
}
