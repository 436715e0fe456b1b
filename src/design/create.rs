//! Design creation endpoint.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    catalog::Catalog,
    design::{DesignFormData, DesignTitle, NewDesign},
};

/// The state needed for creating a design.
#[derive(Clone)]
pub struct CreateDesignEndpointState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for CreateDesignEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Handle design creation form submission.
///
/// On success the client is redirected back to the designs page so the new
/// design shows up in the listing.
pub async fn create_design_endpoint(
    State(state): State<CreateDesignEndpointState>,
    Form(new_design): Form<DesignFormData>,
) -> Response {
    let title = match DesignTitle::new(&new_design.title) {
        Ok(title) => title,
        Err(error) => return error.into_alert_response(),
    };

    let image_url = new_design.image_url.trim().to_owned();
    if image_url.is_empty() {
        return Error::EmptyImageUrl.into_alert_response();
    }

    let new_design = NewDesign {
        title,
        image_url,
        category_id: new_design.category_id,
    };

    match state.catalog.create_design(new_design) {
        Ok(_) => (
            HxRedirect(endpoints::DESIGNS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An error occurred while creating a design: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod create_design_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::{
        catalog::Catalog,
        category::CategoryName,
        db::initialize,
        design::{DesignFilter, DesignFormData},
        endpoints,
        test_utils::assert_hx_redirect,
    };

    use super::{CreateDesignEndpointState, create_design_endpoint};

    fn get_test_state() -> CreateDesignEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        CreateDesignEndpointState {
            catalog: Catalog::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn create_design_redirects_to_designs_page() {
        let state = get_test_state();
        let category = state
            .catalog
            .create_category(CategoryName::new_unchecked("Murals"))
            .expect("Could not create test category");
        let form = DesignFormData {
            title: "Station mural".to_owned(),
            image_url: "/static/uploads/mural.png".to_owned(),
            category_id: Some(category.id),
        };

        let response = create_design_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::DESIGNS_VIEW);

        let designs = state.catalog.designs(&DesignFilter::default()).unwrap();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs[0].category_id, Some(category.id));
        assert!(!designs[0].featured, "new designs must not be featured");
    }

    #[tokio::test]
    async fn create_design_without_category_succeeds() {
        let state = get_test_state();
        let form = DesignFormData {
            title: "Festival poster".to_owned(),
            image_url: "/static/uploads/poster.png".to_owned(),
            category_id: None,
        };

        let response = create_design_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let designs = state.catalog.designs(&DesignFilter::default()).unwrap();
        assert_eq!(designs[0].category_id, None);
    }

    #[tokio::test]
    async fn create_design_with_unknown_category_returns_error_alert() {
        let state = get_test_state();
        let form = DesignFormData {
            title: "Festival poster".to_owned(),
            image_url: "/static/uploads/poster.png".to_owned(),
            category_id: Some(999999),
        };

        let response = create_design_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            state
                .catalog
                .designs(&DesignFilter::default())
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn create_design_with_empty_image_url_returns_error_alert() {
        let state = get_test_state();
        let form = DesignFormData {
            title: "Festival poster".to_owned(),
            image_url: "   ".to_owned(),
            category_id: None,
        };

        let response = create_design_endpoint(State(state), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
