//! The JSON endpoint for toggling a design's featured flag.
//!
//! Unlike the HTMX form endpoints, this endpoint returns JSON: the page
//! script flips the badge in place only after the server confirms the new
//! value, so the badge never disagrees with the database.

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, catalog::Catalog, design::DesignId};

/// The state needed for toggling the featured flag.
#[derive(Clone)]
pub struct ToggleFeaturedEndpointState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for ToggleFeaturedEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// The JSON body returned by [toggle_featured_endpoint].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleFeaturedResponse {
    /// Whether the toggle was applied.
    pub ok: bool,
    /// The design's featured flag after the toggle. Absent when `ok` is
    /// false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Invert the featured flag of a design and return the new value as JSON.
///
/// Returns `{"ok": true, "featured": <new value>}` on success, or a 404 with
/// `{"ok": false}` when the design does not exist.
pub async fn toggle_featured_endpoint(
    Path(design_id): Path<DesignId>,
    State(state): State<ToggleFeaturedEndpointState>,
) -> Response {
    match state.catalog.toggle_featured(design_id) {
        Ok(featured) => Json(ToggleFeaturedResponse {
            ok: true,
            featured: Some(featured),
        })
        .into_response(),
        Err(Error::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ToggleFeaturedResponse {
                ok: false,
                featured: None,
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(
                "An error occurred while toggling the featured flag of design {design_id}: {error}"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ToggleFeaturedResponse {
                    ok: false,
                    featured: None,
                }),
            )
                .into_response()
        }
    }
}
