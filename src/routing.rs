//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router,
    middleware,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{auth_guard, auth_guard_api, auth_guard_hx},
    category::{create_category_endpoint, delete_category_endpoint, get_categories_page},
    dashboard::get_dashboard_page,
    design::{
        create_design_endpoint, delete_design_endpoint, get_designs_page,
        toggle_featured_endpoint,
    },
    endpoints,
    gallery::{get_gallery_page, get_home_page},
    internal_server_error::get_internal_server_error_page,
    log_in::{get_log_in_page, post_log_in},
    log_out::get_log_out,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::GALLERY_VIEW, get(get_gallery_page))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_pages = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page))
        .route(endpoints::DESIGNS_VIEW, get(get_designs_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // These routes need to use the HX-REDIRECT header for auth redirects to
    // work properly for HTMX requests.
    let protected_form_endpoints = Router::new()
        .route(endpoints::POST_CATEGORY, post(create_category_endpoint))
        .route(
            endpoints::DELETE_CATEGORY,
            delete(delete_category_endpoint),
        )
        .route(endpoints::POST_DESIGN, post(create_design_endpoint))
        .route(endpoints::DELETE_DESIGN, delete(delete_design_endpoint))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx));

    // The toggle endpoint returns JSON, so a redirect would be useless to
    // the page script. It gets a 401 JSON rejection instead.
    let protected_json_endpoints = Router::new()
        .route(endpoints::TOGGLE_FEATURED, post(toggle_featured_endpoint))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_guard_api,
        ));

    unprotected_routes
        .merge(protected_pages)
        .merge(protected_form_endpoints)
        .merge(protected_json_endpoints)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
