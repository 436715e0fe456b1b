//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g. '/api/designs/{design_id}',
//! use [format_endpoint].

/// The public home page with featured and newest designs.
pub const ROOT: &str = "/";
/// The public gallery page.
pub const GALLERY_VIEW: &str = "/gallery";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The admin landing page with catalog counts.
pub const DASHBOARD_VIEW: &str = "/admin";
/// The admin page for listing and creating categories.
pub const CATEGORIES_VIEW: &str = "/admin/categories";
/// The admin page for listing and creating designs.
pub const DESIGNS_VIEW: &str = "/admin/designs";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in an admin.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current admin.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create a category.
pub const POST_CATEGORY: &str = "/api/categories";
/// The route to delete a category.
pub const DELETE_CATEGORY: &str = "/api/categories/{category_id}";
/// The route to create a design.
pub const POST_DESIGN: &str = "/api/designs";
/// The route to delete a design.
pub const DELETE_DESIGN: &str = "/api/designs/{design_id}";
/// The route to toggle a design's featured flag. Returns JSON.
pub const TOGGLE_FEATURED: &str = "/api/designs/{design_id}/featured";

/// Replace the `{parameter}` in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. This
/// function assumes that an endpoint path only contains ASCII characters
/// and at most one parameter.
///
/// If no parameter is found in `endpoint_path`, the original path is
/// returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes will parse as URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::GALLERY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DESIGNS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::LOG_IN_API);
        assert_endpoint_is_valid_uri(endpoints::LOG_OUT);
        assert_endpoint_is_valid_uri(endpoints::POST_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::DELETE_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::POST_DESIGN);
        assert_endpoint_is_valid_uri(endpoints::DELETE_DESIGN);
        assert_endpoint_is_valid_uri(endpoints::TOGGLE_FEATURED);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/api/designs/{design_id}/featured", 7);

        assert_eq!(formatted_path, "/api/designs/7/featured");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn unterminated_parameter_is_truncated() {
        let formatted_path = format_endpoint("/hello/{world", 1);

        assert_eq!(formatted_path, "/hello/1");
    }
}
