//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The auth module handles the lower level authentication and cookie auth logic.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error,
    admin::get_admin_by_username,
    auth::{
        DEFAULT_COOKIE_DURATION, invalidate_auth_cookie, normalize_redirect_url, set_auth_cookie,
    },
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base},
    state::create_cookie_key,
};

/// The error shown when the username or the password is wrong.
///
/// Deliberately the same message for both cases so the form does not reveal
/// which usernames exist.
pub const INVALID_CREDENTIALS_ERROR_MSG: &str = "Invalid username or password.";

fn log_in_form(error_message: Option<&str>, redirect_url: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-disabled-elt="#username, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            @if let Some(redirect_url) = redirect_url {
                input type="hidden" name="redirect_url" value=(redirect_url);
            }

            div
            {
                label for="username" class=(FORM_LABEL_STYLE) { "Username" }

                input
                    type="text"
                    name="username"
                    id="username"
                    placeholder="Username"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus;
            }

            div
            {
                label for="password" class=(FORM_LABEL_STYLE) { "Password" }

                input
                    type="password"
                    name="password"
                    id="password"
                    placeholder="••••••••"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;

                @if let Some(error_message) = error_message {
                    p class="text-red-500 text-base" { (error_message) }
                }
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                "Log in"
            }
        }
    }
}

fn parse_redirect_url(raw_url: Option<&str>, source: &str) -> Option<String> {
    match raw_url.and_then(normalize_redirect_url) {
        Some(redirect_url) => Some(redirect_url),
        None => {
            if let Some(redirect_url) = raw_url {
                tracing::warn!("Invalid redirect URL from {source}: {redirect_url}");
            }
            None
        }
    }
}

/// Display the log-in page.
pub async fn get_log_in_page(Query(query): Query<RedirectQuery>) -> Response {
    let redirect_url = parse_redirect_url(query.redirect_url.as_deref(), "log-in query");
    let form = log_in_form(None, redirect_url.as_deref());

    let content = html! {
        div class="flex flex-col items-center justify-center px-6 py-8 mx-auto"
        {
            a href="/" class="flex items-center mb-6 text-2xl font-semibold text-stone-900 dark:text-white"
            {
                "Atelier"
            }

            div class="w-full bg-white rounded-lg shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-stone-800 dark:border-stone-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-stone-900 md:text-2xl dark:text-white"
                    {
                        "Log in to the admin panel"
                    }

                    (form)
                }
            }
        }
    };

    base("Log In", &content).into_response()
}

/// The state needed to perform a log-in.
#[derive(Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl LoginState {
    /// Create the cookie key from a string and set the default cookie duration.
    pub fn new(cookie_secret: &str, db_connection: Arc<Mutex<Connection>>) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            db_connection,
        }
    }
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the auth cookie is set and the client is
/// redirected to the admin dashboard (or the page they came from).
/// Otherwise, the form is returned with an error message explaining the
/// problem.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Form(log_in_data): Form<LogInData>,
) -> Response {
    let redirect_url = parse_redirect_url(log_in_data.redirect_url.as_deref(), "log-in form");
    let redirect_url = redirect_url.as_deref();

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return log_in_form(
                Some("An internal error occurred. Please try again later."),
                redirect_url,
            )
            .into_response();
        }
    };

    let admin = match get_admin_by_username(&log_in_data.username, &connection) {
        Ok(admin) => admin,
        Err(Error::NotFound) => {
            return log_in_form(Some(INVALID_CREDENTIALS_ERROR_MSG), redirect_url).into_response();
        }
        Err(error) => {
            tracing::error!("Unhandled error while verifying credentials: {error}");
            return log_in_form(
                Some("An internal error occurred. Please try again later."),
                redirect_url,
            )
            .into_response();
        }
    };
    drop(connection);

    let is_password_valid = match admin.password_hash.verify(&log_in_data.password) {
        Ok(is_password_valid) => is_password_valid,
        Err(error) => {
            tracing::error!("Unhandled error while verifying credentials: {error}");
            return log_in_form(
                Some("An internal error occurred. Please try again later."),
                redirect_url,
            )
            .into_response();
        }
    };

    if !is_password_valid {
        return log_in_form(Some(INVALID_CREDENTIALS_ERROR_MSG), redirect_url).into_response();
    }

    let redirect_url = redirect_url.unwrap_or(endpoints::DASHBOARD_VIEW);

    set_auth_cookie(jar.clone(), admin.id, state.cookie_duration)
        .map(|updated_jar| {
            (
                StatusCode::SEE_OTHER,
                HxRedirect(redirect_url.to_owned()),
                updated_jar,
            )
        })
        .map_err(|err| {
            tracing::error!("Error setting auth cookie: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
                invalidate_auth_cookie(jar),
            )
        })
        .into_response()
}

/// The query parameters accepted by the log-in page.
#[derive(Deserialize)]
pub struct RedirectQuery {
    /// Where to send the client after a successful log-in.
    pub redirect_url: Option<String>,
}

/// The raw data entered by the user in the log-in form.
///
/// The password is stored as a plain string. There is no need for validation
/// here since it will be compared against the password hash in the database.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInData {
    /// Username entered during log-in.
    pub username: String,
    /// Password entered during log-in.
    pub password: String,
    /// The page the client was trying to reach before logging in.
    pub redirect_url: Option<String>,
}

#[cfg(test)]
mod log_in_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Router,
        http::StatusCode,
        routing::{get, post},
    };
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        admin::{create_admin, create_admin_table},
        auth::COOKIE_TOKEN,
        endpoints,
        password::{PasswordHash, ValidatedPassword},
        test_utils::{
            assert_form_error_message, assert_form_input, assert_form_submit_button,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
    };

    use super::{INVALID_CREDENTIALS_ERROR_MSG, LoginState, get_log_in_page, post_log_in};

    fn get_test_state(with_admin: bool) -> LoginState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_admin_table(&connection).expect("Could not create admin table");

        if with_admin {
            let password_hash = PasswordHash::new(
                ValidatedPassword::new_unchecked("averystrongpassword"),
                4,
            )
            .expect("Could not hash password");
            create_admin("claire", password_hash, &connection)
                .expect("Could not create test admin");
        }

        LoginState::new("42", Arc::new(Mutex::new(connection)))
    }

    fn get_test_server(state: LoginState) -> TestServer {
        let app = Router::new()
            .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
            .route(endpoints::LOG_IN_API, post(post_log_in))
            .with_state(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn log_in_page_has_username_and_password_form() {
        let server = get_test_server(get_test_state(false));

        let response = server.get(endpoints::LOG_IN_VIEW).await;

        response.assert_status_ok();
        let document = scraper::Html::parse_document(&response.text());
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::LOG_IN_API, "hx-post");
        assert_form_input(&form, "username", "text");
        assert_form_input(&form, "password", "password");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn log_in_with_correct_credentials_sets_cookie_and_redirects() {
        let server = get_test_server(get_test_state(true));
        let form = [("username", "claire"), ("password", "averystrongpassword")];

        let response = server.post(endpoints::LOG_IN_API).form(&form).await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::DASHBOARD_VIEW);
        assert!(response.maybe_cookie(COOKIE_TOKEN).is_some());
    }

    #[tokio::test]
    async fn log_in_with_wrong_password_shows_generic_error() {
        let server = get_test_server(get_test_state(true));
        let form = [("username", "claire"), ("password", "wrongpassword")];

        let response = server.post(endpoints::LOG_IN_API).form(&form).await;

        response.assert_status_ok();
        assert_error_message(&response.text());
    }

    #[tokio::test]
    async fn log_in_with_unknown_username_shows_same_generic_error() {
        let server = get_test_server(get_test_state(true));
        let form = [("username", "mallory"), ("password", "averystrongpassword")];

        let response = server.post(endpoints::LOG_IN_API).form(&form).await;

        response.assert_status_ok();
        assert_error_message(&response.text());
    }

    #[tokio::test]
    async fn log_in_with_safe_redirect_url_redirects_there() {
        let server = get_test_server(get_test_state(true));
        let form = [
            ("username", "claire"),
            ("password", "averystrongpassword"),
            ("redirect_url", "/admin/designs"),
        ];

        let response = server.post(endpoints::LOG_IN_API).form(&form).await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), "/admin/designs");
    }

    #[tokio::test]
    async fn log_in_with_unsafe_redirect_url_falls_back_to_dashboard() {
        let server = get_test_server(get_test_state(true));
        let form = [
            ("username", "claire"),
            ("password", "averystrongpassword"),
            ("redirect_url", "https://evil.example/phish"),
        ];

        let response = server.post(endpoints::LOG_IN_API).form(&form).await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::DASHBOARD_VIEW);
    }

    #[track_caller]
    fn assert_error_message(body: &str) {
        let fragment = scraper::Html::parse_fragment(body);
        let form = must_get_form(&fragment);

        assert_form_error_message(&form, INVALID_CREDENTIALS_ERROR_MSG);
    }
}
