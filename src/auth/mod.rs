//! Cookie based authentication for the admin panel.
//!
//! Log-in produces an expiring token that is serialized into a private (encrypted)
//! cookie. The middleware in this module checks the cookie on every protected
//! request and extends its expiry on activity.

mod cookie;
mod middleware;
mod redirect;
mod token;

pub use cookie::{DEFAULT_COOKIE_DURATION, invalidate_auth_cookie, set_auth_cookie};
pub use middleware::{auth_guard, auth_guard_api, auth_guard_hx};
pub use redirect::normalize_redirect_url;

#[cfg(test)]
pub(crate) use cookie::COOKIE_TOKEN;
