//! Alert fragments for displaying success and error messages to admins.
//!
//! Alerts are rendered as HTMX out-of-band swaps into the `#alert-container`
//! element that [crate::html::base] places on every page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

const ALERT_SUCCESS_STYLE: &str = "flex flex-col gap-1 p-4 mb-4 rounded border \
    border-emerald-300 bg-emerald-50 text-emerald-900 dark:border-emerald-700 \
    dark:bg-emerald-950 dark:text-emerald-100";

const ALERT_ERROR_STYLE: &str = "flex flex-col gap-1 p-4 mb-4 rounded border \
    border-red-300 bg-red-50 text-red-900 dark:border-red-700 \
    dark:bg-red-950 dark:text-red-100";

/// A dismissable message shown at the bottom of the page.
#[derive(Debug, Clone)]
pub struct Alert {
    is_error: bool,
    message: String,
    details: String,
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self {
            is_error: false,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            is_error: true,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an out-of-band swap targeting `#alert-container`.
    pub fn into_html(self) -> Markup {
        let style = if self.is_error {
            ALERT_ERROR_STYLE
        } else {
            ALERT_SUCCESS_STYLE
        };

        html! {
            div id="alert-container" hx-swap-oob="true" class="w-full max-w-md px-4"
            {
                div class=(style) role="alert"
                {
                    div class="flex items-start justify-between gap-2"
                    {
                        span class="font-semibold" { (self.message) }

                        button
                            type="button"
                            aria-label="Dismiss"
                            class="cursor-pointer font-bold"
                            onclick="this.closest('#alert-container').replaceChildren()"
                        {
                            "\u{00d7}"
                        }
                    }

                    @if !self.details.is_empty() {
                        span class="text-sm" { (self.details) }
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
