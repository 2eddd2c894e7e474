//! Alert fragments for displaying success and error messages to users.
//!
//! Alerts are rendered as out-of-band swaps into the `#alert-container`
//! element of the base page layout, so they can be returned from htmx
//! endpoints alongside (or instead of) the main response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const SUCCESS_STYLE: &str = "p-4 text-sm rounded border border-green-300 \
    text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400 \
    dark:border-green-800";

const ERROR_STYLE: &str = "p-4 text-sm rounded border border-red-300 \
    text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400 \
    dark:border-red-800";

/// A transient notification shown to the user after an operation.
#[derive(Debug, Clone)]
pub enum Alert {
    /// The operation succeeded.
    Success {
        /// A short message, e.g. "Entry deleted".
        message: String,
    },
    /// The operation failed.
    Error {
        /// A short summary of what went wrong.
        message: String,
        /// What the user can do about it. May be empty.
        details: String,
    },
}

impl Alert {
    /// Create a new success alert.
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
        }
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as a fragment that swaps into the alert container.
    pub fn into_markup(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message } => (SUCCESS_STYLE, message, String::new()),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
        };

        html!(
            div hx-swap-oob="innerHTML:#alert-container"
            {
                div class=(style)
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }
            }
        )
    }

    /// Convert the alert into a response with the given status code.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_markup()).into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_response_with_status(StatusCode::OK)
    }
}
