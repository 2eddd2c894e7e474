//! Entry creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    AppState, Error, endpoints,
    entry::{
        EntryFormData, NewEntry, create_entry,
        form::{FormAction, entry_form_view},
    },
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The state needed for the new entry page.
#[derive(Debug, Clone)]
pub struct NewEntryPageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewEntryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The state needed for creating an entry.
#[derive(Debug, Clone)]
pub struct CreateEntryEndpointState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateEntryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the entry creation page with today's date pre-filled.
pub async fn get_new_entry_page(
    State(state): State<NewEntryPageState>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!(
            "could not get local time offset from timezone {}",
            &state.local_timezone
        );
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();
    let values = EntryFormData {
        date: today.to_string(),
        ..Default::default()
    };

    Ok(new_entry_view(&values, "").into_response())
}

/// Handle entry creation form submission, redirects to the entries view on
/// success.
pub async fn create_entry_endpoint(
    State(state): State<CreateEntryEndpointState>,
    Form(form): Form<EntryFormData>,
) -> Response {
    let new_entry = match NewEntry::from_form(&form) {
        Ok(new_entry) => new_entry,
        Err(error) => {
            return new_entry_form_view(&form, &format!("Error: {error}")).into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_entry(new_entry, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::ENTRIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating an entry: {error}");
            error.into_alert_response()
        }
    }
}

fn new_entry_view(values: &EntryFormData, error_message: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_ENTRY_VIEW).into_html();
    let form = new_entry_form_view(values, error_message);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold self-start mb-4" { "Record Entry" }

            (form)
        }
    };

    base("Record Entry", &content)
}

fn new_entry_form_view(values: &EntryFormData, error_message: &str) -> Markup {
    entry_form_view(&FormAction::Create, values, "Record Entry", error_message)
}
