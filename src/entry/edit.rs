//! Entry editing page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    entry::{
        EntryFormData, EntryId, NewEntry,
        form::{FormAction, entry_form_view},
        get_entry, update_entry,
    },
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// The state needed for the edit entry page.
#[derive(Debug, Clone)]
pub struct EditEntryPageState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditEntryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The state needed for updating an entry.
#[derive(Debug, Clone)]
pub struct UpdateEntryEndpointState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateEntryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the entry editing page, pre-filled with the stored entry.
pub async fn get_edit_entry_page(
    Path(entry_id): Path<EntryId>,
    State(state): State<EditEntryPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    match get_entry(entry_id, &connection) {
        Ok(entry) => {
            Ok(edit_entry_view(entry_id, &EntryFormData::from(&entry), "").into_response())
        }
        Err(error) => {
            let error_message = match error {
                Error::NotFound => "Entry not found",
                _ => {
                    tracing::error!("Failed to retrieve entry {entry_id}: {error}");
                    "Failed to load entry"
                }
            };

            Ok(edit_entry_view(entry_id, &EntryFormData::default(), error_message).into_response())
        }
    }
}

/// Handle entry update form submission.
///
/// The existence check runs before validation so editing an ID that has been
/// deleted reports "not found" rather than a validation error.
pub async fn update_entry_endpoint(
    Path(entry_id): Path<EntryId>,
    State(state): State<UpdateEntryEndpointState>,
    Form(form): Form<EntryFormData>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match get_entry(entry_id, &connection) {
        Ok(_) => {}
        Err(Error::NotFound) => return Error::UpdateMissingEntry.into_alert_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve entry {entry_id}: {error}");
            return error.into_alert_response();
        }
    }

    let new_entry = match NewEntry::from_form(&form) {
        Ok(new_entry) => new_entry,
        Err(error) => {
            return edit_entry_form_view(entry_id, &form, &format!("Error: {error}"))
                .into_response();
        }
    };

    match update_entry(entry_id, &new_entry, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::ENTRIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(Error::UpdateMissingEntry) => Error::UpdateMissingEntry.into_alert_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while updating entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}

fn edit_entry_view(entry_id: EntryId, values: &EntryFormData, error_message: &str) -> Markup {
    let edit_endpoint = endpoints::format_endpoint(endpoints::EDIT_ENTRY_VIEW, entry_id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();
    let form = edit_entry_form_view(entry_id, values, error_message);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold self-start mb-4" { "Edit Entry" }

            (form)
        }
    };

    base("Edit Entry", &content)
}

fn edit_entry_form_view(
    entry_id: EntryId,
    values: &EntryFormData,
    error_message: &str,
) -> Markup {
    entry_form_view(
        &FormAction::Update(entry_id),
        values,
        "Update Entry",
        error_message,
    )
}

#[cfg(test)]
mod edit_entry_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        endpoints,
        entry::{NewEntry, create_entry, create_entry_table},
        test_utils::{
            assert_form_error_message, assert_form_input_with_value, assert_hx_endpoint,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    use super::{EditEntryPageState, get_edit_entry_page};

    fn get_test_state() -> EditEntryPageState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_entry_table(&connection).expect("Could not create entries table");

        EditEntryPageState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn page_pre_fills_stored_entry() {
        let state = get_test_state();
        let entry = create_entry(
            NewEntry {
                date: "2025-08-01".to_owned(),
                category: "Groceries".to_owned(),
                amount: 2000,
                memo: "Lunch".to_owned(),
                entry_type: "expense".to_owned(),
            },
            &state.db_connection.lock().unwrap(),
        )
        .expect("Could not create test entry");

        let response = get_edit_entry_page(Path(entry.id), State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &endpoints::format_endpoint(endpoints::PUT_ENTRY, entry.id),
            "hx-put",
        );
        assert_form_input_with_value(&form, "date", "date", "2025-08-01");
        assert_form_input_with_value(&form, "category", "text", "Groceries");
        assert_form_input_with_value(&form, "amount", "number", "2000");
    }

    #[tokio::test]
    async fn page_with_missing_id_shows_not_found() {
        let state = get_test_state();
        let missing_id = 999;

        let response = get_edit_entry_page(Path(missing_id), State(state))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_form_error_message(&form, "Entry not found");
    }
}
