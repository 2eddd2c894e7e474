//! Entry deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::Alert,
    entry::{EntryId, db::delete_entry},
};

/// The state needed for deleting an entry.
#[derive(Debug, Clone)]
pub struct DeleteEntryEndpointState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteEntryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle entry deletion.
///
/// The delete is issued unconditionally and reported as a success even when
/// no row matched, so deleting an already-deleted entry behaves the same as
/// deleting one that exists.
pub async fn delete_entry_endpoint(
    Path(entry_id): Path<EntryId>,
    State(state): State<DeleteEntryEndpointState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_entry(entry_id, &connection) {
        Ok(rows_affected) => {
            if rows_affected == 0 {
                tracing::debug!("no entry with id {entry_id} to delete");
            }

            Alert::success("Entry deleted").into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting entry {entry_id}: {error}");
            error.into_alert_response()
        }
    }
}
