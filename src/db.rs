/*! Schema initialization for the application's SQLite database. */

use rusqlite::Connection;

use crate::entry::create_entry_table;

/// Create the application tables if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_entry_table(connection)
}
