//! Ledger entry management.
//!
//! This module contains everything related to entries:
//! - The `Entry` model and form validation
//! - Database functions for storing, querying, and managing entries
//! - Page and endpoint handlers for entry-related web pages

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod list;

pub use create::{create_entry_endpoint, get_new_entry_page};
pub use db::{SortKey, create_entry, create_entry_table, get_entries, get_entry, update_entry};
pub use delete::delete_entry_endpoint;
pub use domain::{Entry, EntryFormData, EntryId, NewEntry};
pub use edit::{get_edit_entry_page, update_entry_endpoint};
pub use list::get_entries_page;

#[cfg(test)]
pub use db::count_entries;
