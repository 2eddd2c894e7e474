//! The application's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/entries/{entry_id}/edit', use
//! [format_endpoint].

/// The home page, showing income/expense totals by type.
pub const ROOT: &str = "/";
/// The page for listing entries.
pub const ENTRIES_VIEW: &str = "/entries";
/// The page for recording a new entry.
pub const NEW_ENTRY_VIEW: &str = "/entries/new";
/// The page for editing an existing entry.
pub const EDIT_ENTRY_VIEW: &str = "/entries/{entry_id}/edit";
/// The page showing monthly and per-category totals.
pub const SUMMARY_VIEW: &str = "/summary";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create an entry.
pub const POST_ENTRY: &str = "/api/entries";
/// The route to update an entry.
pub const PUT_ENTRY: &str = "/api/entries/{entry_id}";
/// The route to delete an entry.
pub const DELETE_ENTRY: &str = "/api/entries/{entry_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in the endpoint path '/entries/{entry_id}/edit', '{entry_id}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. If no parameter is found in `endpoint_path`, the
/// function returns the original `endpoint_path`.
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
