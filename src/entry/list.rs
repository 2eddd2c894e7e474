//! Entries listing page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    entry::{Entry, SortKey, get_entries},
    html::{
        EXPENSE_BADGE_STYLE, INCOME_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, edit_delete_action_links,
        format_yen,
    },
    navigation::NavBar,
};

/// The state needed for the entries listing page.
#[derive(Debug, Clone)]
pub struct EntriesPageState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EntriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters accepted by the entries listing page.
#[derive(Debug, Default, Deserialize)]
pub struct EntriesQuery {
    /// The raw sort key. Normalized by [SortKey::from_query].
    sort: Option<String>,
}

/// Render the entries listing page.
pub async fn get_entries_page(
    Query(query): Query<EntriesQuery>,
    State(state): State<EntriesPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let sort = SortKey::from_query(query.sort.as_deref());
    let entries = get_entries(sort, &connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve entries: {error}"))?;

    Ok(entries_view(&entries, sort).into_response())
}

fn entries_view(entries: &[Entry], sort: SortKey) -> Markup {
    let nav_bar = NavBar::new(endpoints::ENTRIES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Entries" }

                    div class="flex gap-4 items-end"
                    {
                        (sort_links(sort))

                        a href=(endpoints::NEW_ENTRY_VIEW) class=(LINK_STYLE)
                        {
                            "Record Entry"
                        }
                    }
                }

                section class="dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Memo" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for entry in entries {
                                (table_row(entry))
                            }

                            @if entries.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No entries yet. "
                                        a href=(endpoints::NEW_ENTRY_VIEW) class=(LINK_STYLE)
                                        {
                                            "Record your first entry"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Entries", &content)
}

/// Links for switching the listing order. The active key is not a link.
fn sort_links(active: SortKey) -> Markup {
    let sort_link = |sort: SortKey, title: &str| {
        html!(
            @if sort == active {
                span class="text-sm font-semibold" { (title) }
            } @else {
                a
                    href=(format!("{}?sort={}", endpoints::ENTRIES_VIEW, sort.as_query_value()))
                    class=(LINK_STYLE)
                {
                    (title)
                }
            }
        )
    };

    html!(
        div class="flex gap-2 text-sm items-baseline"
        {
            span class="text-gray-500 dark:text-gray-400" { "Sort by:" }
            (sort_link(SortKey::Date, "Date"))
            (sort_link(SortKey::Category, "Category"))
        }
    )
}

fn table_row(entry: &Entry) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_ENTRY_VIEW, entry.id);
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_ENTRY, entry.id);
    let confirm_message = format!(
        "Are you sure you want to delete the {} entry of {}?",
        entry.category,
        format_yen(entry.amount)
    );

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (entry.date) }

            td class=(TABLE_CELL_STYLE) { (entry.category) }

            td class=(TABLE_CELL_STYLE) { (type_badge(&entry.entry_type)) }

            td class=(TABLE_CELL_STYLE)
            {
                span class="tabular-nums" { (format_yen(entry.amount)) }
            }

            td class=(TABLE_CELL_STYLE) { (entry.memo) }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    (edit_delete_action_links(
                        &edit_url,
                        &delete_url,
                        &confirm_message,
                        "closest tr",
                        "delete",
                    ))
                }
            }
        }
    )
}

/// A colored badge for the entry type. Unconventional type strings get a
/// neutral badge.
fn type_badge(entry_type: &str) -> Markup {
    let style = match entry_type {
        "income" => INCOME_BADGE_STYLE,
        "expense" => EXPENSE_BADGE_STYLE,
        _ => {
            "inline-flex items-center px-2.5 py-0.5 text-xs font-semibold \
            text-gray-800 bg-gray-100 rounded-full dark:bg-gray-700 dark:text-gray-300"
        }
    };

    html!( span class=(style) { (entry_type) } )
}
