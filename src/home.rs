//! The home page, showing income/expense totals by type.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_yen},
    navigation::NavBar,
};

/// The state needed for the home page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    /// The database connection for reading entry totals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The summed amount for one entry type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotal {
    /// The entry type the total belongs to.
    pub entry_type: String,
    /// The summed amount in whole yen.
    pub total: i64,
}

/// Render the home page.
pub async fn get_home_page(State(state): State<HomePageState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let totals = get_totals_by_type(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve totals by type: {error}"))?;

    Ok(home_view(&totals).into_response())
}

/// Get the summed amount per entry type, ordered by type name.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_totals_by_type(connection: &Connection) -> Result<Vec<TypeTotal>, Error> {
    connection
        .prepare("SELECT type, SUM(amount) FROM entries GROUP BY type ORDER BY type")?
        .query_map([], |row| {
            Ok(TypeTotal {
                entry_type: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}

/// Find the total for `entry_type`, defaulting to zero when no entries of
/// that type exist.
fn total_for(totals: &[TypeTotal], entry_type: &str) -> i64 {
    totals
        .iter()
        .find(|total| total.entry_type == entry_type)
        .map(|total| total.total)
        .unwrap_or(0)
}

fn home_view(totals: &[TypeTotal]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let income = total_for(totals, "income");
    let expense = total_for(totals, "expense");
    let balance = income - expense;

    let unconventional_totals: Vec<&TypeTotal> = totals
        .iter()
        .filter(|total| total.entry_type != "income" && total.entry_type != "expense")
        .collect();

    let card = |title: &str, amount: i64| {
        html!(
            div class="rounded border border-gray-200 bg-white px-6 py-4 shadow-sm
                dark:border-gray-700 dark:bg-gray-800"
            {
                h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }

                p class="mt-1 text-2xl font-semibold tabular-nums" { (format_yen(amount)) }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Home" }

                    a href=(endpoints::NEW_ENTRY_VIEW) class=(LINK_STYLE)
                    {
                        "Record Entry"
                    }
                }

                div class="grid gap-4 sm:grid-cols-3"
                {
                    (card("Income", income))
                    (card("Expense", expense))
                    (card("Balance", balance))
                }

                @if !unconventional_totals.is_empty() {
                    div class="grid gap-4 sm:grid-cols-3"
                    {
                        @for total in &unconventional_totals {
                            (card(&total.entry_type, total.total))
                        }
                    }
                }

                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "See the "
                    a href=(endpoints::SUMMARY_VIEW) class=(LINK_STYLE) { "summary" }
                    " for monthly and per-category totals."
                }
            }
        }
    );

    base("Home", &content)
}


#[cfg(test)]
mod home_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::{
        entry::{NewEntry, create_entry, create_entry_table},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{HomePageState, get_home_page};

    fn get_test_state() -> HomePageState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_entry_table(&connection).expect("Could not create entries table");

        HomePageState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn page_shows_totals_by_type() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_entry(
                NewEntry {
                    date: "2025-08-01".to_owned(),
                    category: "Groceries".to_owned(),
                    amount: 2000,
                    memo: String::new(),
                    entry_type: "expense".to_owned(),
                },
                &connection,
            )
            .unwrap();
            create_entry(
                NewEntry {
                    date: "2025-08-02".to_owned(),
                    category: "Salary".to_owned(),
                    amount: 100_000,
                    memo: String::new(),
                    entry_type: "income".to_owned(),
                },
                &connection,
            )
            .unwrap();
        }

        let response = get_home_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("¥100,000"));
        assert!(text.contains("¥2,000"));
        // Balance card: 100,000 income - 2,000 expense.
        assert!(text.contains("¥98,000"));
    }

    #[tokio::test]
    async fn page_shows_zero_totals_without_entries() {
        let state = get_test_state();

        let response = get_home_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("¥0"));
    }
}
