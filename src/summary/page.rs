//! The route handler and view for the summary page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_yen,
    },
    navigation::NavBar,
    summary::{CategoryTotal, MonthlyTotal, get_category_totals, get_monthly_totals},
};

/// The month label shown when the stored date could not be parsed.
const UNKNOWN_MONTH_LABEL: &str = "(unknown)";

/// The state needed for the summary page.
#[derive(Debug, Clone)]
pub struct SummaryPageState {
    /// The database connection for reading entry totals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the summary page with monthly and per-category totals.
pub async fn get_summary_page(State(state): State<SummaryPageState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let monthly_totals = get_monthly_totals(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve monthly totals: {error}"))?;
    let category_totals = get_category_totals(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve category totals: {error}"))?;

    Ok(summary_view(&monthly_totals, &category_totals).into_response())
}

fn summary_view(monthly_totals: &[MonthlyTotal], category_totals: &[CategoryTotal]) -> Markup {
    let nav_bar = NavBar::new(endpoints::SUMMARY_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-8 w-full lg:max-w-5xl lg:mx-auto"
            {
                h1 class="text-xl font-bold" { "Summary" }

                (monthly_totals_table(monthly_totals))

                (category_totals_table(category_totals))
            }
        }
    );

    base("Summary", &content)
}

fn monthly_totals_table(totals: &[MonthlyTotal]) -> Markup {
    html!(
        section class="space-y-4"
        {
            h2 class="text-lg font-semibold" { "Monthly Totals" }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    }
                }

                tbody
                {
                    @for total in totals {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE)
                            {
                                (total.month.as_deref().unwrap_or(UNKNOWN_MONTH_LABEL))
                            }

                            td class=(TABLE_CELL_STYLE) { (total.entry_type) }

                            td class=(TABLE_CELL_STYLE)
                            {
                                span class="tabular-nums" { (format_yen(total.total)) }
                            }
                        }
                    }

                    @if totals.is_empty() {
                        (empty_row("3"))
                    }
                }
            }
        }
    )
}

fn category_totals_table(totals: &[CategoryTotal]) -> Markup {
    html!(
        section class="space-y-4"
        {
            h2 class="text-lg font-semibold" { "Category Totals" }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    }
                }

                tbody
                {
                    @for total in totals {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (total.category) }

                            td class=(TABLE_CELL_STYLE)
                            {
                                span class="tabular-nums" { (format_yen(total.total)) }
                            }
                        }
                    }

                    @if totals.is_empty() {
                        (empty_row("2"))
                    }
                }
            }
        }
    )
}

fn empty_row(colspan: &str) -> Markup {
    html!(
        tr
        {
            td
                colspan=(colspan)
                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
            {
                "Nothing to summarize yet."
            }
        }
    )
}
