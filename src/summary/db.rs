//! Aggregate queries for the summary page.

use rusqlite::Connection;

use crate::Error;

/// The summed amount for one (month, type) group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// The calendar month as "YYYY-MM".
    ///
    /// `None` when the stored date is not something SQLite can parse as a
    /// date, since the month cannot be extracted from it.
    pub month: Option<String>,
    /// The entry type the total belongs to.
    pub entry_type: String,
    /// The summed amount in whole yen.
    pub total: i64,
}

/// The summed amount for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// The category the total belongs to.
    pub category: String,
    /// The summed amount in whole yen.
    pub total: i64,
}

/// Get the summed amount per (calendar month, entry type), ordered by month
/// and type.
///
/// The month is extracted with SQLite's `strftime`, so it follows whatever
/// date text the user stored.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_monthly_totals(connection: &Connection) -> Result<Vec<MonthlyTotal>, Error> {
    connection
        .prepare(
            "SELECT strftime('%Y-%m', date) AS month, type, SUM(amount) FROM entries \
            GROUP BY month, type ORDER BY month, type",
        )?
        .query_map([], |row| {
            Ok(MonthlyTotal {
                month: row.get(0)?,
                entry_type: row.get(1)?,
                total: row.get(2)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}

/// Get the summed amount per category, ordered by category.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_category_totals(connection: &Connection) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT category, SUM(amount) FROM entries GROUP BY category ORDER BY category",
        )?
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}
