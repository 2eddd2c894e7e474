//! Database operations for ledger entries.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    entry::{Entry, EntryId, NewEntry},
};

/// How the entry listing should be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent date first.
    #[default]
    Date,
    /// Category name ascending, most recent date first within each category.
    Category,
}

impl SortKey {
    /// Normalize the raw `sort` query value.
    ///
    /// Anything other than "category", including an absent parameter,
    /// selects the date ordering.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("category") => Self::Category,
            _ => Self::Date,
        }
    }

    /// The value this key takes in the `sort` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Category => "category",
        }
    }
}

/// Create a new entry in the database and return it with its generated ID.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_entry(new_entry: NewEntry, connection: &Connection) -> Result<Entry, Error> {
    connection.execute(
        "INSERT INTO entries (date, category, amount, memo, type) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            new_entry.date,
            new_entry.category,
            new_entry.amount,
            new_entry.memo,
            new_entry.entry_type
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Entry {
        id,
        date: new_entry.date,
        category: new_entry.category,
        amount: new_entry.amount,
        memo: new_entry.memo,
        entry_type: new_entry.entry_type,
    })
}

/// Retrieve a single entry by ID.
///
/// # Errors
/// This function will return an:
/// - [Error::NotFound] if `entry_id` does not refer to a stored entry,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_entry(entry_id: EntryId, connection: &Connection) -> Result<Entry, Error> {
    connection
        .prepare("SELECT id, date, category, amount, memo, type FROM entries WHERE id = :id")?
        .query_row(&[(":id", &entry_id)], map_entry_row)
        .map_err(|error| error.into())
}

/// Retrieve all entries in the order selected by `sort`.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_entries(sort: SortKey, connection: &Connection) -> Result<Vec<Entry>, Error> {
    let sql = match sort {
        SortKey::Date => {
            "SELECT id, date, category, amount, memo, type FROM entries ORDER BY date DESC"
        }
        SortKey::Category => {
            "SELECT id, date, category, amount, memo, type FROM entries \
            ORDER BY category ASC, date DESC"
        }
    };

    connection
        .prepare(sql)?
        .query_map([], map_entry_row)?
        .map(|maybe_entry| maybe_entry.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every field of an entry. Returns an error if the entry doesn't exist.
///
/// # Errors
/// This function will return an:
/// - [Error::UpdateMissingEntry] if `entry_id` does not refer to a stored entry,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_entry(
    entry_id: EntryId,
    new_entry: &NewEntry,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE entries SET date = ?1, category = ?2, amount = ?3, memo = ?4, type = ?5 \
        WHERE id = ?6",
        params![
            new_entry.date,
            new_entry.category,
            new_entry.amount,
            new_entry.memo,
            new_entry.entry_type,
            entry_id
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingEntry);
    }

    Ok(())
}

/// The number of rows removed by a delete statement.
pub type RowsAffected = usize;

/// Delete an entry by ID.
///
/// Deleting an ID that is not in the database is not an error, the statement
/// simply matches zero rows. The caller can inspect the returned row count.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn delete_entry(entry_id: EntryId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM entries WHERE id = :id", &[(":id", &entry_id)])
        .map_err(|error| error.into())
}

/// Create the entries table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_entry_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            category TEXT NOT NULL,
            amount INTEGER NOT NULL,
            memo TEXT,
            type TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Map a database row to an [Entry].
fn map_entry_row(row: &Row) -> Result<Entry, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let memo: Option<String> = row.get(4)?;
    let entry_type = row.get(5)?;

    Ok(Entry {
        id,
        date,
        category,
        amount,
        memo: memo.unwrap_or_default(),
        entry_type,
    })
}

/// Get the total number of entries in the database.
#[cfg(test)]
pub fn count_entries(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM entries", [], |row| row.get(0))
        .map_err(|error| error.into())
}


#[cfg(test)]
mod entry_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        entry::{NewEntry, SortKey},
    };

    use super::{
        count_entries, create_entry, create_entry_table, delete_entry, get_entries, get_entry,
        update_entry,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_entry_table(&connection).unwrap();
        connection
    }

    fn new_entry(date: &str, category: &str, amount: i64) -> NewEntry {
        NewEntry {
            date: date.to_owned(),
            category: category.to_owned(),
            amount,
            memo: String::new(),
            entry_type: "expense".to_owned(),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let connection = get_test_connection();

        let first = create_entry(new_entry("2025-08-01", "Groceries", 2000), &connection).unwrap();
        let second = create_entry(new_entry("2025-08-02", "Salary", 100_000), &connection).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_returns_stored_entry() {
        let connection = get_test_connection();
        let created = create_entry(
            NewEntry {
                date: "2025-08-01".to_owned(),
                category: "Groceries".to_owned(),
                amount: 2000,
                memo: "Lunch".to_owned(),
                entry_type: "expense".to_owned(),
            },
            &connection,
        )
        .unwrap();

        let got = get_entry(created.id, &connection).unwrap();

        assert_eq!(created, got);
    }

    #[test]
    fn get_missing_entry_returns_not_found() {
        let connection = get_test_connection();

        let result = get_entry(999, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn list_sorts_by_date_descending_by_default() {
        let connection = get_test_connection();
        create_entry(new_entry("2025-07-15", "Groceries", 1), &connection).unwrap();
        create_entry(new_entry("2025-08-02", "Rent", 2), &connection).unwrap();
        create_entry(new_entry("2025-08-01", "Utilities", 3), &connection).unwrap();

        let entries = get_entries(SortKey::Date, &connection).unwrap();

        let dates: Vec<&str> = entries.iter().map(|entry| entry.date.as_str()).collect();
        assert_eq!(dates, ["2025-08-02", "2025-08-01", "2025-07-15"]);
    }

    #[test]
    fn list_sorts_by_category_with_date_tie_break() {
        let connection = get_test_connection();
        create_entry(new_entry("2025-08-01", "Groceries", 1), &connection).unwrap();
        create_entry(new_entry("2025-08-03", "Groceries", 2), &connection).unwrap();
        create_entry(new_entry("2025-08-02", "Books", 3), &connection).unwrap();

        let entries = get_entries(SortKey::Category, &connection).unwrap();

        let keys: Vec<(&str, &str)> = entries
            .iter()
            .map(|entry| (entry.category.as_str(), entry.date.as_str()))
            .collect();
        assert_eq!(
            keys,
            [
                ("Books", "2025-08-02"),
                ("Groceries", "2025-08-03"),
                ("Groceries", "2025-08-01"),
            ]
        );
    }

    #[test]
    fn update_overwrites_all_fields() {
        let connection = get_test_connection();
        let created = create_entry(new_entry("2025-08-01", "Groceries", 2000), &connection).unwrap();
        let replacement = NewEntry {
            date: "2025-08-02".to_owned(),
            category: "Salary".to_owned(),
            amount: 100_000,
            memo: "August".to_owned(),
            entry_type: "income".to_owned(),
        };

        update_entry(created.id, &replacement, &connection).unwrap();

        let got = get_entry(created.id, &connection).unwrap();
        assert_eq!(got.date, "2025-08-02");
        assert_eq!(got.category, "Salary");
        assert_eq!(got.amount, 100_000);
        assert_eq!(got.memo, "August");
        assert_eq!(got.entry_type, "income");
    }

    #[test]
    fn update_missing_entry_returns_error() {
        let connection = get_test_connection();

        let result = update_entry(999, &new_entry("2025-08-01", "Groceries", 1), &connection);

        assert_eq!(result, Err(Error::UpdateMissingEntry));
        assert_eq!(count_entries(&connection), Ok(0));
    }

    #[test]
    fn delete_removes_entry() {
        let connection = get_test_connection();
        let created = create_entry(new_entry("2025-08-01", "Groceries", 2000), &connection).unwrap();

        let rows_affected = delete_entry(created.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_entry(created.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_entry_matches_zero_rows() {
        let connection = get_test_connection();

        let rows_affected = delete_entry(999, &connection).unwrap();

        assert_eq!(rows_affected, 0);
    }

    #[test]
    fn sort_key_normalizes_query_values() {
        assert_eq!(SortKey::from_query(None), SortKey::Date);
        assert_eq!(SortKey::from_query(Some("date")), SortKey::Date);
        assert_eq!(SortKey::from_query(Some("category")), SortKey::Category);
        assert_eq!(SortKey::from_query(Some("nonsense")), SortKey::Date);
    }
}
