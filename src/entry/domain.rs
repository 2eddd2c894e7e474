//! Core entry domain types and form validation.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier for an entry.
pub type EntryId = i64;

/// A single ledger row: one dated income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The ID of the entry.
    pub id: EntryId,
    /// The calendar date the entry applies to, as entered.
    ///
    /// Stored as text and never parsed as a real calendar date, so sorting
    /// and month grouping follow whatever the user typed.
    pub date: String,
    /// What the money was for, e.g. "Groceries", "Salary".
    pub category: String,
    /// The amount in whole yen.
    pub amount: i64,
    /// A free-form note. May be empty.
    pub memo: String,
    /// The income/expense classification.
    ///
    /// Conventionally "income" or "expense", but any non-empty string is
    /// accepted.
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// The raw fields submitted by the entry form.
///
/// Everything arrives as text; [NewEntry::from_form] validates and converts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryFormData {
    /// The calendar date the entry applies to.
    #[serde(default)]
    pub date: String,
    /// What the money was for.
    #[serde(default)]
    pub category: String,
    /// The amount in whole yen, as typed.
    #[serde(default)]
    pub amount: String,
    /// A free-form note.
    #[serde(default)]
    pub memo: String,
    /// The income/expense classification.
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

impl From<&Entry> for EntryFormData {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date.clone(),
            category: entry.category.clone(),
            amount: entry.amount.to_string(),
            memo: entry.memo.clone(),
            entry_type: entry.entry_type.clone(),
        }
    }
}

/// A validated entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// The calendar date the entry applies to.
    pub date: String,
    /// What the money was for.
    pub category: String,
    /// The amount in whole yen.
    pub amount: i64,
    /// A free-form note. May be empty.
    pub memo: String,
    /// The income/expense classification.
    pub entry_type: String,
}

impl NewEntry {
    /// Validate raw form data.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::MissingRequiredField] if any of date, category, amount, or
    ///   type is empty (memo is optional),
    /// - or [Error::InvalidAmount] if the amount is not a digit-only string
    ///   that fits a 64-bit integer.
    pub fn from_form(form: &EntryFormData) -> Result<Self, Error> {
        if form.date.is_empty()
            || form.category.is_empty()
            || form.amount.is_empty()
            || form.entry_type.is_empty()
        {
            return Err(Error::MissingRequiredField);
        }

        Ok(Self {
            date: form.date.clone(),
            category: form.category.clone(),
            amount: parse_amount(&form.amount)?,
            memo: form.memo.clone(),
            entry_type: form.entry_type.clone(),
        })
    }
}

/// Parse a digit-only amount string into whole yen.
///
/// Signs, separators, and fractions are rejected, so the result is always
/// non-negative. Leading zeros are allowed.
fn parse_amount(raw: &str) -> Result<i64, Error> {
    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::InvalidAmount(raw.to_string()));
    }

    raw.parse()
        .map_err(|_| Error::InvalidAmount(raw.to_string()))
}
