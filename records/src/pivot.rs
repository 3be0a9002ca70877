//! Month pivot: per-teacher sparse class counts reshaped into a dense
//! day-by-day grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/monthly-class-count` returns one record per teacher, each holding only
//! the days that teacher logged. The running-month screen needs one row per
//! calendar day, one column group per teacher and one column per class-range
//! bucket, plus footer rows with the backend's monthly totals.
//!
//! DESIGN
//! ======
//! The pivot is rebuilt from scratch for every month/year selection or
//! refresh and is never patched in place. Dates are compared on the part of
//! the backend string before `T`, so both `2024-02-01` and
//! `2024-02-01T00:00:00.000Z` match the `2024-02-01` row.
//!
//! When a teacher has several details for the same day the first one in
//! response order wins; [`duplicate_dates`] reports such days so the screen
//! can flag them.

#[cfg(test)]
#[path = "pivot_test.rs"]
mod pivot_test;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::types::{BucketTotals, ClassCount, ClassRange, EmployeeClassCount};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Error returned when a month/year selection cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PivotError {
    #[error("month {0} is out of range (expected 0-11)")]
    MonthOutOfRange(u32),
    #[error("year {0} is not a representable calendar year")]
    InvalidYear(i32),
}

/// One teacher column group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PivotColumn {
    pub employee_id: String,
    pub employee_name: String,
}

/// One calendar day; `cells[i]` belongs to `columns[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PivotRow {
    pub date: String,
    pub day: u32,
    pub cells: Vec<ClassCount>,
}

/// Footer rows copied straight from the backend's running totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PivotFooter {
    pub classes_taken: Vec<BucketTotals>,
    pub income: Vec<BucketTotals>,
}

/// Dense month grid ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthPivot {
    pub month0: u32,
    pub year: i32,
    pub columns: Vec<PivotColumn>,
    pub rows: Vec<PivotRow>,
    pub footer: PivotFooter,
}

impl MonthPivot {
    /// Heading such as `February 2024`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }

    /// Count for a (row, column, bucket) triple; zero when out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize, range: ClassRange) -> u32 {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map_or(0, |count| count.get(range))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Number of days in a zero-based month.
///
/// # Errors
///
/// Returns [`PivotError`] for months outside `0..=11` or years chrono cannot
/// represent.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, PivotError> {
    if month0 > 11 {
        return Err(PivotError::MonthOutOfRange(month0));
    }
    let (next_year, next_month) = if month0 == 11 {
        (year.checked_add(1).ok_or(PivotError::InvalidYear(year))?, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(PivotError::InvalidYear(year))?;
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(PivotError::InvalidYear(year))?;
    let last = first_of_next.pred_opt().ok_or(PivotError::InvalidYear(year))?;
    Ok(last.day())
}

/// Every date of the month as `YYYY-MM-DD`, ascending.
///
/// # Errors
///
/// Same conditions as [`days_in_month`].
pub fn month_dates(year: i32, month0: u32) -> Result<Vec<String>, PivotError> {
    let days = days_in_month(year, month0)?;
    Ok((1..=days)
        .map(|day| format!("{year:04}-{:02}-{day:02}", month0 + 1))
        .collect())
}

/// Date part of a backend date string (everything before `T`).
#[must_use]
pub fn date_key(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw).trim()
}

/// Display name of a zero-based month; empty for out-of-range input.
#[must_use]
pub fn month_name(month0: u32) -> &'static str {
    usize::try_from(month0)
        .ok()
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or("")
}

/// Zero-based month and year of a Unix timestamp (UTC).
#[must_use]
pub fn month_year_at(unix_secs: i64) -> Option<(u32, i32)> {
    let at = chrono::DateTime::from_timestamp(unix_secs, 0)?;
    Some((at.month0(), at.year()))
}

/// Cell text: zero renders as the `-` placeholder.
#[must_use]
pub fn format_cell(count: u32) -> String {
    if count == 0 { "-".to_owned() } else { count.to_string() }
}

/// Build the dense grid for one month.
///
/// # Errors
///
/// Returns [`PivotError`] when the month/year selection is invalid. Missing
/// or malformed detail dates never fail; they simply never match a row.
pub fn build_month_pivot(month0: u32, year: i32, data: &[EmployeeClassCount]) -> Result<MonthPivot, PivotError> {
    let dates = month_dates(year, month0)?;

    let columns = data
        .iter()
        .map(|record| PivotColumn {
            employee_id: record.employee.id.clone(),
            employee_name: record.employee.name.clone(),
        })
        .collect::<Vec<_>>();

    let lookups = data.iter().map(first_detail_by_date).collect::<Vec<_>>();

    let rows = dates
        .into_iter()
        .zip(1_u32..)
        .map(|(date, day)| {
            let cells = lookups
                .iter()
                .map(|lookup| lookup.get(date.as_str()).copied().unwrap_or_default())
                .collect();
            PivotRow { date, day, cells }
        })
        .collect();

    let footer = PivotFooter {
        classes_taken: data.iter().map(|r| r.total_class_taken_this_month_so_far).collect(),
        income: data.iter().map(|r| r.total_income_this_month_so_far).collect(),
    };

    Ok(MonthPivot { month0, year, columns, rows, footer })
}

/// Dates for which a record carries more than one detail entry.
#[must_use]
pub fn duplicate_dates(record: &EmployeeClassCount) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for detail in &record.class_count_details {
        *seen.entry(date_key(&detail.date)).or_default() += 1;
    }
    let mut dupes = seen
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(date, _)| date.to_owned())
        .collect::<Vec<_>>();
    dupes.sort();
    dupes
}

fn first_detail_by_date(record: &EmployeeClassCount) -> HashMap<&str, ClassCount> {
    let mut by_date = HashMap::with_capacity(record.class_count_details.len());
    for detail in &record.class_count_details {
        by_date.entry(date_key(&detail.date)).or_insert(detail.class_count);
    }
    by_date
}
