//! Month-grid computation.
//!
//! A month view is always 42 cells (6 rows of 7): the trailing days of the
//! previous month, the whole displayed month, then enough leading days of
//! the next month to fill the grid. The fixed size keeps rendering a
//! uniform table regardless of month length or starting weekday.

use chrono::{Datelike, Duration, NaiveDate};

use crate::date::{days_in_month, first_of_month, first_weekday, normalize_year_month};
use crate::event::Event;

/// Cells per month view: 6 rows of 7 days.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone)]
pub struct DayCell {
    /// Fully resolved calendar date of this cell.
    pub date: NaiveDate,
    /// Day-of-month number shown in the cell.
    pub day: u32,
    /// Belongs to the previous or next month, not the displayed one.
    pub other_month: bool,
    /// Calendar-date equality with the caller's `today`; never an instant
    /// comparison.
    pub is_today: bool,
    /// Events on this cell's date, in storage order.
    pub events: Vec<Event>,
}

/// A computed month view.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    /// Displayed year, after normalization.
    pub year: i32,
    /// Displayed month, 1-12, after normalization.
    pub month: u32,
    /// Exactly [`GRID_CELLS`] cells, row by row.
    pub cells: Vec<DayCell>,
}

/// Build the 42-cell grid for `(year, month)`.
///
/// `month` is 1-based and may lie outside `1..=12`; out-of-range values fold
/// into the adjacent year, so callers navigate by passing `month - 1` or
/// `month + 1` as-is. `events_for_date` supplies the events for each
/// resolved cell date; `today` comes from the caller's clock.
pub fn build_month_grid<F>(year: i32, month: i32, today: NaiveDate, events_for_date: F) -> MonthGrid
where
    F: Fn(NaiveDate) -> Vec<Event>,
{
    let (year, month) = normalize_year_month(year, month);

    let first = first_of_month(year, month as i32);
    let lead = first_weekday(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    // Trailing days of the previous month.
    for offset in 0..lead {
        let date = first - Duration::days((lead - offset) as i64);
        cells.push(make_cell(date, true, today, &events_for_date));
    }

    // The displayed month.
    for day in 0..days {
        let date = first + Duration::days(day as i64);
        cells.push(make_cell(date, false, today, &events_for_date));
    }

    // Leading days of the next month, padding to the fixed grid size. The
    // clamp keeps this total-safe even for inputs no real calendar produces.
    let padding = GRID_CELLS.saturating_sub(cells.len());
    let next_first = first_of_month(year, month as i32 + 1);
    for day in 0..padding {
        let date = next_first + Duration::days(day as i64);
        cells.push(make_cell(date, true, today, &events_for_date));
    }

    MonthGrid { year, month, cells }
}

fn make_cell<F>(date: NaiveDate, other_month: bool, today: NaiveDate, events_for_date: &F) -> DayCell
where
    F: Fn(NaiveDate) -> Vec<Event>,
{
    DayCell {
        date,
        day: date.day(),
        other_month,
        is_today: date == today,
        events: events_for_date(date),
    }
}
