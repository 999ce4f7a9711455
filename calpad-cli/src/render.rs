//! Colored terminal rendering for calpad types.
//!
//! Everything renders to a `String` with owo_colors escapes; callers print.

use calpad_core::{DayCell, Event, MonthGrid};
use chrono::Month;
use owo_colors::OwoColorize;

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Render a month grid as a 6-row table with a heading and a per-day event
/// list underneath. Days with events carry a dot marker.
pub fn render_month(grid: &MonthGrid) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", month_heading(grid).bold()));
    out.push_str(&format!("{}\n", WEEKDAY_HEADER.dimmed()));

    for week in grid.cells.chunks(7) {
        for cell in week {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }

    let busy: Vec<&DayCell> = grid
        .cells
        .iter()
        .filter(|c| !c.other_month && !c.events.is_empty())
        .collect();
    if !busy.is_empty() {
        out.push('\n');
        for cell in busy {
            for event in &cell.events {
                out.push_str(&format!(
                    "  {}  {}\n",
                    cell.date.format("%Y-%m-%d").to_string().dimmed(),
                    event.title
                ));
            }
        }
    }

    out
}

/// Render a single event the way the sidebar list shows it.
pub fn render_event(event: &Event) -> String {
    let when = format!(
        "{} at {}",
        event.date.format("%a %b %d, %Y"),
        event.time.format("%H:%M")
    );
    let description = if event.description.is_empty() {
        "No description"
    } else {
        event.description.as_str()
    };

    format!(
        "{}\n  {}\n  {}",
        event.title.bold(),
        when.dimmed(),
        description
    )
}

fn month_heading(grid: &MonthGrid) -> String {
    let name = Month::try_from(grid.month as u8)
        .map(|m| m.name())
        .unwrap_or("?");
    format!("{} {}", name, grid.year)
}

fn render_cell(cell: &DayCell) -> String {
    let number = format!("{:>3}", cell.day);

    let number = if cell.is_today {
        number.bold().green().to_string()
    } else if cell.other_month {
        number.dimmed().to_string()
    } else {
        number
    };

    let marker = if cell.events.is_empty() {
        " ".to_string()
    } else {
        ".".yellow().to_string()
    };

    format!("{}{}", number, marker)
}
