use anyhow::Result;
use calpad_core::{EventStore, FileStore, build_month_grid};
use chrono::{Datelike, Local};

use crate::render::render_month;

pub fn run(store: &EventStore<FileStore>, year: Option<i32>, month: Option<i32>) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or(today.month() as i32);

    let grid = build_month_grid(year, month, today, |date| {
        store.events_on(date).into_iter().cloned().collect()
    });

    print!("{}", render_month(&grid));
    Ok(())
}
