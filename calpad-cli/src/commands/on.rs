use anyhow::{Context, Result};
use calpad_core::{EventStore, FileStore};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::render_event;

pub fn run(store: &EventStore<FileStore>, date: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", date))?;

    let events = store.events_on(date);
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", render_event(event));
    }
    Ok(())
}
