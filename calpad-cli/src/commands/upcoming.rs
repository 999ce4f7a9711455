use anyhow::Result;
use calpad_core::{EventStore, FileStore};
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::render_event;

pub fn run(store: &EventStore<FileStore>) -> Result<()> {
    let now = Local::now().naive_local();

    let events = store.upcoming(now);
    if events.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", render_event(event));
    }
    Ok(())
}
