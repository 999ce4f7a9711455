use anyhow::Result;
use calpad_core::{EventStore, FileStore, NewEvent};
use owo_colors::OwoColorize;

pub fn run(
    store: &mut EventStore<FileStore>,
    title: String,
    date: String,
    time: String,
    description: String,
) -> Result<()> {
    let event = store.add(NewEvent {
        title,
        date,
        time,
        description,
    })?;

    println!(
        "{}",
        format!(
            "Added: {} on {} at {}",
            event.title,
            event.date.format("%Y-%m-%d"),
            event.time.format("%H:%M")
        )
        .green()
    );
    Ok(())
}
