mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calpad_core::{EventStore, FileStore};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calpad")]
#[command(about = "A month calendar with a local event store")]
struct Cli {
    /// Path to the event store file (defaults to the platform data dir)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a month grid
    Show {
        /// Year to display (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to display, 1-12; 0 and 13 wrap into the adjacent year
        #[arg(short, long)]
        month: Option<i32>,
    },
    /// Add an event
    Add {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List events on a date
    On {
        /// Date to list (YYYY-MM-DD)
        date: String,
    },
    /// List the next few upcoming events
    Upcoming,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => default_store_path()?,
    };
    let mut store = EventStore::load(FileStore::new(path));

    match cli.command {
        Commands::Show { year, month } => commands::show::run(&store, year, month),
        Commands::Add {
            title,
            date,
            time,
            description,
        } => commands::add::run(&mut store, title, date, time, description),
        Commands::On { date } => commands::on::run(&store, &date),
        Commands::Upcoming => commands::upcoming::run(&store),
    }
}

fn default_store_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Unable to find a data directory for this platform"))?;
    Ok(base.join("calpad").join("events.json"))
}
