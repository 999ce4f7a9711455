//! Core types for the calpad event calendar.
//!
//! Two leaves and their collaborators:
//! - `grid` derives the fixed 42-cell month view from a year/month pair
//! - `store` owns the event collection and its persisted snapshot
//!
//! Wall-clock reads (`today`, `now`) always come from the caller; nothing in
//! this crate touches the system clock.

pub mod date;
pub mod error;
pub mod event;
pub mod grid;
pub mod storage;
pub mod store;

pub use error::{CalpadError, CalpadResult};
pub use event::{Event, NewEvent};
pub use grid::{DayCell, GRID_CELLS, MonthGrid, build_month_grid};
pub use storage::{EVENTS_KEY, FileStore, KeyValueStore, MemoryStore};
pub use store::{EventStore, UPCOMING_LIMIT, UPCOMING_WINDOW_DAYS};
