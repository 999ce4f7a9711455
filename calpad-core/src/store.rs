//! The in-memory event collection and its persisted snapshot.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{CalpadError, CalpadResult};
use crate::event::{Event, NewEvent};
use crate::storage::{EVENTS_KEY, KeyValueStore};

/// Default query window for [`EventStore::upcoming`], in days.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Default result cap for [`EventStore::upcoming`].
pub const UPCOMING_LIMIT: usize = 5;

/// Owns the full event collection for the process lifetime.
///
/// The store is the sole writer of the persisted snapshot: every successful
/// `add` rewrites the whole collection under [`EVENTS_KEY`]. Events are kept
/// in insertion order; queries that need a different order sort a view.
pub struct EventStore<S: KeyValueStore> {
    storage: S,
    events: Vec<Event>,
    next_id: u64,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Restore the collection from the storage collaborator.
    ///
    /// A missing key or a blob that fails to parse yields an empty
    /// collection; persistence reads are best-effort and never fail the
    /// caller. The id counter resumes past the highest restored id.
    pub fn load(storage: S) -> Self {
        let events: Vec<Event> = storage
            .get(EVENTS_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();

        let next_id = events.iter().map(|e| e.id).max().map_or(1, |id| id + 1);

        EventStore {
            storage,
            events,
            next_id,
        }
    }

    /// Validate and append a new event, then persist the full snapshot.
    ///
    /// A validation failure leaves the collection untouched and writes
    /// nothing.
    pub fn add(&mut self, candidate: NewEvent) -> CalpadResult<&Event> {
        let (date, time) = candidate.validate()?;

        let event = Event::new(
            self.next_id,
            candidate.title,
            date,
            time,
            candidate.description,
        );
        self.next_id += 1;
        self.events.push(event);
        self.persist()?;

        Ok(self.events.last().unwrap())
    }

    /// All events whose calendar date equals `date`, in storage order.
    ///
    /// Comparison is on (year, month, day) fields only, never on a full
    /// instant.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// The next [`UPCOMING_LIMIT`] events within [`UPCOMING_WINDOW_DAYS`]
    /// of `now`.
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&Event> {
        self.upcoming_within(now, UPCOMING_WINDOW_DAYS, UPCOMING_LIMIT)
    }

    /// Events with `datetime` in the half-open window
    /// `[now, now + window_days)`, ascending by `datetime`, capped at
    /// `limit`. Ties keep insertion order.
    pub fn upcoming_within(
        &self,
        now: NaiveDateTime,
        window_days: i64,
        limit: usize,
    ) -> Vec<&Event> {
        let end = now + Duration::days(window_days);

        let mut hits: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.datetime >= now && e.datetime < end)
            .collect();
        hits.sort_by_key(|e| e.datetime);
        hits.truncate(limit);
        hits
    }

    /// Full collection, insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The storage collaborator this store writes to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> CalpadResult<()> {
        let blob = serde_json::to_string(&self.events)
            .map_err(|e| CalpadError::Storage(e.to_string()))?;
        self.storage.set(EVENTS_KEY, &blob)
    }
}
