//! Core data models for periodic
//!
//! The event log is the only persisted state. Cycles and samples are
//! derived from it on every run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which transition an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    End,
}

impl EventKind {
    /// Single-letter code used by the data file
    pub fn code(&self) -> char {
        match self {
            EventKind::Start => 's',
            EventKind::End => 'e',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(EventKind::Start),
            "e" => Some(EventKind::End),
            _ => None,
        }
    }

    /// Past-tense verb for confirmation messages ("started", "ended")
    pub fn past_tense(&self) -> &'static str {
        match self {
            EventKind::Start => "started",
            EventKind::End => "ended",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Start => write!(f, "start"),
            EventKind::End => write!(f, "end"),
        }
    }
}

/// A single recorded transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub date: NaiveDate,
}

impl Event {
    pub fn new(kind: EventKind, date: NaiveDate) -> Self {
        Self { kind, date }
    }

    pub fn start(date: NaiveDate) -> Self {
        Self::new(EventKind::Start, date)
    }

    pub fn end(date: NaiveDate) -> Self {
        Self::new(EventKind::End, date)
    }
}

/// A Start paired with the End that followed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Cycle {
    /// Days between start and end (may be negative for out-of-order data)
    pub fn period_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Date-ordered, append-only list of events
///
/// Events on the same date keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from events in any order
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut log = Self { events };
        log.sort();
        log
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Append an event, keeping the log sorted
    pub fn record(&mut self, event: Event) {
        self.events.push(event);
        self.sort();
    }

    /// Remove every event on `date`, returning how many were removed
    pub fn delete_on(&mut self, date: NaiveDate) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.date != date);
        before - self.events.len()
    }

    // sort_by_key is stable, so same-date events stay in insertion order
    fn sort(&mut self) {
        self.events.sort_by_key(|e| e.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_from_events_sorts_by_date() {
        let log = EventLog::from_events(vec![
            Event::end(d(2024, 3, 5)),
            Event::start(d(2024, 3, 1)),
        ]);
        assert_eq!(log.events()[0], Event::start(d(2024, 3, 1)));
        assert_eq!(log.last(), Some(&Event::end(d(2024, 3, 5))));
    }

    #[test]
    fn test_same_date_keeps_insertion_order() {
        let mut log = EventLog::new();
        log.record(Event::end(d(2024, 3, 1)));
        log.record(Event::start(d(2024, 3, 1)));
        log.record(Event::start(d(2024, 2, 1)));
        let kinds: Vec<_> = log.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Start, EventKind::End, EventKind::Start]);
    }

    #[test]
    fn test_delete_on_removes_all_matching() {
        let mut log = EventLog::from_events(vec![
            Event::start(d(2024, 1, 1)),
            Event::end(d(2024, 1, 1)),
            Event::end(d(2024, 1, 6)),
        ]);
        assert_eq!(log.delete_on(d(2024, 1, 1)), 2);
        assert_eq!(log.len(), 1);
        assert_eq!(log.delete_on(d(2024, 1, 1)), 0);
    }

    #[test]
    fn test_event_kind_codes() {
        assert_eq!(EventKind::from_code("s"), Some(EventKind::Start));
        assert_eq!(EventKind::from_code("e"), Some(EventKind::End));
        assert_eq!(EventKind::from_code("x"), None);
        assert_eq!(EventKind::Start.code(), 's');
        assert_eq!(EventKind::End.to_string(), "end");
    }

    #[test]
    fn test_cycle_period_days() {
        let cycle = Cycle {
            start: d(2024, 1, 1),
            end: d(2024, 1, 6),
        };
        assert_eq!(cycle.period_days(), 5);
    }
}
