//! Event log segmentation into cycles and day-count samples

use crate::models::{Cycle, Event, EventKind};
use serde::{Deserialize, Serialize};

/// Long-gap splitting thresholds, in days
///
/// A gap between two recorded cycles longer than a normal cycle is usually a
/// cycle (or two) the user forgot to log, so it is split into equal parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapHeuristic {
    /// Gaps above this count as two cycles
    pub double_gap_days: i64,
    /// Gaps above this count as three cycles
    pub triple_gap_days: i64,
}

impl Default for GapHeuristic {
    fn default() -> Self {
        Self {
            double_gap_days: 50,
            triple_gap_days: 80,
        }
    }
}

impl GapHeuristic {
    /// How many cycles a gap of `days` is assumed to cover
    pub fn parts(&self, days: i64) -> i64 {
        if days > self.triple_gap_days {
            3
        } else if days > self.double_gap_days {
            2
        } else {
            1
        }
    }

    /// Split a gap into per-cycle samples (floor division, remainder dropped)
    pub fn split(&self, days: i64) -> impl Iterator<Item = i64> {
        let parts = self.parts(days);
        std::iter::repeat(days.div_euclid(parts)).take(parts as usize)
    }
}

/// Derives cycles and samples from a date-ordered event slice
pub struct CycleSegmenter<'a> {
    events: &'a [Event],
    heuristic: GapHeuristic,
}

impl<'a> CycleSegmenter<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        Self::with_heuristic(events, GapHeuristic::default())
    }

    pub fn with_heuristic(events: &'a [Event], heuristic: GapHeuristic) -> Self {
        Self { events, heuristic }
    }

    /// Pair each End with the most recent unconsumed Start.
    ///
    /// A Start followed by another Start is dropped; an End with no open
    /// Start is ignored.
    pub fn cycles(&self) -> Vec<Cycle> {
        let mut cycles = Vec::new();
        let mut open = None;
        for event in self.events {
            match event.kind {
                EventKind::Start => open = Some(event.date),
                EventKind::End => {
                    if let Some(start) = open.take() {
                        if event.date < start {
                            tracing::warn!(
                                "Cycle started {} ends before it starts ({})",
                                start,
                                event.date
                            );
                        }
                        cycles.push(Cycle {
                            start,
                            end: event.date,
                        });
                    }
                }
            }
        }
        cycles
    }

    /// Gaps between consecutive cycles, oldest first, long gaps split
    pub fn cycle_lengths(&self) -> Vec<i64> {
        self.cycles()
            .windows(2)
            .flat_map(|pair| {
                let gap = (pair[1].start - pair[0].end).num_days();
                self.heuristic.split(gap)
            })
            .collect()
    }

    /// Length of each cycle, oldest first
    pub fn period_lengths(&self) -> Vec<i64> {
        self.cycles().iter().map(Cycle::period_days).collect()
    }
}
