//! Selection trace events.
//!
//! The selection core never logs on its own. Callers hand it a
//! `SelectionObserver` and decide where the events go.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Emitted after the tag filter ran.
    EntriesFiltered {
        requested_tags: Vec<String>,
        kept: Vec<String>,
        dropped: usize,
    },
    /// Emitted after the experience budget was applied.
    ExperienceSelected {
        budget: i64,
        jobs: Vec<String>,
        projects: Vec<String>,
        /// Filtered entries that did not fit the budget.
        cut: usize,
    },
    /// Emitted once per skill group that lost items to truncation.
    SkillsTruncated {
        group: String,
        shown: usize,
        hidden: usize,
    },
}

pub trait SelectionObserver {
    fn on_event(&mut self, event: &SelectionEvent);
}

/// Discards every event.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct NoopObserver;

#[cfg(test)]
impl SelectionObserver for NoopObserver {
    fn on_event(&mut self, _event: &SelectionEvent) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_event(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::EntriesFiltered {
                requested_tags,
                kept,
                dropped,
            } => debug!(
                ?requested_tags,
                ?kept,
                dropped,
                "entries after tag filter"
            ),
            SelectionEvent::ExperienceSelected {
                budget,
                jobs,
                projects,
                cut,
            } => debug!(budget, ?jobs, ?projects, cut, "experience selection result"),
            SelectionEvent::SkillsTruncated {
                group,
                shown,
                hidden,
            } => debug!(group = %group, shown, hidden, "skill group truncated"),
        }
    }
}

/// Keeps every event in memory. Used by tests to assert on the trace.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<SelectionEvent>,
}

#[cfg(test)]
impl SelectionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SelectionEvent) {
        self.events.push(event.clone());
    }
}
