use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// Calendar month precision date. Ordered by year, then month.
///
/// Construction does not range-check `month`; the loader and the date-range
/// formatter reject months outside 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Job,
    Project,
}

/// One job or project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub title: String,
    /// Employer name. Always present for jobs; projects are named by `title`.
    pub company: Option<String>,
    /// Jobs only.
    pub location: Option<String>,
    pub start: YearMonth,
    /// `None` means ongoing.
    pub end: Option<YearMonth>,
    pub tags: BTreeSet<String>,
    pub skills: Vec<String>,
    pub details: Vec<String>,
}

impl Entry {
    pub fn has_any_tag(&self, requested: &BTreeSet<String>) -> bool {
        !self.tags.is_disjoint(requested)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub completed: YearMonth,
    pub gpa: Option<String>,
}

/// The loaded résumé. Built once per run and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub contact: Vec<String>,
    pub education: Vec<Education>,
    pub skill_groups: Vec<SkillGroup>,
    pub entries: Vec<Entry>,
}

/// Orders entries most recent `start` first.
///
/// `sort_by` is stable, so entries sharing a start month keep their input order.
pub fn sort_by_recency(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.start.cmp(&a.start));
}
