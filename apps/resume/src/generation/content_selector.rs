//! Experience Budgeter — decides which jobs and projects make it onto the page.
//!
//! Jobs take the budget first; projects fill whatever capacity remains.

use crate::errors::ResumeError;
use crate::models::{Entry, EntryKind};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Result of experience selection. Both buckets keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceSelection {
    pub jobs: Vec<Entry>,
    pub projects: Vec<Entry>,
}

impl ExperienceSelection {
    /// Combined number of selected jobs and projects.
    pub fn total(&self) -> usize {
        self.jobs.len() + self.projects.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Applies the combined row budget across jobs and projects.
///
/// Algorithm:
/// 1. Partition `entries` by kind, preserving order
/// 2. Take the first `max_total` jobs
/// 3. Fill whatever budget remains with the first projects
/// 4. Strip skills from selected projects unless `display_project_skills`
///
/// A negative `max_total` is a configuration error, never clamped to zero.
pub fn select_experience(
    entries: &[Entry],
    max_total: i64,
    display_project_skills: bool,
) -> Result<ExperienceSelection, ResumeError> {
    let budget = usize::try_from(max_total).map_err(|_| {
        ResumeError::InvalidConfiguration(format!(
            "experience budget must be >= 0, got {max_total}"
        ))
    })?;

    let (job_candidates, project_candidates): (Vec<&Entry>, Vec<&Entry>) = entries
        .iter()
        .partition(|e| e.kind == EntryKind::Job);

    let jobs: Vec<Entry> = job_candidates.into_iter().take(budget).cloned().collect();

    let remaining = budget - jobs.len();
    let projects: Vec<Entry> = project_candidates
        .into_iter()
        .take(remaining)
        .map(|project| {
            let mut project = project.clone();
            if !display_project_skills {
                project.skills.clear();
            }
            project
        })
        .collect();

    Ok(ExperienceSelection { jobs, projects })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
