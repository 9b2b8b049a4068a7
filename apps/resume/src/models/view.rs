//! Render-ready records handed to a `ResumeRenderer`.
//!
//! Everything here is plain text: dates are already formatted, lists are
//! already filtered and capped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub name: String,
    pub contact: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub school: String,
    /// e.g. "May 2015"
    pub completed: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub date_range: String,
    pub skills: Vec<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub date_range: String,
    /// `None` when project skills are not displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    pub details: Vec<String>,
}

/// Complete output of one selection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeView {
    pub header: HeaderRecord,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<SkillRecord>,
    pub jobs: Vec<JobRecord>,
    pub projects: Vec<ProjectRecord>,
}
