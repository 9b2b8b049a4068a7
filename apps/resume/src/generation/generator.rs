//! Résumé view generation — runs the selection pipeline over a loaded profile.
//!
//! Flow: filter_by_tags → select_experience → truncate_skills →
//!       format dates → ResumeView.
//!
//! Either a complete view comes back or an error does; nothing partial is
//! ever handed to a renderer.

use crate::config::SelectionConfig;
use crate::errors::ResumeError;
use crate::generation::content_selector::select_experience;
use crate::generation::date_range::{format_date_range, format_month_year};
use crate::generation::observer::{SelectionEvent, SelectionObserver};
use crate::generation::skills::truncate_skills;
use crate::generation::tag_filter::filter_by_tags;
use crate::models::{
    EducationRecord, Entry, HeaderRecord, JobRecord, Profile, ProjectRecord, ResumeView,
    SkillRecord,
};

/// Builds the render-ready view of `profile` under `config`.
///
/// `profile.entries` are expected to be sorted most recent first already
/// (the loader does this).
pub fn build_resume_view(
    profile: &Profile,
    config: &SelectionConfig,
    observer: &mut dyn SelectionObserver,
) -> Result<ResumeView, ResumeError> {
    config.validate()?;

    // Step 1: Tag filter
    let filtered = filter_by_tags(&profile.entries, &config.tags);
    observer.on_event(&SelectionEvent::EntriesFiltered {
        requested_tags: config.tags.iter().cloned().collect(),
        kept: titles(&filtered),
        dropped: profile.entries.len() - filtered.len(),
    });

    // Step 2: Experience budget
    let selection = select_experience(
        &filtered,
        config.max_experience,
        config.display_project_skills,
    )?;
    observer.on_event(&SelectionEvent::ExperienceSelected {
        budget: config.max_experience,
        jobs: titles(&selection.jobs),
        projects: titles(&selection.projects),
        cut: filtered.len() - selection.total(),
    });

    // Step 3: Skill truncation
    let skill_groups = truncate_skills(&profile.skill_groups, config.max_skills);
    for (before, after) in profile.skill_groups.iter().zip(&skill_groups) {
        let hidden = before.items.len() - after.items.len();
        if hidden > 0 {
            observer.on_event(&SelectionEvent::SkillsTruncated {
                group: after.name.clone(),
                shown: after.items.len(),
                hidden,
            });
        }
    }

    // Step 4: Records with formatted dates
    let education = profile
        .education
        .iter()
        .map(|edu| -> Result<EducationRecord, ResumeError> {
            Ok(EducationRecord {
                degree: edu.degree.clone(),
                school: edu.school.clone(),
                completed: format_month_year(edu.completed)
                    .map_err(|e| e.with_subject(&edu.degree))?,
                gpa: edu.gpa.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let jobs = selection
        .jobs
        .iter()
        .map(job_record)
        .collect::<Result<Vec<_>, _>>()?;

    let projects = selection
        .projects
        .iter()
        .map(|p| project_record(p, config.display_project_skills))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResumeView {
        header: HeaderRecord {
            name: profile.name.clone(),
            contact: profile.contact.clone(),
        },
        education,
        skills: skill_groups
            .into_iter()
            .map(|g| SkillRecord {
                group: g.name,
                items: g.items,
            })
            .collect(),
        jobs,
        projects,
    })
}

fn job_record(entry: &Entry) -> Result<JobRecord, ResumeError> {
    Ok(JobRecord {
        title: entry.title.clone(),
        company: entry.company.clone().unwrap_or_default(),
        location: entry.location.clone(),
        date_range: entry_date_range(entry)?,
        skills: entry.skills.clone(),
        details: entry.details.clone(),
    })
}

fn project_record(entry: &Entry, display_skills: bool) -> Result<ProjectRecord, ResumeError> {
    Ok(ProjectRecord {
        title: entry.title.clone(),
        date_range: entry_date_range(entry)?,
        skills: display_skills.then(|| entry.skills.clone()),
        details: entry.details.clone(),
    })
}

fn entry_date_range(entry: &Entry) -> Result<String, ResumeError> {
    format_date_range(entry.start, entry.end).map_err(|e| e.with_subject(&entry.title))
}

fn titles(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.title.clone()).collect()
}
