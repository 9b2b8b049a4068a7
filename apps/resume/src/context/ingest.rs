//! Profile ingestion — reads the YAML data file into a validated `Profile`.
//!
//! Parsing happens in two passes. serde first reads the document into loose
//! `Raw*` shapes where every field is optional; `into_profile` then checks each
//! field and reports the first problem with its full path
//! (e.g. `experience[2].company`).

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::ResumeError;
use crate::models::{sort_by_recency, Education, Entry, EntryKind, Profile, SkillGroup, YearMonth};

// ────────────────────────────────────────────────────────────────────────────
// Raw document shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: Option<String>,
    #[serde(alias = "contact")]
    subheader_info: Option<RawLines>,
    #[serde(default)]
    education: RawSection<RawEducation>,
    #[serde(default)]
    skills: RawSection<RawSkillGroup>,
    #[serde(default)]
    experience: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLines {
    One(String),
    Many(Vec<String>),
    /// `{email: ..., phone: ...}`; only the values are shown.
    Labelled(serde_yaml::Mapping),
}

/// A section written either as a list of records or as a mapping keyed by
/// the record's name (`education: {BSc: {...}}`, `skills: {Languages: [...]}`).
///
/// `serde_yaml::Mapping` keeps document order, so keyed sections render in
/// the order they were written.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSection<T> {
    List(Vec<T>),
    Keyed(serde_yaml::Mapping),
}

impl<T> Default for RawSection<T> {
    fn default() -> Self {
        RawSection::List(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct RawEducation {
    degree: Option<String>,
    #[serde(alias = "address")]
    school: Option<String>,
    completed: Option<RawDate>,
    #[serde(alias = "GPA")]
    gpa: Option<serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawSkillGroup {
    group: Option<String>,
    #[serde(alias = "skills")]
    items: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    start: Option<RawDate>,
    end: Option<RawDate>,
    tags: Option<Vec<String>>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default, alias = "details")]
    detail: Vec<String>,
}

/// `"2020-06"`, `"2020-06-15"`, `"present"`, `{year, month}` or `{present: true}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDate {
    Parts { year: i32, month: u32 },
    Present { present: bool },
    Text(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Reads and validates the profile at `path`.
pub fn load_profile(path: &Path) -> Result<Profile, ResumeError> {
    let text = std::fs::read_to_string(path)?;
    let profile = parse_profile(&text)?;
    info!(
        "Loaded profile for {} ({} entries) from {}",
        profile.name,
        profile.entries.len(),
        path.display()
    );
    log_profile_summary(&profile);
    Ok(profile)
}

/// Parses a YAML document into a `Profile`, entries sorted most recent first.
pub fn parse_profile(yaml: &str) -> Result<Profile, ResumeError> {
    let raw: RawProfile = serde_yaml::from_str(yaml).map_err(|e| {
        let field = e
            .location()
            .map(|l| format!("document (line {}, column {})", l.line(), l.column()))
            .unwrap_or_else(|| "document".to_string());
        ResumeError::data_format(field, e.to_string())
    })?;
    into_profile(raw)
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn into_profile(raw: RawProfile) -> Result<Profile, ResumeError> {
    let name = required_text(raw.name, "name")?;

    let contact = match raw.subheader_info {
        Some(RawLines::One(line)) => vec![line],
        Some(RawLines::Many(lines)) => lines,
        Some(RawLines::Labelled(map)) => map
            .iter()
            .map(|(label, value)| -> Result<String, ResumeError> {
                let label = scalar_text(label, "contact")?;
                scalar_text(value, &format!("contact.{label}"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let education = match raw.education {
        RawSection::List(list) => list
            .into_iter()
            .enumerate()
            .map(|(i, edu)| into_education(&format!("education[{i}]"), edu))
            .collect::<Result<Vec<_>, _>>()?,
        RawSection::Keyed(map) => keyed_records::<RawEducation>(map, "education")?
            .into_iter()
            .map(|(path, degree, mut edu)| {
                edu.degree.get_or_insert(degree);
                into_education(&path, edu)
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let skill_groups = match raw.skills {
        RawSection::List(list) => list
            .into_iter()
            .enumerate()
            .map(|(i, group)| into_skill_group(&format!("skills[{i}]"), group))
            .collect::<Result<Vec<_>, _>>()?,
        RawSection::Keyed(map) => keyed_records::<Vec<String>>(map, "skills")?
            .into_iter()
            .map(|(path, name, items)| {
                into_skill_group(
                    &path,
                    RawSkillGroup {
                        group: Some(name),
                        items: Some(items),
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut entries = raw
        .experience
        .into_iter()
        .enumerate()
        .map(|(i, entry)| into_entry(i, entry))
        .collect::<Result<Vec<_>, _>>()?;
    sort_by_recency(&mut entries);

    Ok(Profile {
        name,
        contact,
        education,
        skill_groups,
        entries,
    })
}

/// Splits a keyed section into `(field path, key, record)` triples in document order.
fn keyed_records<T: serde::de::DeserializeOwned>(
    map: serde_yaml::Mapping,
    section: &str,
) -> Result<Vec<(String, String, T)>, ResumeError> {
    map.into_iter()
        .map(|(key, value)| -> Result<(String, String, T), ResumeError> {
            let key = scalar_text(&key, section)?;
            let path = format!("{section}.{key}");
            let record = serde_yaml::from_value(value)
                .map_err(|e| ResumeError::data_format(path.clone(), e.to_string()))?;
            Ok((path, key, record))
        })
        .collect()
}

fn into_skill_group(path: &str, raw: RawSkillGroup) -> Result<SkillGroup, ResumeError> {
    Ok(SkillGroup {
        name: required_text(raw.group, &format!("{path}.group"))?,
        items: raw.items.ok_or_else(|| {
            ResumeError::data_format(format!("{path}.items"), "missing required field")
        })?,
    })
}

fn into_education(path: &str, raw: RawEducation) -> Result<Education, ResumeError> {
    let degree = required_text(raw.degree, &format!("{path}.degree"))?;
    let school = required_text(raw.school, &format!("{path}.school"))?;
    let completed = match raw.completed {
        Some(date) => parse_date(date, &format!("{path}.completed"))
            .map_err(|e| e.with_subject(&degree))?
            .ok_or_else(|| {
                ResumeError::data_format(format!("{path}.completed"), "must be a calendar date")
            })?,
        None => {
            return Err(ResumeError::data_format(
                format!("{path}.completed"),
                "missing required field",
            ))
        }
    };
    let gpa = match raw.gpa {
        None | Some(serde_yaml::Value::Null) => None,
        Some(value) => Some(scalar_text(&value, &format!("{path}.gpa"))?),
    };

    Ok(Education {
        degree,
        school,
        completed,
        gpa,
    })
}

fn into_entry(index: usize, raw: RawEntry) -> Result<Entry, ResumeError> {
    let path = format!("experience[{index}]");

    let kind = match raw.kind.as_deref().map(str::trim) {
        Some(k) if k.eq_ignore_ascii_case("job") => EntryKind::Job,
        Some(k) if k.eq_ignore_ascii_case("project") => EntryKind::Project,
        Some(other) => {
            return Err(ResumeError::data_format(
                format!("{path}.type"),
                format!("expected 'job' or 'project', got '{other}'"),
            ))
        }
        None => {
            return Err(ResumeError::data_format(
                format!("{path}.type"),
                "missing required field",
            ))
        }
    };

    let title = required_text(raw.title, &format!("{path}.title"))?;

    let (company, location) = match kind {
        EntryKind::Job => (
            Some(required_text(raw.company, &format!("{path}.company"))?),
            raw.location,
        ),
        EntryKind::Project => (None, None),
    };

    let start = match raw.start {
        Some(date) => parse_date(date, &format!("{path}.start"))
            .map_err(|e| e.with_subject(&title))?
            .ok_or_else(|| {
                ResumeError::data_format(format!("{path}.start"), "start cannot be 'present'")
            })?,
        None => {
            return Err(ResumeError::data_format(
                format!("{path}.start"),
                "missing required field",
            ))
        }
    };

    let end = match raw.end {
        Some(date) => {
            parse_date(date, &format!("{path}.end")).map_err(|e| e.with_subject(&title))?
        }
        None => None,
    };

    if let Some(end) = end {
        if end < start {
            return Err(ResumeError::InvalidDate {
                subject: Some(format!("{title}: end precedes start")),
                year: end.year,
                month: end.month,
            });
        }
    }

    let tags: std::collections::BTreeSet<String> = raw
        .tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if tags.is_empty() {
        return Err(ResumeError::data_format(
            format!("{path}.tags"),
            "at least one tag is required",
        ));
    }

    Ok(Entry {
        kind,
        title,
        company,
        location,
        start,
        end,
        tags,
        skills: raw.skills,
        details: raw.detail,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ResumeError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(ResumeError::data_format(field, "must not be empty")),
        None => Err(ResumeError::data_format(field, "missing required field")),
    }
}

/// Text of a YAML string or number, as written.
fn scalar_text(value: &serde_yaml::Value, field: &str) -> Result<String, ResumeError> {
    match value {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        _ => Err(ResumeError::data_format(
            field,
            "expected a number or string",
        )),
    }
}

/// Resolves a raw date. `Ok(None)` means "present".
///
/// Month range is checked here so a bad month surfaces as `InvalidDate`
/// rather than a generic parse failure.
fn parse_date(raw: RawDate, field: &str) -> Result<Option<YearMonth>, ResumeError> {
    let (year, month, day) = match raw {
        RawDate::Parts { year, month } => (year, month, None),
        RawDate::Present { present: true } => return Ok(None),
        RawDate::Present { present: false } => {
            return Err(ResumeError::data_format(
                field,
                "'present: false' is not a date",
            ))
        }
        RawDate::Text(text) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("present") {
                return Ok(None);
            }
            split_date_text(text).ok_or_else(|| {
                ResumeError::data_format(
                    field,
                    format!("expected YYYY-MM or YYYY-MM-DD, got '{text}'"),
                )
            })?
        }
    };

    if !(1..=12).contains(&month) {
        return Err(ResumeError::InvalidDate {
            subject: None,
            year,
            month,
        });
    }

    if let Some(day) = day {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ResumeError::data_format(field, format!("{year}-{month:02}-{day:02} is not a real date"))
        })?;
        return Ok(Some(YearMonth::from(date)));
    }

    Ok(Some(YearMonth::new(year, month)))
}

fn split_date_text(text: &str) -> Option<(i32, u32, Option<u32>)> {
    let mut parts = text.split(['-', '/']);
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = match parts.next() {
        Some(d) => Some(d.parse().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

fn log_profile_summary(profile: &Profile) {
    debug!("  contact: {:?}", profile.contact);
    for edu in &profile.education {
        debug!(
            "  education: {} @ {} ({}-{:02}) gpa={:?}",
            edu.degree, edu.school, edu.completed.year, edu.completed.month, edu.gpa
        );
    }
    for group in &profile.skill_groups {
        debug!("  skills {}: {:?}", group.name, group.items);
    }
    for entry in &profile.entries {
        debug!(
            "  {:?} '{}' {}-{:02} tags={:?}",
            entry.kind, entry.title, entry.start.year, entry.start.month, entry.tags
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../fixtures/sample.yaml");

    fn expect_data_format(yaml: &str, expected_field: &str) {
        match parse_profile(yaml) {
            Err(ResumeError::DataFormat { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected DataFormat on {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_fixture_loads() {
        let profile = parse_profile(SAMPLE).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.contact.len(), 3);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].gpa.as_deref(), Some("3.9"));
        assert_eq!(profile.skill_groups[0].name, "Languages");
        assert!(!profile.entries.is_empty());
    }

    #[test]
    fn test_entries_sorted_most_recent_first() {
        let profile = parse_profile(SAMPLE).unwrap();
        let starts: Vec<_> = profile.entries.iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_date_forms() {
        let yaml = r#"
name: X
experience:
  - type: Job
    title: A
    company: C
    start: 2020-06-15
    end: present
    tags: [t]
  - type: project
    title: B
    start: {year: 2019, month: 2}
    end: {present: true}
    tags: [t]
  - type: project
    title: D
    start: "2018/03"
    end: 2018-09
    tags: [t]
"#;
        let profile = parse_profile(yaml).unwrap();
        assert_eq!(profile.entries[0].start, YearMonth::new(2020, 6));
        assert_eq!(profile.entries[0].end, None);
        assert_eq!(profile.entries[0].kind, EntryKind::Job);
        assert_eq!(profile.entries[1].end, None);
        assert_eq!(profile.entries[2].end, Some(YearMonth::new(2018, 9)));
    }

    #[test]
    fn test_keyed_sections_load_in_document_order() {
        let yaml = r#"
name: X
subheader_info:
  email: x@example.com
  phone: 555-0100
education:
  MSc:
    address: Tech
    completed: 2017-06
  BSc:
    address: U
    completed: 2015-05
    GPA: 3.9
skills:
  Languages: [Rust, Go]
  Tools: [Git]
experience: []
"#;
        let profile = parse_profile(yaml).unwrap();
        assert_eq!(profile.contact, vec!["x@example.com", "555-0100"]);

        let degrees: Vec<_> = profile.education.iter().map(|e| e.degree.as_str()).collect();
        assert_eq!(degrees, vec!["MSc", "BSc"]);
        assert_eq!(profile.education[1].school, "U");
        assert_eq!(profile.education[1].completed, YearMonth::new(2015, 5));
        assert_eq!(profile.education[1].gpa.as_deref(), Some("3.9"));

        let groups: Vec<_> = profile.skill_groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(groups, vec!["Languages", "Tools"]);
        assert_eq!(profile.skill_groups[0].items, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_keyed_education_reports_path_by_degree() {
        let yaml = "name: X\neducation:\n  BSc:\n    completed: 2015-05\n";
        expect_data_format(yaml, "education.BSc.school");
    }

    #[test]
    fn test_keyed_skills_reject_non_list() {
        let yaml = "name: X\nskills:\n  Languages: {a: 1}\n";
        expect_data_format(yaml, "skills.Languages");
    }

    #[test]
    fn test_contact_single_line() {
        let profile = parse_profile("name: X\ncontact: ada@example.com\n").unwrap();
        assert_eq!(profile.contact, vec!["ada@example.com"]);
    }

    #[test]
    fn test_missing_name() {
        expect_data_format("contact: [a]\n", "name");
    }

    #[test]
    fn test_missing_company_on_job() {
        let yaml = "name: X\nexperience:\n  - type: job\n    title: A\n    start: 2020-01\n    tags: [t]\n";
        expect_data_format(yaml, "experience[0].company");
    }

    #[test]
    fn test_project_needs_no_company_and_drops_location() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    location: Mars\n    start: 2020-01\n    tags: [t]\n";
        let profile = parse_profile(yaml).unwrap();
        assert_eq!(profile.entries[0].company, None);
        assert_eq!(profile.entries[0].location, None);
    }

    #[test]
    fn test_empty_tags_rejected() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    start: 2020-01\n    tags: []\n";
        expect_data_format(yaml, "experience[0].tags");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let yaml = "name: X\nexperience:\n  - type: hobby\n    title: A\n    start: 2020-01\n    tags: [t]\n";
        expect_data_format(yaml, "experience[0].type");
    }

    #[test]
    fn test_missing_start() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    tags: [t]\n";
        expect_data_format(yaml, "experience[0].start");
    }

    #[test]
    fn test_malformed_date_text() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    start: June 2020\n    tags: [t]\n";
        expect_data_format(yaml, "experience[0].start");
    }

    #[test]
    fn test_month_out_of_range_names_entry() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: Compiler\n    start: 2020-13\n    tags: [t]\n";
        match parse_profile(yaml) {
            Err(ResumeError::InvalidDate {
                subject, month, ..
            }) => {
                assert_eq!(subject.as_deref(), Some("Compiler"));
                assert_eq!(month, 13);
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_education_month_out_of_range_names_degree() {
        let yaml = "name: X\neducation:\n  - degree: BSc\n    school: U\n    completed: {year: 2015, month: 0}\n";
        match parse_profile(yaml) {
            Err(ResumeError::InvalidDate { subject, .. }) => {
                assert_eq!(subject.as_deref(), Some("BSc"))
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_end_before_start_rejected() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    start: 2020-05\n    end: 2019-01\n    tags: [t]\n";
        assert!(matches!(
            parse_profile(yaml),
            Err(ResumeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_impossible_day_is_data_format() {
        let yaml = "name: X\nexperience:\n  - type: project\n    title: A\n    start: 2021-02-30\n    tags: [t]\n";
        expect_data_format(yaml, "experience[0].start");
    }

    #[test]
    fn test_wrong_shape_is_data_format() {
        assert!(matches!(
            parse_profile("name: [not, a, string]\n"),
            Err(ResumeError::DataFormat { .. })
        ));
    }

    #[test]
    fn test_education_missing_completed() {
        let yaml = "name: X\neducation:\n  - degree: BSc\n    school: U\n";
        expect_data_format(yaml, "education[0].completed");
    }

    #[test]
    fn test_load_profile_missing_file_is_io_error() {
        let err = load_profile(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ResumeError::Io(_)));
    }
}
