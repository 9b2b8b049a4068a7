//! JSON backend — the view records, pretty-printed.
//! Handy for feeding another typesetter or diffing selections between runs.

use crate::errors::ResumeError;
use crate::models::ResumeView;
use crate::render::ResumeRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ResumeRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, view: &ResumeView) -> Result<String, ResumeError> {
        let mut text = serde_json::to_string_pretty(view)
            .map_err(|e| ResumeError::Render(format!("failed to serialize view: {e}")))?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::make_view;
    use serde_json::Value;

    #[test]
    fn test_renders_all_sections() {
        let text = JsonRenderer.render(&make_view()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["header"]["name"], "Ada Lovelace");
        assert_eq!(value["jobs"][0]["date_range"], "March 2022 - Present");
        assert_eq!(value["skills"][0]["items"][1], "C#");
        assert_eq!(value["education"][0]["gpa"], "3.9");
    }

    #[test]
    fn test_hidden_project_skills_are_absent() {
        let text = JsonRenderer.render(&make_view()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(
            value["projects"][0].get("skills").is_none(),
            "stripped project skills must not appear as a key"
        );
    }

    #[test]
    fn test_round_trips_into_view() {
        let view = make_view();
        let text = JsonRenderer.render(&view).unwrap();
        let back: ResumeView = serde_json::from_str(&text).unwrap();
        assert_eq!(back, view);
    }
}
