use thiserror::Error;

/// Application-level error type.
/// Every fatal condition in a run maps to one of these variants; `main` prints
/// `code()` alongside the message and exits non-zero.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Data format error in '{field}': {reason}")]
    DataFormat { field: String, reason: String },

    #[error("Invalid date {year}-{month:02}{}", subject_suffix(.subject))]
    InvalidDate {
        subject: Option<String>,
        year: i32,
        month: u32,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn subject_suffix(subject: &Option<String>) -> String {
    match subject {
        Some(s) => format!(" (in '{s}')"),
        None => String::new(),
    }
}

impl ResumeError {
    pub fn data_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ResumeError::DataFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Attaches the entry/record title to an `InvalidDate` that was raised
    /// without one. Other variants pass through untouched.
    pub fn with_subject(self, title: &str) -> Self {
        match self {
            ResumeError::InvalidDate {
                subject: None,
                year,
                month,
            } => ResumeError::InvalidDate {
                subject: Some(title.to_string()),
                year,
                month,
            },
            other => other,
        }
    }

    /// Stable kind code printed on failure.
    pub fn code(&self) -> &'static str {
        match self {
            ResumeError::DataFormat { .. } => "DATA_FORMAT_ERROR",
            ResumeError::InvalidDate { .. } => "INVALID_DATE",
            ResumeError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            ResumeError::Render(_) => "RENDER_ERROR",
            ResumeError::Io(_) => "IO_ERROR",
        }
    }

    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ResumeError::InvalidConfiguration(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message_names_subject() {
        let err = ResumeError::InvalidDate {
            subject: None,
            year: 2020,
            month: 13,
        }
        .with_subject("Backend Engineer");
        assert_eq!(
            err.to_string(),
            "Invalid date 2020-13 (in 'Backend Engineer')"
        );
        assert_eq!(err.code(), "INVALID_DATE");
    }

    #[test]
    fn test_with_subject_keeps_existing_subject() {
        let err = ResumeError::InvalidDate {
            subject: Some("First".to_string()),
            year: 2020,
            month: 0,
        }
        .with_subject("Second");
        assert!(err.to_string().contains("First"));
    }

    #[test]
    fn test_data_format_message_names_field() {
        let err = ResumeError::data_format("experience[2].company", "missing required field");
        assert!(err.to_string().contains("experience[2].company"));
        assert_eq!(err.code(), "DATA_FORMAT_ERROR");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_configuration_error_exit_code() {
        let err = ResumeError::InvalidConfiguration("max_experience must be >= 0".to_string());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "INVALID_CONFIGURATION");
    }
}
