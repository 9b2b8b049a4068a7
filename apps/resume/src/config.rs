use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::errors::ResumeError;
use crate::render::renderer_for;

pub const DEFAULT_MAX_EXPERIENCE: i64 = 7;
pub const DEFAULT_MAX_SKILLS: i64 = 7;

/// Output encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Latex,
    Json,
}

/// Generate a résumé, keeping only experience that matches the given tags.
#[derive(Parser, Debug)]
#[command(name = "resume", version)]
#[command(about = "Generate a resume. Filter experience based on input tags")]
pub struct Args {
    /// Input YAML file
    pub input: PathBuf,

    /// Output file; defaults to the input path with the format's extension. Use - for stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tags to filter for; no tags keeps every entry
    #[arg(short, long, num_args = 1.., value_delimiter = ',', env = "RESUME_TAGS")]
    pub tags: Vec<String>,

    /// Maximum number of jobs and projects shown together
    #[arg(short = 'e', long, default_value_t = DEFAULT_MAX_EXPERIENCE,
          allow_negative_numbers = true, env = "RESUME_MAX_EXPERIENCE")]
    pub max_experience: i64,

    /// Maximum skills shown per skill group
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_SKILLS,
          allow_negative_numbers = true, env = "RESUME_MAX_SKILLS")]
    pub max_skills: i64,

    /// Show the skills line under each project
    #[arg(long, default_value_t = false, env = "RESUME_DISPLAY_PROJECT_SKILLS")]
    pub display_project_skills: bool,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Latex, env = "RESUME_FORMAT")]
    pub format: OutputFormat,

    /// Print debug logging
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Knobs that drive selection. Validated before any input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Empty means no filtering.
    pub tags: BTreeSet<String>,
    pub max_experience: i64,
    pub max_skills: i64,
    pub display_project_skills: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tags: BTreeSet::new(),
            max_experience: DEFAULT_MAX_EXPERIENCE,
            max_skills: DEFAULT_MAX_SKILLS,
            display_project_skills: false,
        }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), ResumeError> {
        if self.max_experience < 0 {
            return Err(ResumeError::InvalidConfiguration(format!(
                "max_experience must be >= 0, got {}",
                self.max_experience
            )));
        }
        if self.max_skills < 0 {
            return Err(ResumeError::InvalidConfiguration(format!(
                "max_skills must be >= 0, got {}",
                self.max_skills
            )));
        }
        Ok(())
    }
}

/// Full run configuration resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub selection: SelectionConfig,
    /// Tracing filter directive.
    pub rust_log: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ResumeError> {
        let selection = SelectionConfig {
            tags: args
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            max_experience: args.max_experience,
            max_skills: args.max_skills,
            display_project_skills: args.display_project_skills,
        };
        selection.validate()?;

        let output = match args.output {
            Some(path) if path.as_os_str() == "-" => None,
            Some(path) => Some(path),
            None => Some(default_output_path(&args.input, args.format)),
        };

        let rust_log = log_directive(args.debug, std::env::var("RUST_LOG").ok());

        Ok(Config {
            input: args.input,
            output,
            format: args.format,
            selection,
            rust_log,
        })
    }
}

/// `--debug` overrides `RUST_LOG`; with neither, this crate logs at info.
pub fn log_directive(debug: bool, rust_log_env: Option<String>) -> String {
    let crate_level = |level: &str| format!("{}={level}", env!("CARGO_PKG_NAME"));
    match rust_log_env {
        _ if debug => crate_level("debug"),
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => crate_level("info"),
    }
}

/// `resume.yaml` → `resume.tex` (or `.json`), next to the input.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(renderer_for(format).extension())
}
