// Render adapters: turn a finished ResumeView into document text.
// Renderers never see the Profile or the selection config, only view records.

pub mod json;
pub mod latex;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::OutputFormat;
use crate::errors::ResumeError;
use crate::models::ResumeView;

pub use json::JsonRenderer;
pub use latex::LatexRenderer;

/// A document backend. Implement this to add an output format without
/// touching the selection pipeline.
pub trait ResumeRenderer {
    /// File extension written by this renderer, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, view: &ResumeView) -> Result<String, ResumeError>;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn ResumeRenderer> {
    match format {
        OutputFormat::Latex => Box::new(LatexRenderer::default()),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Writes `contents` to `path` atomically.
///
/// The document goes to a temp file in the destination directory first and is
/// renamed into place only once fully written, so a failed run never leaves a
/// truncated output behind.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ResumeError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ResumeError::Io(e.error))?;
    Ok(())
}
