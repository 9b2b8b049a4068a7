//! LaTeX source backend.
//!
//! Produces a self-contained `article` document. Section order follows the
//! classic template: header, education, skills, experience, projects. Sections
//! with nothing to show are left out entirely.

use std::fmt::Write;

use crate::errors::ResumeError;
use crate::models::{EducationRecord, JobRecord, ProjectRecord, ResumeView, SkillRecord};
use crate::render::ResumeRenderer;

/// Blue section headings over dark grey body text.
const PREAMBLE: &str = r"\documentclass[10pt]{article}
\usepackage[margin=0.6in]{geometry}
\usepackage[T1]{fontenc}
\usepackage{helvet}
\renewcommand{\familydefault}{\sfdefault}
\usepackage{xcolor}
\usepackage{enumitem}
\definecolor{heading}{RGB}{66,81,245}
\definecolor{body}{RGB}{39,39,46}
\setlist[itemize]{leftmargin=1.5em,itemsep=0pt,topsep=2pt}
\pagestyle{empty}
\setlength{\parindent}{0pt}
";

#[derive(Debug, Clone)]
pub struct LatexRenderer {
    /// Separator between contact items in the header.
    pub contact_separator: &'static str,
}

impl Default for LatexRenderer {
    fn default() -> Self {
        Self {
            contact_separator: r" $\cdot$ ",
        }
    }
}

impl ResumeRenderer for LatexRenderer {
    fn extension(&self) -> &'static str {
        "tex"
    }

    fn render(&self, view: &ResumeView) -> Result<String, ResumeError> {
        self.render_document(view)
            .map_err(|e| ResumeError::Render(format!("failed to build LaTeX source: {e}")))
    }
}

impl LatexRenderer {
    fn render_document(&self, view: &ResumeView) -> Result<String, std::fmt::Error> {
        let mut out = String::with_capacity(4096);
        out.push_str(PREAMBLE);
        out.push_str("\\begin{document}\n\\color{body}\n");

        // Header
        writeln!(
            out,
            "\\begin{{center}}\n{{\\LARGE\\bfseries\\color{{heading}} {}}}\\\\[2pt]",
            escape_latex(&view.header.name)
        )?;
        let contact: Vec<String> = view.header.contact.iter().map(|c| escape_latex(c)).collect();
        writeln!(out, "{}\n\\end{{center}}", contact.join(self.contact_separator))?;

        if !view.education.is_empty() {
            section(&mut out, "Education")?;
            for edu in &view.education {
                education(&mut out, edu)?;
            }
        }

        if !view.skills.is_empty() {
            section(&mut out, "Skills")?;
            for group in &view.skills {
                skills(&mut out, group)?;
            }
        }

        if !view.jobs.is_empty() {
            section(&mut out, "Professional Experience")?;
            for job_record in &view.jobs {
                job(&mut out, job_record)?;
            }
        }

        if !view.projects.is_empty() {
            section(&mut out, "Relevant Projects")?;
            for project_record in &view.projects {
                project(&mut out, project_record)?;
            }
        }

        out.push_str("\\end{document}\n");
        Ok(out)
    }
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(
        out,
        "\n\\medskip\n{{\\large\\bfseries\\color{{heading}} {title}}}\\\\[-6pt]\n\\rule{{\\linewidth}}{{0.4pt}}\n"
    )
}

fn education(out: &mut String, edu: &EducationRecord) -> std::fmt::Result {
    let mut right = escape_latex(&edu.completed);
    if let Some(gpa) = &edu.gpa {
        write!(right, " | GPA {}", escape_latex(gpa))?;
    }
    writeln!(
        out,
        "\\textbf{{{}}} \\hfill {}\\\\\n{}\\\\",
        escape_latex(&edu.degree),
        right,
        escape_latex(&edu.school)
    )
}

fn skills(out: &mut String, group: &SkillRecord) -> std::fmt::Result {
    let items: Vec<String> = group.items.iter().map(|s| escape_latex(s)).collect();
    writeln!(
        out,
        "\\textbf{{{}:}} {}\\\\",
        escape_latex(&group.group),
        items.join(", ")
    )
}

fn job(out: &mut String, job: &JobRecord) -> std::fmt::Result {
    writeln!(out, "\\textbf{{{}}}\\\\", escape_latex(&job.title))?;
    let where_when = match &job.location {
        Some(loc) => format!("{}, {}", escape_latex(loc), escape_latex(&job.date_range)),
        None => escape_latex(&job.date_range),
    };
    writeln!(
        out,
        "\\textbf{{{}}} \\hfill {}\\\\",
        escape_latex(&job.company),
        where_when
    )?;
    if !job.skills.is_empty() {
        let skills: Vec<String> = job.skills.iter().map(|s| escape_latex(s)).collect();
        writeln!(out, "\\textit{{{}}}\\\\", skills.join(" "))?;
    }
    bullets(out, &job.details)
}

fn project(out: &mut String, project: &ProjectRecord) -> std::fmt::Result {
    write!(out, "\\textbf{{{}}}", escape_latex(&project.title))?;
    if let Some(skills) = project.skills.as_ref().filter(|s| !s.is_empty()) {
        let skills: Vec<String> = skills.iter().map(|s| escape_latex(s)).collect();
        write!(out, " {{\\small\\textit{{(Skills: {})}}}}", skills.join(", "))?;
    }
    writeln!(out, " \\hfill {}\\\\", escape_latex(&project.date_range))?;
    bullets(out, &project.details)
}

fn bullets(out: &mut String, details: &[String]) -> std::fmt::Result {
    if details.is_empty() {
        return Ok(());
    }
    out.push_str("\\begin{itemize}\n");
    for detail in details {
        writeln!(out, "  \\item {}", escape_latex(detail))?;
    }
    out.push_str("\\end{itemize}\n");
    Ok(())
}

/// Escapes LaTeX special characters in user-authored text.
///
/// Brackets are braced so text following `\\` or `\item` is never read as
/// an optional argument.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '[' => out.push_str("{[}"),
            ']' => out.push_str("{]}"),
            _ => out.push(c),
        }
    }
    out
}
