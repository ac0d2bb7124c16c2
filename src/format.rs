//! Rendering ranked matches as JSON or plain text.
//!
//! Both renderers are pure functions of the ranked list. [`write_matches`]
//! puts the rendered artifact on disk; [`render_summary`] produces the short
//! listing the binary prints to stdout.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use matcher::ScoredPosting;
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Longest description preview, in characters, before `...` is appended.
pub const MAX_PREVIEW_CHARS: usize = 100;
/// Number of skills listed per match before the remainder is summarized.
pub const MAX_LISTED_SKILLS: usize = 5;

const SEPARATOR: &str = "---------------------------------------------";
const NO_DESCRIPTION: &str = "No description available.";

/// Output artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    #[serde(alias = "text")]
    Txt,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "txt" | "text" => Ok(OutputFormat::Txt),
            other => Err(format!("unknown output format `{other}` (expected json or txt)")),
        }
    }
}

/// Rendering options shared by the file writer and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default)]
    pub format: OutputFormat,
    /// Keep raw posting embeddings in JSON output.
    #[serde(default)]
    pub include_embeddings: bool,
}

/// Pretty-printed JSON array of matches, in rank order.
pub fn render_json(
    matches: &[ScoredPosting],
    include_embeddings: bool,
) -> Result<String, serde_json::Error> {
    if include_embeddings {
        return serde_json::to_string_pretty(matches);
    }
    let stripped: Vec<ScoredPosting> = matches
        .iter()
        .cloned()
        .map(|mut m| {
            m.posting.embedding.clear();
            m
        })
        .collect();
    serde_json::to_string_pretty(&stripped)
}

/// Human-readable report with one block per match.
pub fn render_text(matches: &[ScoredPosting]) -> String {
    let mut out = format!(
        "============= Top {} Job Matches =============\n\n",
        matches.len()
    );

    for (i, m) in matches.iter().enumerate() {
        let p = &m.posting;
        out.push_str(&format!(
            "Match #{} (Similarity: {:.6})\n",
            i + 1,
            m.similarity
        ));
        out.push_str(&format!("Title: {}\n", p.title));
        out.push_str(&format!("Location: {}\n", p.location));
        out.push_str(&format!("Source: {}\n", p.source));
        out.push_str(&format!("Skills: {}\n\n", skills_line(&p.skills, " ")));
        out.push_str("Description Preview:\n");
        out.push_str(&description_preview(&p.description));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

/// Short console listing: rank, title and score, then location and skills.
pub fn render_summary(matches: &[ScoredPosting]) -> String {
    if matches.is_empty() {
        return "No jobs found matching the minimum similarity threshold.\n".to_string();
    }

    let mut out = String::from("Top matching jobs:\n");
    for (i, m) in matches.iter().enumerate() {
        let p = &m.posting;
        out.push_str(&format!(
            "{}. {} - Similarity: {:.4}\n",
            i + 1,
            p.title,
            m.similarity
        ));
        out.push_str(&format!("   Location: {}\n", p.location));
        out.push_str(&format!(
            "   Skills: {}\n\n",
            skills_line(&p.skills, "... ")
        ));
    }
    out
}

/// Render `matches` in the requested format.
pub fn render(matches: &[ScoredPosting], opts: &OutputOptions) -> Result<String, PipelineError> {
    match opts.format {
        OutputFormat::Json => render_json(matches, opts.include_embeddings).map_err(|source| {
            PipelineError::Json {
                context: "rendered matches".to_string(),
                source,
            }
        }),
        OutputFormat::Txt => Ok(render_text(matches)),
    }
}

/// Render and write `matches` to `path`, creating parent directories.
pub fn write_matches(
    path: &Path,
    matches: &[ScoredPosting],
    opts: &OutputOptions,
) -> Result<(), PipelineError> {
    let rendered = render(matches, opts)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PipelineError::io(parent, source))?;
    }
    fs::write(path, rendered).map_err(|source| PipelineError::io(path, source))?;
    tracing::info!(
        path = %path.display(),
        format = %opts.format,
        matches = matches.len(),
        "matches_written"
    );
    Ok(())
}

/// First `.`-delimited sentence of `description`, capped at
/// [`MAX_PREVIEW_CHARS`] characters.
pub fn description_preview(description: &str) -> String {
    if description.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    let first = description.split('.').next().unwrap_or_default().trim();
    if first.chars().count() > MAX_PREVIEW_CHARS {
        let mut preview: String = first.chars().take(MAX_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        first.to_string()
    }
}

fn skills_line(skills: &[String], more_sep: &str) -> String {
    let mut line = skills
        .iter()
        .take(MAX_LISTED_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > MAX_LISTED_SKILLS {
        line.push_str(&format!(
            "{more_sep}(+{} more)",
            skills.len() - MAX_LISTED_SKILLS
        ));
    }
    line
}
