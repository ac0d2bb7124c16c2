//! JSON input loading for the profile vector, postings and profile text.
//!
//! Posting records follow the shape of a relational export: `skills` and
//! `embedding` may arrive either as JSON arrays or as JSON-encoded strings,
//! and `id` may be a number or a string. Every record is converted into a
//! [`Posting`] before it reaches the matcher.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use matcher::Posting;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::PipelineError;

/// A value stored either inline or as a JSON-encoded string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Encoded<T> {
    Inline(T),
    Text(String),
}

impl<T: DeserializeOwned + Default> Encoded<T> {
    fn decode(self) -> Result<T, serde_json::Error> {
        match self {
            Encoded::Inline(value) => Ok(value),
            Encoded::Text(text) if text.trim().is_empty() => Ok(T::default()),
            Encoded::Text(text) => serde_json::from_str(&text),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PostingRecord {
    id: RecordId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    skills: Option<Encoded<Vec<String>>>,
    embedding: Encoded<Vec<f32>>,
}

impl PostingRecord {
    fn into_posting(self) -> Result<Posting, PipelineError> {
        let id = self.id.into_string();
        let field_error = |field: &str, source| PipelineError::Json {
            context: format!("posting {id} field `{field}`"),
            source,
        };
        let skills = match self.skills {
            Some(skills) => skills.decode().map_err(|e| field_error("skills", e))?,
            None => Vec::new(),
        };
        let embedding = self
            .embedding
            .decode()
            .map_err(|e| field_error("embedding", e))?;

        Ok(Posting {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            skills,
            embedding,
            id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddingFile {
    Flat(Vec<f32>),
    Rows(Vec<Vec<f32>>),
}

/// Parse a profile embedding: a flat numeric array, or a single-row nested
/// array as produced by batch embedding endpoints.
pub fn parse_profile_embedding(json: &str) -> Result<Vec<f32>, PipelineError> {
    let parsed: EmbeddingFile =
        serde_json::from_str(json).map_err(|source| PipelineError::Json {
            context: "profile embedding".to_string(),
            source,
        })?;
    match parsed {
        EmbeddingFile::Flat(v) => Ok(v),
        EmbeddingFile::Rows(mut rows) if rows.len() == 1 => Ok(rows.remove(0)),
        EmbeddingFile::Rows(rows) => Err(PipelineError::InvalidInput(format!(
            "profile embedding must hold exactly one row, found {}",
            rows.len()
        ))),
    }
}

/// Parse a JSON array of posting records. Ids must be unique.
pub fn parse_postings(json: &str) -> Result<Vec<Posting>, PipelineError> {
    let records: Vec<PostingRecord> =
        serde_json::from_str(json).map_err(|source| PipelineError::Json {
            context: "postings".to_string(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut postings = Vec::with_capacity(records.len());
    for record in records {
        let posting = record.into_posting()?;
        if !seen.insert(posting.id.clone()) {
            return Err(PipelineError::InvalidInput(format!(
                "duplicate posting id `{}`",
                posting.id
            )));
        }
        postings.push(posting);
    }
    debug!(postings = postings.len(), "postings_parsed");
    Ok(postings)
}

pub fn load_profile_embedding(path: impl AsRef<Path>) -> Result<Vec<f32>, PipelineError> {
    parse_profile_embedding(&read(path.as_ref())?)
}

pub fn load_postings(path: impl AsRef<Path>) -> Result<Vec<Posting>, PipelineError> {
    parse_postings(&read(path.as_ref())?)
}

pub fn load_profile_text(path: impl AsRef<Path>) -> Result<String, PipelineError> {
    read(path.as_ref())
}

fn read(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|source| PipelineError::io(path, source))
}
