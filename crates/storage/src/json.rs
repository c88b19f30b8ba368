//! JSON dataset format: an array of question records, identified by array position.

use phish_core::model::{Level, Question, QuestionId};
use serde::Deserialize;
use std::path::PathBuf;

use crate::repository::StorageError;

/// Dataset shipped with the application.
pub const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

/// Wire shape of one dataset entry.
///
/// Kept separate from the domain `Question` so records are validated in one place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub level: u8,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionRecord {
    /// Convert into a validated domain question at dataset position `index`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidRecord` if the level or question fails validation.
    pub fn into_question(self, index: usize) -> Result<Question, StorageError> {
        let invalid = |source: phish_core::Error| StorageError::InvalidRecord { index, source };

        let level = Level::new(self.level).map_err(|e| invalid(e.into()))?;
        Question::new(
            QuestionId::new(index),
            level,
            self.question,
            self.options,
            self.answer,
            self.explanation,
        )
        .map_err(|e| invalid(e.into()))
    }
}

/// Decode and validate a JSON dataset.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` for the first record that fails validation.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_question(index))
        .collect()
}

/// Read and decode a JSON dataset from disk.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, plus any `parse_questions` error.
pub fn load_questions(path: impl Into<PathBuf>) -> Result<Vec<Question>, StorageError> {
    let path = path.into();
    let raw = std::fs::read_to_string(&path).map_err(|source| StorageError::Io {
        path: path.clone(),
        source,
    })?;
    parse_questions(&raw)
}
