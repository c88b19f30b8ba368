use phish_core::model::{Level, Question};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::json;

/// Errors surfaced while loading the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("question record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: phish_core::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to the question dataset.
pub trait QuestionRepository: Send + Sync {
    /// Every question, in dataset order.
    fn all(&self) -> &[Question];

    /// Questions at `level`, in dataset order.
    fn by_level(&self, level: Level) -> Vec<Question> {
        self.all()
            .iter()
            .filter(|q| q.level() == level)
            .cloned()
            .collect()
    }

    fn count_by_level(&self, level: Level) -> usize {
        self.all().iter().filter(|q| q.level() == level).count()
    }
}

/// Question bank held in memory. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<[Question]>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionRepository for InMemoryRepository {
    fn all(&self) -> &[Question] {
        &self.questions
    }
}

/// Aggregate handle passed to services.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::new(questions)),
        }
    }

    /// The dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled JSON fails to decode or validate.
    pub fn bundled() -> Result<Self, StorageError> {
        Ok(Self::in_memory(json::parse_questions(json::BUNDLED_QUESTIONS)?))
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, or a decode/validation error.
    pub fn from_json_file(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self::in_memory(json::load_questions(path)?))
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("questions_len", &self.questions.all().len())
            .finish()
    }
}
