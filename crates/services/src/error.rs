//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

pub use phish_core::QuizError;

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
