//! Project error definitions.

use thiserror::Error;

use crate::projects::types::ProjectStatus;

/// Rejection reasons for a create payload or an update patch.
///
/// The display text is the message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `title`, `priority` or `status` absent or falsy.
    #[error("Os campos Título, Prioridade e Status são obrigatórios.")]
    MissingRequiredFields,

    /// `priority` present but not a JSON number.
    #[error("A prioridade deve ser registrada como número de 1 (mais alta) a 3 (mais baixa)")]
    PriorityNotNumeric,

    /// `status` outside the fixed enumeration.
    #[error("O status deve ser um dos seguintes: {}", ProjectStatus::labels())]
    InvalidStatus,

    /// `title` present but not non-empty text.
    #[error("O título deve ser um texto não vazio.")]
    InvalidTitle,

    /// `description` present but not text.
    #[error("A descrição deve ser um texto.")]
    InvalidDescription,
}

/// Errors returned by project operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No live project carries the requested identifier.
    #[error("Projeto não encontrado")]
    NotFound(String),
}

/// Result type for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
