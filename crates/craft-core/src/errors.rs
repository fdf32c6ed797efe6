//! Errores específicos del core (simples por ahora).

use craft_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    /// Precondición fatal: el trigger coincide pero no hay ingredientes. La
    /// declaración upstream está malformada y debe fallar ruidosamente.
    #[error("trigger '{0}' matched but the ingredient list is empty")]
    EmptyIngredients(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("internal: {0}")]
    Internal(String),
}
