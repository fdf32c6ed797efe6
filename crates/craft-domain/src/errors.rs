use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("durability {got} exceeds template maximum {max}")]
    InvalidDurability { got: u32, max: u32 },
}
