use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier ordinal de calidad de un item. El orden de los variantes define el
/// orden total (`Awful` es el peor, `Legendary` el mejor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Awful,
    Poor,
    Normal,
    Good,
    Excellent,
    Masterwork,
    Legendary,
}

impl QualityTier {
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Awful => "awful",
            QualityTier::Poor => "poor",
            QualityTier::Normal => "normal",
            QualityTier::Good => "good",
            QualityTier::Excellent => "excellent",
            QualityTier::Masterwork => "masterwork",
            QualityTier::Legendary => "legendary",
        }
    }
}

impl Default for QualityTier {
    fn default() -> Self {
        QualityTier::Normal
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
