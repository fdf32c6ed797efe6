use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::{Color, DomainError};

/// Identidad del template (la definición compartida de un item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identidad secundaria: de qué está hecho el item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Definición compartida de un item. `has_quality = false` modela kinds cuyo
/// componente de calidad está legítimamente ausente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: TemplateId,
    pub label: String,
    pub has_quality: bool,
    pub max_durability: u32,
    pub base_color: Color,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: TemplateId::new(id),
               label: label.into(),
               has_quality: true,
               max_durability: 100,
               base_color: Color::WHITE }
    }

    pub fn without_quality(mut self) -> Self {
        self.has_quality = false;
        self
    }

    pub fn with_max_durability(mut self, max: u32) -> Self {
        self.max_durability = max;
        self
    }
}

/// Catálogo de templates conocidos por el host, consultable por id.
#[derive(Debug, Default, Clone)]
pub struct TemplateBook {
    templates: HashMap<TemplateId, ItemTemplate>,
}

impl TemplateBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: ItemTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &TemplateId) -> Result<&ItemTemplate, DomainError> {
        self.templates
            .get(id)
            .ok_or_else(|| DomainError::UnknownTemplate(id.as_str().to_string()))
    }

    pub fn contains(&self, id: &TemplateId) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
