//! Instancia concreta de item (el "artifact" que fluye por el pipeline).
//!
//! Un `ItemInstance` es mutable aguas abajo (pases cosméticos pueden tocar su
//! color), pero el pipeline nunca muta ingredientes in place: consumirlos y
//! producir instancias nuevas es responsabilidad del interceptor.
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Color, DomainError, ItemTemplate, MaterialId, QualityTier, TemplateId};

/// Identificador estable por instancia. Es la clave que usa la side table de
/// tags (granularidad por instancia, no por template).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: InstanceId,
    pub template: TemplateId,
    pub material: Option<MaterialId>,
    /// `None` cuando el template no declara componente de calidad.
    pub quality: Option<QualityTier>,
    pub durability: u32,
    pub color: Color,
}

impl ItemInstance {
    /// Crea una instancia fresca a partir de su template, con defaults.
    pub fn spawn(template: &ItemTemplate, material: Option<MaterialId>) -> Self {
        Self { id: InstanceId::new(),
               template: template.id.clone(),
               material,
               quality: template.has_quality.then(QualityTier::default),
               durability: template.max_durability,
               color: template.base_color }
    }

    /// Ajusta la durabilidad validando contra el máximo del template.
    pub fn set_durability(&mut self, template: &ItemTemplate, value: u32) -> Result<(), DomainError> {
        if value > template.max_durability {
            return Err(DomainError::InvalidDurability { got: value,
                                                        max: template.max_durability });
        }
        self.durability = value;
        Ok(())
    }
}

impl fmt::Display for ItemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {} dur={} color={}>",
               self.template,
               self.quality.map(|q| q.label()).unwrap_or("-"),
               self.durability,
               self.color)
    }
}
