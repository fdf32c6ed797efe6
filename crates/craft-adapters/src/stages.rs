//! Etapas de receta concretas.

use craft_core::{CoreError, CraftContext, RecipeStage, TriggerId};
use craft_domain::{ItemInstance, MaterialId, TemplateId};

/// La etapa objetivo de la sustitución. No declara productos propios: el
/// duplicado limpio lo emite el interceptor, y la logística de entrega se
/// pide con el flag del descriptor en lugar de un output descartable.
#[derive(Debug, Clone)]
pub struct WashApparelStage {
    trigger: TriggerId,
}

impl WashApparelStage {
    pub const TRIGGER: &'static str = "wash_apparel";

    pub fn new() -> Self {
        Self { trigger: TriggerId::new(Self::TRIGGER) }
    }
}

impl Default for WashApparelStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStage for WashApparelStage {
    fn trigger(&self) -> &TriggerId {
        &self.trigger
    }

    fn produce(&self, _ctx: &CraftContext<'_>) -> Result<Vec<ItemInstance>, CoreError> {
        Ok(vec![])
    }

    fn requests_delivery(&self) -> bool {
        true
    }
}

/// Receta ordinaria: produce `count` instancias frescas de su template
/// declarado. Sirve para ejercitar el camino pass-through.
#[derive(Debug, Clone)]
pub struct PlainRecipeStage {
    trigger: TriggerId,
    product: TemplateId,
    material: Option<MaterialId>,
    count: usize,
}

impl PlainRecipeStage {
    pub fn new(trigger: impl Into<String>, product: impl Into<String>, count: usize) -> Self {
        Self { trigger: TriggerId::new(trigger),
               product: TemplateId::new(product),
               material: None,
               count }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(MaterialId::new(material));
        self
    }
}

impl RecipeStage for PlainRecipeStage {
    fn trigger(&self) -> &TriggerId {
        &self.trigger
    }

    fn produce(&self, ctx: &CraftContext<'_>) -> Result<Vec<ItemInstance>, CoreError> {
        let template = ctx.templates.get(&self.product)?;
        Ok((0..self.count).map(|_| ItemInstance::spawn(template, self.material.clone()))
                          .collect())
    }
}
