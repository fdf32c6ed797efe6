//! `SubstitutionInterceptor`: descarta los outputs propuestos de una etapa
//! reconocida y emite un duplicado limpio derivado del primer ingrediente.
//!
//! Comportamiento con trigger coincidente:
//! 1. Descarta outputs placeholder propuestos por la etapa envuelta.
//! 2. Lee el primer ingrediente como fuente (lista vacía = precondición
//!    fatal, surge como `CoreError::EmptyIngredients`).
//! 3. Crea una instancia nueva del mismo template/material y copia calidad,
//!    durabilidad y color exactos. La ausencia del componente de calidad en
//!    el template salta sólo ese campo.
//! 4. Marca el reemplazo en la side table.
//! 5. Dispara el hook opcional (fire-and-forget, nunca altera el reemplazo).
//! 6. Emite el reemplazo como único output.
//!
//! Con cualquier otro trigger: outputs verbatim, cero cambios observables.

use craft_domain::ItemInstance;

use crate::errors::CoreError;
use crate::model::{CraftContext, WorkerRef};
use crate::tag::TagStore;
use crate::trigger::TriggerId;

use super::output::{InterceptOutcome, OutputInterceptor};

/// Hook lateral opcional invocado a lo sumo una vez por sustitución.
/// Devuelve si disparó; fallos del hook nunca fallan la sustitución.
pub trait SideEffectHook: std::fmt::Debug {
    fn on_substituted(&self, worker: &WorkerRef, item: &ItemInstance) -> bool;
}

#[derive(Debug)]
pub struct SubstitutionInterceptor {
    target: TriggerId,
    hook: Option<Box<dyn SideEffectHook>>,
}

impl SubstitutionInterceptor {
    pub fn new(target: TriggerId) -> Self {
        Self { target, hook: None }
    }

    pub fn with_hook(mut self, hook: Box<dyn SideEffectHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn target(&self) -> &TriggerId {
        &self.target
    }
}

impl OutputInterceptor for SubstitutionInterceptor {
    fn name(&self) -> &str {
        "substitution"
    }

    fn intercept(&self,
                 ctx: &CraftContext<'_>,
                 tags: &mut dyn TagStore,
                 proposed: Vec<ItemInstance>)
                 -> Result<InterceptOutcome, CoreError> {
        if ctx.trigger != &self.target {
            return Ok(InterceptOutcome::pass_through(proposed));
        }

        let source = ctx.ingredients
                        .first()
                        .ok_or_else(|| CoreError::EmptyIngredients(self.target.as_str().to_string()))?;
        let template = ctx.templates.get(&source.template)?;

        // Instancia nueva e independiente; los placeholders propuestos se
        // descartan al no reenviarlos.
        let mut clean = ItemInstance::spawn(template, source.material.clone());
        if template.has_quality {
            clean.quality = source.quality;
        }
        clean.durability = source.durability;
        clean.color = source.color;

        tags.mark(clean.id);

        let side_effect_fired = self.hook
                                    .as_ref()
                                    .map(|h| h.on_substituted(ctx.worker, &clean))
                                    .unwrap_or(false);

        Ok(InterceptOutcome { outputs: vec![clean],
                              substituted: true,
                              side_effect_fired })
    }
}
