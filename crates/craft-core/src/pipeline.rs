//! Front-end síncrono del pipeline de crafteo.
//!
//! El host real dispara un hook por invocación completada; acá ese punto de
//! entrada es `complete_craft`, que ejecuta la etapa, aplica la cadena de
//! interceptores, registra los outputs en la side table y apendea eventos.
//! Todo corre single-threaded en el tick de simulación: nada suspende,
//! bloquea ni reintenta.

use craft_domain::{ItemInstance, TemplateBook};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::event::{EventStore, InMemoryEventStore, PipelineEventKind};
use crate::intercept::{apply_interceptors, GuardDecision, OutputInterceptor, VariationGuard};
use crate::model::{CraftContext, WorkerRef};
use crate::registry::InterceptorRegistry;
use crate::tag::{InMemoryTagStore, TagStore};
use crate::trigger::TriggerId;

/// Descriptor de una etapa de receta. La entrega se declara con un flag
/// explícito en vez del truco de proponer un output descartable para que la
/// logística upstream crea que hay algo que entregar.
pub trait RecipeStage: std::fmt::Debug {
    fn trigger(&self) -> &TriggerId;

    /// Outputs propuestos por la etapa. Puede ser vacío.
    fn produce(&self, ctx: &CraftContext<'_>) -> Result<Vec<ItemInstance>, CoreError>;

    /// Si la invocación requiere logística de entrega aunque la etapa no
    /// declare productos propios.
    fn requests_delivery(&self) -> bool {
        true
    }
}

/// Resultado de una invocación completa.
#[derive(Debug)]
pub struct CraftOutput {
    pub invocation_id: Uuid,
    pub outputs: Vec<ItemInstance>,
    pub deliver: bool,
    pub substituted: bool,
}

/// Pipeline de crafteo con intercepción de outputs y guard de variación.
pub struct CraftingPipeline<T, E>
    where T: TagStore,
          E: EventStore
{
    templates: TemplateBook,
    tags: T,
    events: E,
    interceptors: Vec<Box<dyn OutputInterceptor>>,
    guard: Option<VariationGuard>,
}

impl CraftingPipeline<InMemoryTagStore, InMemoryEventStore> {
    /// Crea un pipeline con stores in-memory a partir de un registro ya
    /// bootstrapeado.
    pub fn new(templates: TemplateBook, registry: InterceptorRegistry) -> Self {
        Self::with_stores(templates, registry, InMemoryTagStore::new(), InMemoryEventStore::default())
    }
}

impl<T, E> CraftingPipeline<T, E>
    where T: TagStore,
          E: EventStore
{
    pub fn with_stores(templates: TemplateBook, registry: InterceptorRegistry, tags: T, mut events: E) -> Self {
        let (interceptors, guard, disabled) = registry.into_parts();
        let bootstrap_id = Uuid::new_v4();
        for (package, reason) in disabled {
            events.append_kind(bootstrap_id, PipelineEventKind::InterceptorDisabled { package, reason });
        }
        Self { templates,
               tags,
               events,
               interceptors,
               guard }
    }

    /// Punto de entrada por invocación completada de crafteo.
    ///
    /// Los ingredientes se consumen por valor: la propiedad pasa al paso de
    /// descarte del pipeline y ningún interceptor los muta in place.
    pub fn complete_craft(&mut self,
                          stage: &dyn RecipeStage,
                          ingredients: Vec<ItemInstance>,
                          worker: &WorkerRef)
                          -> Result<CraftOutput, CoreError> {
        let invocation_id = Uuid::new_v4();
        let ctx = CraftContext { trigger: stage.trigger(),
                                 ingredients: &ingredients,
                                 worker,
                                 templates: &self.templates };

        let proposed = stage.produce(&ctx)?;
        let outcome = apply_interceptors(&self.interceptors, &ctx, &mut self.tags, proposed)?;

        if outcome.substituted {
            // Precondición ya validada por el interceptor: hay fuente.
            if let (Some(source), Some(replacement)) = (ingredients.first(), outcome.outputs.first()) {
                self.events.append_kind(invocation_id,
                                        PipelineEventKind::OutputsSubstituted { trigger: stage.trigger()
                                                                                             .as_str()
                                                                                             .to_string(),
                                                                                source: source.id,
                                                                                replacement: replacement.id });
                if outcome.side_effect_fired {
                    self.events.append_kind(invocation_id,
                                            PipelineEventKind::SideEffectRequested { worker: worker.label.clone(),
                                                                                     item: replacement.id });
                }
            }
        }

        for output in &outcome.outputs {
            self.tags.register(output.id);
        }

        let deliver = stage.requests_delivery() || !outcome.outputs.is_empty();
        self.events.append_kind(invocation_id,
                                PipelineEventKind::CraftCompleted { trigger: stage.trigger().as_str().to_string(),
                                                                    outputs: outcome.outputs.len(),
                                                                    consumed: ingredients.len(),
                                                                    deliver });

        // Los ingredientes se descartan acá (fin de su ownership).
        drop(ingredients);

        Ok(CraftOutput { invocation_id,
                         outputs: outcome.outputs,
                         deliver,
                         substituted: outcome.substituted })
    }

    /// Enruta un batch por el guard de variación si está activo. Con la
    /// dependencia opcional ausente el guard es inerte y el batch no se toca.
    pub fn apply_variation(&mut self, batch: &mut [ItemInstance]) -> GuardDecision {
        let guard = match &self.guard {
            None => return GuardDecision::Inactive,
            Some(g) => g,
        };
        let decision = guard.apply(&self.tags, batch);
        let invocation_id = Uuid::new_v4();
        match decision {
            GuardDecision::Applied => {
                self.events
                    .append_kind(invocation_id, PipelineEventKind::VariationApplied { batch: batch.len() });
            }
            GuardDecision::Suppressed => {
                self.events
                    .append_kind(invocation_id, PipelineEventKind::VariationSuppressed { first: batch[0].id });
            }
            GuardDecision::EmptyBatch | GuardDecision::Inactive => {}
        }
        decision
    }

    pub fn variation_active(&self) -> bool {
        self.guard.is_some()
    }

    /// La side table es contrato público: legible por cualquier componente.
    pub fn tags(&self) -> &T {
        &self.tags
    }

    pub fn templates(&self) -> &TemplateBook {
        &self.templates
    }

    pub fn events(&self) -> &E {
        &self.events
    }
}
