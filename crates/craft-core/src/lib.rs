//! craft-core: maquinaria de intercepción-sustitución sobre un pipeline de
//! crafteo controlado por el host.
//!
//! El patrón: una etapa del pipeline propone outputs → un interceptor los
//! reescribe condicionalmente → un segundo pase (de terceros) intentaría
//! mutarlos → un guard consulta la side table de tags y suprime esa mutación
//! para items ya procesados.
pub mod errors;
pub mod event;
pub mod intercept;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod tag;
pub mod trigger;

pub use errors::CoreError;
pub use event::{EventStore, InMemoryEventStore, PipelineEvent, PipelineEventKind};
pub use intercept::{
    apply_interceptors, GuardDecision, InterceptOutcome, MutationPass, OutputInterceptor,
    SideEffectHook, SubstitutionInterceptor, VariationGuard,
};
pub use model::{CraftContext, WorkerRef};
pub use pipeline::{CraftOutput, CraftingPipeline, RecipeStage};
pub use registry::{AvailabilityProbe, InterceptorRegistry, ModCatalog, ProbeError};
pub use tag::{InMemoryTagStore, TagStore};
pub use trigger::TriggerId;
