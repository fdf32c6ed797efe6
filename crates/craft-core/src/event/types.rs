//! Tipos de evento del pipeline y estructura `PipelineEvent`.
//!
//! Rol en el flujo:
//! - Cada invocación del `CraftingPipeline` emite eventos a un `EventStore`
//!   append-only.
//! - El enum `PipelineEventKind` es el contrato observable del patrón de
//!   intercepción: qué se sustituyó, qué mutación se suprimió y qué
//!   interceptores quedaron desactivados al startup.
use chrono::{DateTime, Utc};
use craft_domain::InstanceId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipos de eventos observables del pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEventKind {
    /// Una invocación de crafteo terminó, con el conteo final de outputs,
    /// ingredientes consumidos y si corresponde logística de entrega.
    CraftCompleted {
        trigger: String,
        outputs: usize,
        consumed: usize,
        deliver: bool,
    },
    /// El interceptor de sustitución descartó los outputs propuestos y emitió
    /// un reemplazo derivado del primer ingrediente.
    OutputsSubstituted {
        trigger: String,
        source: InstanceId,
        replacement: InstanceId,
    },
    /// El side-effect hook opcional disparó (fire-and-forget, no altera el
    /// reemplazo).
    SideEffectRequested { worker: String, item: InstanceId },
    /// El pase cosmético de terceros corrió normalmente sobre un batch.
    VariationApplied { batch: usize },
    /// El guard suprimió el pase cosmético: el primer elemento del batch
    /// estaba marcado (decisión all-or-nothing por batch).
    VariationSuppressed { first: InstanceId },
    /// Una sonda de disponibilidad falló al startup; el interceptor afectado
    /// queda inactivo por el resto del proceso.
    InterceptorDisabled { package: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub seq: u64, // asignado por el EventStore (orden append global)
    pub invocation_id: Uuid,
    pub kind: PipelineEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en ninguna decisión
}
