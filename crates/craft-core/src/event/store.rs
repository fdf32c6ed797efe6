use chrono::Utc;
use uuid::Uuid;

use super::{PipelineEvent, PipelineEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, invocation_id: Uuid, kind: PipelineEventKind) -> PipelineEvent;
    /// Lista los eventos de una invocación (orden ascendente por seq).
    fn list(&self, invocation_id: Uuid) -> Vec<PipelineEvent>;
    /// Lista todos los eventos en orden de append.
    fn list_all(&self) -> Vec<PipelineEvent>;
}

pub struct InMemoryEventStore {
    pub inner: Vec<PipelineEvent>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, invocation_id: Uuid, kind: PipelineEventKind) -> PipelineEvent {
        let seq = self.inner.len() as u64;
        let ev = PipelineEvent { seq, invocation_id, kind, ts: Utc::now() };
        self.inner.push(ev.clone());
        ev
    }

    fn list(&self, invocation_id: Uuid) -> Vec<PipelineEvent> {
        self.inner.iter().filter(|e| e.invocation_id == invocation_id).cloned().collect()
    }

    fn list_all(&self) -> Vec<PipelineEvent> {
        self.inner.clone()
    }
}
