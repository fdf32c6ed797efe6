//! Definiciones de eventos del pipeline y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{PipelineEvent, PipelineEventKind};
