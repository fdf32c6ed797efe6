//! Modelos neutrales entregados a los interceptores (contexto, worker).

pub mod context;

pub use context::{CraftContext, WorkerRef};
