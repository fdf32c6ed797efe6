use craft_domain::{ItemInstance, TemplateBook};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trigger::TriggerId;

/// Referencia opaca al agente que completó la invocación. Sólo la usa el
/// side-effect hook opcional; el core nunca la inspecciona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRef {
    pub id: Uuid,
    pub label: String,
}

impl WorkerRef {
    pub fn new(label: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(),
               label: label.into() }
    }
}

/// Contexto de una invocación de crafteo entregado a los interceptores.
///
/// Vista de sólo lectura: los interceptores nunca mutan ingredientes in
/// place. Por contrato, cuando el trigger coincide el primer ingrediente es
/// la fuente de la sustitución.
pub struct CraftContext<'a> {
    pub trigger: &'a TriggerId,
    pub ingredients: &'a [ItemInstance],
    pub worker: &'a WorkerRef,
    pub templates: &'a TemplateBook,
}
