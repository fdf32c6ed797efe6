//! Guard de conflicto sobre un pase de mutación cosmética de terceros.
//!
//! El pase envuelto no está bajo control de este sistema; el guard sólo
//! decide si corre o no. La decisión es sobre el primer elemento del batch y
//! aplica all-or-nothing: o el pase corre sobre el batch completo, o no corre.

use std::sync::Arc;

use craft_domain::ItemInstance;

use crate::tag::TagStore;

/// Pase de mutación de terceros, localizado por nombre de entry point al
/// startup. Muta el batch in place.
pub trait MutationPass: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    fn mutate(&self, batch: &mut [ItemInstance]);
}

/// Decisión del guard sobre un batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// El pase envuelto corrió normalmente sobre el batch completo.
    Applied,
    /// El primer elemento estaba marcado; batch devuelto sin cambios.
    Suppressed,
    /// Batch vacío: nada que decidir.
    EmptyBatch,
    /// La dependencia opcional estaba ausente al startup; el guard es inerte.
    Inactive,
}

/// Envuelve un `MutationPass` y lo suprime para items ya procesados.
#[derive(Debug, Clone)]
pub struct VariationGuard {
    pass: Arc<dyn MutationPass>,
}

impl VariationGuard {
    pub fn new(pass: Arc<dyn MutationPass>) -> Self {
        Self { pass }
    }

    pub fn pass_name(&self) -> &str {
        self.pass.name()
    }

    /// Decide y (si corresponde) ejecuta el pase envuelto.
    ///
    /// Sólo se inspecciona el primer elemento; `get` ausente devuelve el
    /// default fail-safe del store (tratar como marcado = suprimir).
    pub fn apply(&self, tags: &dyn TagStore, batch: &mut [ItemInstance]) -> GuardDecision {
        let first = match batch.first() {
            None => return GuardDecision::EmptyBatch,
            Some(f) => f,
        };
        if tags.get(first.id) {
            return GuardDecision::Suppressed;
        }
        self.pass.mutate(batch);
        GuardDecision::Applied
    }
}
