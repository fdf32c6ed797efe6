//! Side table de tags "ya procesado", con granularidad por instancia.
//!
//! La fuente original adjuntaba el flag al template compartido, marcando de
//! paso todas las instancias de ese template; aquí la clave es el
//! `InstanceId` estable de cada item. El contrato de lectura/escritura se
//! conserva: `get` devuelve el valor almacenado o un default fail-safe cuando
//! la entrada está ausente, y no existe operación de des-marcado (monotónico).
use std::collections::HashMap;

use craft_domain::InstanceId;

/// Flag booleano por instancia, legible por cualquier componente del sistema
/// (incluido código de terceros). Su esquema es contrato público.
pub trait TagStore {
    /// Valor almacenado, o el default cuando la entrada está entera ausente.
    fn get(&self, id: InstanceId) -> bool;
    /// Marca la instancia como procesada. Monotónico: no hay unset.
    fn mark(&mut self, id: InstanceId);
    /// Inicialización del lado productor: inserta `false` sólo si no existe
    /// entrada. Nunca pisa un `true` previo.
    fn register(&mut self, id: InstanceId);
}

/// Implementación in-memory. El default para entradas ausentes es `true`
/// ("tratar como ya procesado"): ante ausencia total de información el
/// downstream no muta nada, un fail-safe hacia el no-op.
#[derive(Debug, Clone)]
pub struct InMemoryTagStore {
    entries: HashMap<InstanceId, bool>,
    default_when_absent: bool,
}

impl InMemoryTagStore {
    pub fn new() -> Self {
        Self { entries: HashMap::new(),
               default_when_absent: true }
    }

    /// Variante con default explícito para entradas ausentes.
    pub fn with_absent_default(default_when_absent: bool) -> Self {
        Self { entries: HashMap::new(),
               default_when_absent }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryTagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStore for InMemoryTagStore {
    fn get(&self, id: InstanceId) -> bool {
        self.entries.get(&id).copied().unwrap_or(self.default_when_absent)
    }

    fn mark(&mut self, id: InstanceId) {
        self.entries.insert(id, true);
    }

    fn register(&mut self, id: InstanceId) {
        self.entries.entry(id).or_insert(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_defaults_to_processed() {
        let store = InMemoryTagStore::new();
        assert!(store.get(InstanceId::new()));
    }

    #[test]
    fn register_then_mark_is_monotonic() {
        let mut store = InMemoryTagStore::new();
        let id = InstanceId::new();

        store.register(id);
        assert!(!store.get(id));

        store.mark(id);
        assert!(store.get(id));

        // ni register ni un segundo mark lo revierten
        store.register(id);
        store.mark(id);
        assert!(store.get(id));
    }
}
