use std::sync::Arc;

use craft_core::{GuardDecision, InMemoryTagStore, MutationPass, TagStore, VariationGuard};
use craft_domain::{Color, ItemInstance, ItemTemplate};

/// Pase cosmético simulado: tiñe todo el batch de un color fijo, de modo que
/// cualquier ejecución sea observable.
#[derive(Debug)]
struct TintPass;

impl MutationPass for TintPass {
    fn name(&self) -> &str {
        "tint"
    }
    fn mutate(&self, batch: &mut [ItemInstance]) {
        for item in batch.iter_mut() {
            item.color = Color::from_rgb(0xFF0000);
        }
    }
}

fn spawn_batch(n: usize) -> Vec<ItemInstance> {
    let template = ItemTemplate::new("shirt", "Shirt");
    (0..n).map(|_| ItemInstance::spawn(&template, None)).collect()
}

#[test]
fn tagged_first_element_suppresses_whole_batch() {
    let guard = VariationGuard::new(Arc::new(TintPass));
    let mut tags = InMemoryTagStore::new();
    let mut batch = spawn_batch(3);

    // primero marcado, el resto explícitamente sin marcar
    tags.mark(batch[0].id);
    tags.register(batch[1].id);
    tags.register(batch[2].id);

    let before = batch.clone();
    let decision = guard.apply(&tags, &mut batch);

    assert_eq!(decision, GuardDecision::Suppressed);
    assert_eq!(batch, before, "suppressed batch must come back unchanged");
}

#[test]
fn untagged_first_element_runs_pass_over_whole_batch() {
    let guard = VariationGuard::new(Arc::new(TintPass));
    let mut tags = InMemoryTagStore::new();
    let mut batch = spawn_batch(2);

    tags.register(batch[0].id);
    // el segundo queda marcado: la decisión es sólo sobre el primero
    tags.mark(batch[1].id);

    let decision = guard.apply(&tags, &mut batch);

    assert_eq!(decision, GuardDecision::Applied);
    assert!(batch.iter().all(|i| i.color == Color::from_rgb(0xFF0000)));
}

#[test]
fn absent_tag_defaults_to_suppress() {
    let guard = VariationGuard::new(Arc::new(TintPass));
    let tags = InMemoryTagStore::new();
    let mut batch = spawn_batch(1);

    // sin entrada en la side table: fail-safe hacia el no-op
    let decision = guard.apply(&tags, &mut batch);
    assert_eq!(decision, GuardDecision::Suppressed);
}

#[test]
fn absent_default_false_lets_pass_run_on_unregistered_batch() {
    let guard = VariationGuard::new(Arc::new(TintPass));
    // side table permisiva: entradas ausentes cuentan como sin marcar
    let tags = InMemoryTagStore::with_absent_default(false);
    let mut batch = spawn_batch(2);

    let decision = guard.apply(&tags, &mut batch);

    assert_eq!(decision, GuardDecision::Applied);
    assert!(batch.iter().all(|i| i.color == Color::from_rgb(0xFF0000)));
}

#[test]
fn empty_batch_is_a_noop() {
    let guard = VariationGuard::new(Arc::new(TintPass));
    let tags = InMemoryTagStore::new();
    let mut batch: Vec<ItemInstance> = vec![];
    assert_eq!(guard.apply(&tags, &mut batch), GuardDecision::EmptyBatch);
}
