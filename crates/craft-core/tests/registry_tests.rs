use std::sync::Arc;

use craft_core::{
    AvailabilityProbe, CraftingPipeline, GuardDecision, InterceptorRegistry, ModCatalog,
    MutationPass, ProbeError, SubstitutionInterceptor, TriggerId,
};
use craft_core::{EventStore, PipelineEventKind};
use craft_domain::{ItemInstance, ItemTemplate, TemplateBook};

#[derive(Debug)]
struct NoopPass;

impl MutationPass for NoopPass {
    fn name(&self) -> &str {
        "noop"
    }
    fn mutate(&self, _batch: &mut [ItemInstance]) {}
}

fn probe() -> AvailabilityProbe {
    AvailabilityProbe::new("tde.enhancement", "color_variation")
}

#[test]
fn probe_reports_package_absent() {
    let catalog = ModCatalog::new();
    let err = probe().probe(&catalog).unwrap_err();
    assert_eq!(err, ProbeError::PackageAbsent("tde.enhancement".to_string()));
}

#[test]
fn probe_reports_entry_point_absent() {
    let mut catalog = ModCatalog::new();
    catalog.register("tde.enhancement", "something_else", Arc::new(NoopPass));
    let err = probe().probe(&catalog).unwrap_err();
    assert_eq!(err,
               ProbeError::EntryPointAbsent { package: "tde.enhancement".to_string(),
                                              entry: "color_variation".to_string() });
}

#[test]
fn bootstrap_with_dependency_present_activates_guard() {
    let mut catalog = ModCatalog::new();
    catalog.register("tde.enhancement", "color_variation", Arc::new(NoopPass));

    let registry = InterceptorRegistry::bootstrap(&catalog,
                                                  vec![Box::new(SubstitutionInterceptor::new(TriggerId::new("wash_apparel")))],
                                                  Some(probe()));

    assert!(registry.guard().is_some());
    assert!(registry.disabled().is_empty());
}

#[test]
fn bootstrap_with_dependency_absent_completes_and_guard_is_inert() {
    let catalog = ModCatalog::new();
    let registry = InterceptorRegistry::bootstrap(&catalog,
                                                  vec![Box::new(SubstitutionInterceptor::new(TriggerId::new("wash_apparel")))],
                                                  Some(probe()));

    assert!(registry.guard().is_none());
    assert_eq!(registry.disabled().len(), 1);
    assert_eq!(registry.disabled()[0].0, "tde.enhancement");

    // el pipeline construido sobre este registro es inerte para variación
    let mut pipeline = CraftingPipeline::new(TemplateBook::new(), registry);
    assert!(!pipeline.variation_active());

    let template = ItemTemplate::new("shirt", "Shirt");
    let mut batch = vec![ItemInstance::spawn(&template, None)];
    let before = batch.clone();
    assert_eq!(pipeline.apply_variation(&mut batch), GuardDecision::Inactive);
    assert_eq!(batch, before);

    // y el evento de diagnóstico quedó registrado una sola vez
    let disabled_events: Vec<_> = pipeline.events()
                                          .list_all()
                                          .into_iter()
                                          .filter(|e| matches!(e.kind, PipelineEventKind::InterceptorDisabled { .. }))
                                          .collect();
    assert_eq!(disabled_events.len(), 1);
}
