//! Demo del pipeline de intercepción-sustitución: bootstrapea el registro,
//! lava una prenda tainted, ejercita el pass-through y muestra el log de
//! eventos resultante.

mod config;

use std::sync::Arc;

use craft_adapters::{
    standard_registry, ColorVariationPass, InspirationHook, PlainRecipeStage, WashApparelStage,
    COLOR_VARIATION_ENTRY, COLOR_VARIATION_PACKAGE,
};
use craft_core::{CraftingPipeline, EventStore, ModCatalog, SideEffectHook, TagStore, WorkerRef};
use craft_domain::{Color, ItemInstance, ItemTemplate, MaterialId, QualityTier, TemplateBook, TemplateId};

use config::CONFIG;

fn demo_templates() -> TemplateBook {
    let mut book = TemplateBook::new();
    book.insert(ItemTemplate::new("shirt", "Button-down shirt").with_max_durability(100));
    book.insert(ItemTemplate::new("duster", "Duster coat").with_max_durability(180));
    book.insert(ItemTemplate::new("plank", "Plank").without_quality());
    book
}

fn demo_catalog() -> ModCatalog {
    let mut catalog = ModCatalog::new();
    if CONFIG.with_variation {
        catalog.register(COLOR_VARIATION_PACKAGE,
                         COLOR_VARIATION_ENTRY,
                         Arc::new(ColorVariationPass::default()));
    }
    catalog
}

fn demo_hook() -> Box<dyn SideEffectHook> {
    match CONFIG.rng_seed {
        Some(seed) => Box::new(InspirationHook::with_seed(CONFIG.inspire_chance, seed)),
        None => Box::new(InspirationHook::new(CONFIG.inspire_chance)),
    }
}

fn run_wash_demo(pipeline: &mut CraftingPipeline<craft_core::InMemoryTagStore, craft_core::InMemoryEventStore>,
                 worker: &WorkerRef) {
    println!("-- wash demo --");
    let book = pipeline.templates().clone();
    let shirt_template = book.get(&TemplateId::new("shirt")).expect("demo template");
    let mut dirty = ItemInstance::spawn(shirt_template, Some(MaterialId::new("cloth")));
    dirty.quality = Some(QualityTier::Good);
    dirty.durability = 40;
    dirty.color = Color::from_rgb(0xAABBCC);
    println!("ingrediente tainted: {dirty}");

    let result = pipeline.complete_craft(&WashApparelStage::new(), vec![dirty], worker)
                         .expect("wash invocation");
    let clean = &result.outputs[0];
    println!("reemplazo limpio:   {clean} (tagged={})", pipeline.tags().get(clean.id));

    let mut batch = result.outputs;
    let decision = pipeline.apply_variation(&mut batch);
    println!("variation sobre el batch lavado: {decision:?} → color {}", batch[0].color);
}

fn run_passthrough_demo(pipeline: &mut CraftingPipeline<craft_core::InMemoryTagStore, craft_core::InMemoryEventStore>,
                        worker: &WorkerRef) {
    println!("-- pass-through demo --");
    let stage = PlainRecipeStage::new("sew_duster", "duster", 1).with_material("leather");
    let result = pipeline.complete_craft(&stage, vec![], worker).expect("plain invocation");
    println!("receta ordinaria produjo {} item(s), sin sustitución", result.outputs.len());

    let mut batch = result.outputs;
    let before = batch[0].color;
    let decision = pipeline.apply_variation(&mut batch);
    println!("variation sobre item ordinario: {decision:?} → color {} (antes {})", batch[0].color, before);
}

fn main() {
    dotenvy::dotenv().ok();

    let catalog = demo_catalog();
    let registry = standard_registry(&catalog, Some(demo_hook()));
    println!("bootstrap: {} interceptor(es), guard activo = {}, desactivados = {}",
             registry.interceptors().len(),
             registry.guard().is_some(),
             registry.disabled().len());

    let mut pipeline = CraftingPipeline::new(demo_templates(), registry);
    let worker = WorkerRef::new("colonist-7");

    run_wash_demo(&mut pipeline, &worker);
    run_passthrough_demo(&mut pipeline, &worker);

    println!("-- event log --");
    for ev in pipeline.events().list_all() {
        println!("[{:>3}] {:?}", ev.seq, ev.kind);
    }
}
