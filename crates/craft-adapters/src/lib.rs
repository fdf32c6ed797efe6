//! craft-adapters: contenido concreto cableado sobre craft-core.
//!
//! Este crate provee:
//! - Etapas de receta: `WashApparelStage` (el target de sustitución, sin
//!   productos propios) y `PlainRecipeStage` (receta ordinaria, pass-through).
//! - `ColorVariationPass`: simulación del pase cosmético del paquete opcional
//!   de terceros, registrable en un `ModCatalog`.
//! - `InspirationHook`: side-effect probabilístico (p = 0.05 por defecto).
//! - `standard_registry`: el bootstrap estándar del mod.

pub mod hooks;
pub mod stages;
pub mod variation;

pub use hooks::InspirationHook;
pub use stages::{PlainRecipeStage, WashApparelStage};
pub use variation::{ColorVariationPass, COLOR_VARIATION_ENTRY, COLOR_VARIATION_PACKAGE};

use craft_core::{AvailabilityProbe, InterceptorRegistry, ModCatalog, SideEffectHook, SubstitutionInterceptor, TriggerId};

/// Bootstrap estándar: sustitución sobre el trigger de lavado más la sonda
/// del paquete de variación de color. Corre una sola vez al startup.
pub fn standard_registry(catalog: &ModCatalog, hook: Option<Box<dyn SideEffectHook>>) -> InterceptorRegistry {
    let mut substitution = SubstitutionInterceptor::new(TriggerId::new(WashApparelStage::TRIGGER));
    if let Some(h) = hook {
        substitution = substitution.with_hook(h);
    }
    InterceptorRegistry::bootstrap(catalog,
                                   vec![Box::new(substitution)],
                                   Some(AvailabilityProbe::new(COLOR_VARIATION_PACKAGE, COLOR_VARIATION_ENTRY)))
}
