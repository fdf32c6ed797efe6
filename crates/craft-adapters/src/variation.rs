//! Simulación del pase de variación de color del paquete opcional.
//!
//! El paquete real introduce variedades de color para items recién
//! spawneados; acá el jitter es determinista (corrimiento fijo por canal)
//! para que tests y demos puedan observar si el pase corrió o no.

use craft_core::MutationPass;
use craft_domain::ItemInstance;

/// Identificador estable del paquete opcional en el catálogo del host.
pub const COLOR_VARIATION_PACKAGE: &str = "tde.enhancement";
/// Entry point publicado por ese paquete.
pub const COLOR_VARIATION_ENTRY: &str = "color_variation";

#[derive(Debug, Clone)]
pub struct ColorVariationPass {
    shift: u8,
}

impl ColorVariationPass {
    pub fn new(shift: u8) -> Self {
        Self { shift }
    }
}

impl Default for ColorVariationPass {
    fn default() -> Self {
        Self { shift: 0x10 }
    }
}

impl MutationPass for ColorVariationPass {
    fn name(&self) -> &str {
        COLOR_VARIATION_ENTRY
    }

    fn mutate(&self, batch: &mut [ItemInstance]) {
        for item in batch.iter_mut() {
            item.color.r = item.color.r.wrapping_add(self.shift);
            item.color.g = item.color.g.wrapping_sub(self.shift);
            item.color.b = item.color.b.wrapping_add(self.shift / 2);
        }
    }
}
