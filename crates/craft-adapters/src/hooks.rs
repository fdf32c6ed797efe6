//! Side-effect hooks probabilísticos.

use std::cell::RefCell;
use std::fmt;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use craft_core::{SideEffectHook, WorkerRef};
use craft_domain::ItemInstance;

/// Chance por defecto de inspirar al worker tras una sustitución.
pub const DEFAULT_INSPIRE_CHANCE: f64 = 0.05;

/// Hook probabilístico: con probabilidad fija pide un job de inspiración para
/// el worker. Independiente por invocación, draw uniforme. Fire-and-forget:
/// nunca bloquea ni altera el reemplazo.
pub struct InspirationHook {
    chance: f64,
    rng: RefCell<StdRng>,
}

impl InspirationHook {
    pub fn new(chance: f64) -> Self {
        Self { chance,
               rng: RefCell::new(StdRng::from_entropy()) }
    }

    /// RNG sembrado para tests deterministas.
    pub fn with_seed(chance: f64, seed: u64) -> Self {
        Self { chance,
               rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for InspirationHook {
    fn default() -> Self {
        Self::new(DEFAULT_INSPIRE_CHANCE)
    }
}

impl fmt::Debug for InspirationHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspirationHook").field("chance", &self.chance).finish()
    }
}

impl SideEffectHook for InspirationHook {
    fn on_substituted(&self, worker: &WorkerRef, item: &ItemInstance) -> bool {
        let draw: f64 = self.rng.borrow_mut().gen();
        if draw < self.chance {
            info!("worker '{}' inspired after substituting {}", worker.label, item.id);
            true
        } else {
            false
        }
    }
}
