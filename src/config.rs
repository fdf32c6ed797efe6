//! Configuración central de la demo.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Probabilidad del side-effect de inspiración por sustitución.
    pub inspire_chance: f64,
    /// Si la demo instala el paquete opcional de variación de color.
    pub with_variation: bool,
    /// Semilla opcional del RNG del hook (corridas reproducibles).
    pub rng_seed: Option<u64>,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let inspire_chance = env::var("CRAFTFLOW_INSPIRE_CHANCE").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(0.05);
    let with_variation = env::var("CRAFTFLOW_WITH_VARIATION").ok()
        .map(|v| v != "0" && v.to_lowercase() != "false").unwrap_or(true);
    let rng_seed = env::var("CRAFTFLOW_RNG_SEED").ok().and_then(|v| v.parse().ok());
    AppConfig { inspire_chance, with_variation, rng_seed }
});
