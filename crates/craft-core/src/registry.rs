//! Registro de interceptores con bootstrap único al startup.
//!
//! La dependencia opcional de terceros se modela como capability explícita:
//! un `ModCatalog` expone pases de mutación por `(package_id, entry_point)`
//! estables, en lugar de reflexionar sobre internals por nombre. Cada sonda
//! corre exactamente una vez; una sonda fallida registra un diagnóstico y
//! desactiva el interceptor afectado por el resto del proceso (log-and-skip,
//! nunca fatal). No hay teardown: la vida del proceso acota al registro.

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;

use crate::intercept::{MutationPass, OutputInterceptor, VariationGuard};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProbeError {
    #[error("optional package '{0}' is not installed")]
    PackageAbsent(String),
    #[error("package '{package}' has no entry point '{entry}'")]
    EntryPointAbsent { package: String, entry: String },
}

/// Vista del host sobre los paquetes opcionales instalados y sus entry
/// points publicados.
#[derive(Default, Clone)]
pub struct ModCatalog {
    passes: HashMap<(String, String), Arc<dyn MutationPass>>,
}

impl ModCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self,
                    package_id: impl Into<String>,
                    entry_point: impl Into<String>,
                    pass: Arc<dyn MutationPass>) {
        self.passes.insert((package_id.into(), entry_point.into()), pass);
    }

    pub fn contains_package(&self, package_id: &str) -> bool {
        self.passes.keys().any(|(p, _)| p == package_id)
    }

    pub fn find(&self, package_id: &str, entry_point: &str) -> Option<Arc<dyn MutationPass>> {
        self.passes
            .get(&(package_id.to_string(), entry_point.to_string()))
            .cloned()
    }
}

/// Sonda de disponibilidad: consulta el catálogo una sola vez al startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityProbe {
    pub package_id: String,
    pub entry_point: String,
}

impl AvailabilityProbe {
    pub fn new(package_id: impl Into<String>, entry_point: impl Into<String>) -> Self {
        Self { package_id: package_id.into(),
               entry_point: entry_point.into() }
    }

    pub fn probe(&self, catalog: &ModCatalog) -> Result<Arc<dyn MutationPass>, ProbeError> {
        if !catalog.contains_package(&self.package_id) {
            return Err(ProbeError::PackageAbsent(self.package_id.clone()));
        }
        catalog.find(&self.package_id, &self.entry_point)
               .ok_or_else(|| ProbeError::EntryPointAbsent { package: self.package_id.clone(),
                                                             entry: self.entry_point.clone() })
    }
}

/// Resultado del bootstrap: interceptores activos, guard opcional y el
/// detalle de lo que quedó desactivado.
#[derive(Debug)]
pub struct InterceptorRegistry {
    interceptors: Vec<Box<dyn OutputInterceptor>>,
    guard: Option<VariationGuard>,
    disabled: Vec<(String, String)>, // (package_id, motivo)
}

impl InterceptorRegistry {
    /// Inicializa el registro una vez. Falla cerrado por interceptor: una
    /// sonda fallida desactiva su guard sin impedir que el startup complete.
    pub fn bootstrap(catalog: &ModCatalog,
                     interceptors: Vec<Box<dyn OutputInterceptor>>,
                     guard_probe: Option<AvailabilityProbe>)
                     -> Self {
        let mut guard = None;
        let mut disabled = Vec::new();

        if let Some(probe) = guard_probe {
            match probe.probe(catalog) {
                Ok(pass) => {
                    info!("variation guard active over pass '{}'", pass.name());
                    guard = Some(VariationGuard::new(pass));
                }
                Err(e) => {
                    warn!("availability probe failed, interceptor stays inactive: {e}");
                    disabled.push((probe.package_id.clone(), e.to_string()));
                }
            }
        }

        Self { interceptors,
               guard,
               disabled }
    }

    pub fn interceptors(&self) -> &[Box<dyn OutputInterceptor>] {
        &self.interceptors
    }

    pub fn guard(&self) -> Option<&VariationGuard> {
        self.guard.as_ref()
    }

    pub fn disabled(&self) -> &[(String, String)] {
        &self.disabled
    }

    pub(crate) fn into_parts(self) -> (Vec<Box<dyn OutputInterceptor>>, Option<VariationGuard>, Vec<(String, String)>) {
        (self.interceptors, self.guard, self.disabled)
    }
}
