//! Intercepción de outputs y guard de mutación.
//!
//! Dos seams independientes:
//! - `OutputInterceptor`: reescribe condicionalmente los outputs propuestos
//!   por una etapa de crafteo (`SubstitutionInterceptor` es la implementación
//!   principal).
//! - `MutationPass` + `VariationGuard`: envuelve un pase cosmético de
//!   terceros y lo suprime para items ya marcados en la side table.

pub mod mutation;
pub mod output;
pub mod substitution;

pub use mutation::{GuardDecision, MutationPass, VariationGuard};
pub use output::{apply_interceptors, InterceptOutcome, OutputInterceptor};
pub use substitution::{SideEffectHook, SubstitutionInterceptor};
