//! Contrato para interceptores de outputs.
//!
//! Un `OutputInterceptor` recibe el `CraftContext` de la invocación, la side
//! table de tags y los outputs propuestos por la etapa envuelta, y devuelve
//! el conjunto de outputs final. Triggers no reconocidos deben devolver los
//! outputs propuestos verbatim, en el mismo orden.

use craft_domain::ItemInstance;

use crate::errors::CoreError;
use crate::model::CraftContext;
use crate::tag::TagStore;

/// Resultado de aplicar un interceptor (o la cadena completa).
#[derive(Debug)]
pub struct InterceptOutcome {
    pub outputs: Vec<ItemInstance>,
    pub substituted: bool,
    pub side_effect_fired: bool,
}

impl InterceptOutcome {
    /// Pass-through: outputs sin tocar, sin sustitución ni side effects.
    pub fn pass_through(outputs: Vec<ItemInstance>) -> Self {
        Self { outputs,
               substituted: false,
               side_effect_fired: false }
    }
}

/// Trait para interceptores de outputs de etapa.
pub trait OutputInterceptor: std::fmt::Debug {
    /// Nombre estable del interceptor (diagnóstico).
    fn name(&self) -> &str;

    /// Observa la invocación y devuelve el conjunto de outputs resultante.
    /// No debe mutar los ingredientes del contexto.
    fn intercept(&self,
                 ctx: &CraftContext<'_>,
                 tags: &mut dyn TagStore,
                 proposed: Vec<ItemInstance>)
                 -> Result<InterceptOutcome, CoreError>;
}

/// Aplica una cadena de interceptores en orden, de forma determinista. El
/// output de cada interceptor es el input del siguiente.
pub fn apply_interceptors(interceptors: &[Box<dyn OutputInterceptor>],
                          ctx: &CraftContext<'_>,
                          tags: &mut dyn TagStore,
                          proposed: Vec<ItemInstance>)
                          -> Result<InterceptOutcome, CoreError> {
    let mut outputs = proposed;
    let mut substituted = false;
    let mut side_effect_fired = false;
    for i in interceptors.iter() {
        let outcome = i.intercept(ctx, tags, outputs)?;
        outputs = outcome.outputs;
        substituted |= outcome.substituted;
        side_effect_fired |= outcome.side_effect_fired;
    }
    Ok(InterceptOutcome { outputs,
                          substituted,
                          side_effect_fired })
}
