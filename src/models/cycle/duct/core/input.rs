use uom::si::f64::Power;

use crate::{
    models::cycle::Loss,
    support::flow::{FlowStation, statics::StaticTarget},
};

/// Inlet flow and controls for a duct evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DuctInput<Fluid> {
    /// Inlet station.
    ///
    /// Its static Mach number is read only when the loss map is active.
    pub inlet: FlowStation<Fluid>,

    /// Pressure loss, as a fraction or as a Mach-normalized scalar.
    pub loss: Loss,

    /// Heat added to the flow. Negative values extract heat.
    pub q_dot: Power,

    /// What fixes the outlet static state, when statics are enabled.
    pub exit: Option<StaticTarget>,
}
