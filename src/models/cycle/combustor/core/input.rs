use uom::si::f64::Ratio;

use crate::support::flow::{FlowStation, statics::StaticTarget};

/// Inlet flow and controls for a combustor evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustorInput<Fluid> {
    pub inlet: FlowStation<Fluid>,

    /// Total pressure loss as a fraction of inlet total pressure.
    pub dpqp: Ratio,

    /// Fuel flow per unit inlet mass flow.
    pub far: Ratio,

    /// What fixes the outlet static state, when statics are enabled.
    pub exit: Option<StaticTarget>,
}
