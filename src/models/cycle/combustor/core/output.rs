use uom::si::f64::MassRate;

use crate::support::flow::FlowStation;

/// Result of a combustor evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustorOutput<Fluid> {
    /// Outlet station, carrying inlet flow plus fuel.
    pub outlet: FlowStation<Fluid>,

    /// Fuel mass flow, `W_in · FAR`.
    pub w_fuel: MassRate,

    pub partials: CombustorPartials,
}

/// Partials of the outlet totals and mass flow, in SI base units.
///
/// `far` is the combustor's fuel-air ratio input. Derivatives not listed are
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustorPartials {
    /// `∂Pt_out/∂Pt_in`
    pub pt_out_pt_in: f64,

    /// `∂Pt_out/∂dPqP`, in Pa.
    pub pt_out_dpqp: f64,

    /// `∂ht_out/∂ht_in`
    pub ht_out_ht_in: f64,

    /// `∂ht_out/∂FAR`, in J/kg.
    pub ht_out_far: f64,

    /// `∂W_out/∂W_in`
    pub m_dot_out_m_dot_in: f64,

    /// `∂W_out/∂FAR`, in kg/s.
    pub m_dot_out_far: f64,
}
