use crate::{models::cycle::LossResult, support::flow::FlowStation};

/// Result of a duct evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DuctOutput<Fluid> {
    /// Outlet station.
    pub outlet: FlowStation<Fluid>,

    /// Both sides of the loss map.
    pub loss: LossResult,

    pub partials: DuctPartials,
}

/// Partials of the duct outputs with respect to the duct inputs.
///
/// Values are in SI base units. `loss` refers to whichever side of the loss
/// map was given, and `mach_in` to the inlet static Mach number.
/// Derivatives not listed are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctPartials {
    /// `∂Pt_out/∂Pt_in`
    pub pt_out_pt_in: f64,

    /// `∂Pt_out/∂loss`, in Pa.
    pub pt_out_loss: f64,

    /// `∂Pt_out/∂MN_in`, in Pa.
    pub pt_out_mach_in: f64,

    /// `∂ht_out/∂ht_in`
    pub ht_out_ht_in: f64,

    /// `∂ht_out/∂W`
    pub ht_out_m_dot: f64,

    /// `∂ht_out/∂Q_dot`
    pub ht_out_q_dot: f64,

    /// Derivative of the computed side of the loss map with respect to the
    /// given side: `∂s_dPqP/∂dPqP` at design, `∂dPqP/∂s_dPqP` off design.
    pub loss_given: f64,

    /// Derivative of the computed side of the loss map with respect to
    /// `MN_in`.
    pub loss_mach_in: f64,
}
