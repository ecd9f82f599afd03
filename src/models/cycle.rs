//! Gas-turbine cycle flow elements.
//!
//! Each element reads one inlet [`FlowStation`](crate::support::flow::FlowStation)
//! plus scalar controls, and produces the outlet station together with the
//! analytic partials of its outlet totals.
//!
//! - [`duct`]: pressure loss, optionally scaled by inlet Mach number, and
//!   heat addition.
//! - [`combustor`]: pressure loss and fuel burned into the flow.

pub mod combustor;
pub mod duct;

mod loss;

pub use loss::{Loss, LossResult, MissingInletMach};
