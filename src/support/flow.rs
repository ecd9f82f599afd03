//! Flow stations and the relations that move them through an element.
//!
//! A cycle element is a composition of small pieces:
//!
//! - explicit algebraic relations with analytic partials
//!   ([`MachLossMap`], [`PressureLoss`], [`HeatAddition`], [`FuelMixing`]),
//!   each implementing [`Differentiable`](crate::support::partials::Differentiable);
//! - the total-state solve, which fixes [`TotalProperties`] from total
//!   pressure and enthalpy;
//! - the static-state solve ([`statics`]), which walks the isentrope to a
//!   target Mach number or flow area.
//!
//! Elements in [`models`](crate::models) wire these together and apply the
//! chain rule to the relation partials.

mod error;
mod fuel_mixing;
mod heat_addition;
mod mach_loss;
mod pressure_loss;
mod station;
mod traits;

pub mod statics;

pub use error::ThermoError;
pub use fuel_mixing::{Fuel, FuelMixing, FuelMixingPartials};
pub use heat_addition::{HeatAddition, HeatAdditionPartials};
pub use mach_loss::{MACH_EXPONENT_THRESHOLD, MachLossMap, MachLossMode, MachLossPartials};
pub use pressure_loss::{PressureLoss, PressureLossPartials};
pub use station::{FlowStation, StaticProperties, TotalProperties};
pub use traits::FlowThermoModel;
