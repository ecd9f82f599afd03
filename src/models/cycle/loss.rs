//! Loss resolution shared by the cycle elements.

use thiserror::Error;
use uom::{ConstZero, si::f64::Ratio};

use crate::support::{
    constraint::{Constrained, NonNegative},
    flow::{MachLossMap, MachLossPartials},
};

/// Pressure loss as given to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loss {
    /// The loss fraction `dPqP`, normally given at design.
    Fraction(Ratio),

    /// The loss scalar `s_dPqP`, normally given off design.
    ///
    /// With an inactive Mach loss map the scalar is the fraction.
    Scalar(Ratio),
}

/// Both sides of the Mach loss map after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossResult {
    /// Loss fraction `dPqP` applied to the total pressure.
    pub fraction: Ratio,

    /// Loss scalar `s_dPqP`.
    pub scalar: Ratio,
}

/// The Mach loss map is active but the inlet has no static properties.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("inlet Mach number is required when the Mach loss map is active")]
pub struct MissingInletMach;

/// A resolved loss with the partials of its fraction and of the computed side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ResolvedLoss {
    pub(super) result: LossResult,

    /// `∂dPqP/∂given` and `∂dPqP/∂MN_in`.
    pub(super) fraction_partials: MachLossPartials,

    /// `∂computed/∂given` and `∂computed/∂MN_in`, where the computed side is
    /// `s_dPqP` at design and `dPqP` off design.
    pub(super) computed_partials: MachLossPartials,
}

/// Evaluates the Mach loss map for whichever side of it is given.
pub(super) fn resolve(
    exponent: Constrained<f64, NonNegative>,
    loss: Loss,
    inlet_mach: Option<Ratio>,
) -> Result<ResolvedLoss, MissingInletMach> {
    let (given, map) = match loss {
        Loss::Fraction(fraction) => (fraction, MachLossMap::design(exponent)),
        Loss::Scalar(scalar) => (scalar, MachLossMap::off_design(exponent)),
    };

    if !map.is_active() {
        return Ok(ResolvedLoss {
            result: LossResult {
                fraction: given,
                scalar: given,
            },
            fraction_partials: map.partials(given, Ratio::ZERO),
            computed_partials: map.partials(given, Ratio::ZERO),
        });
    }

    let mach = inlet_mach.ok_or(MissingInletMach)?;
    let computed = map.evaluate(given, mach);
    let computed_partials = map.partials(given, mach);

    Ok(match loss {
        Loss::Fraction(fraction) => ResolvedLoss {
            result: LossResult {
                fraction,
                scalar: computed,
            },
            fraction_partials: MachLossPartials {
                given: 1.0,
                mach: 0.0,
            },
            computed_partials,
        },
        Loss::Scalar(scalar) => ResolvedLoss {
            result: LossResult {
                fraction: computed,
                scalar,
            },
            fraction_partials: computed_partials,
            computed_partials,
        },
    })
}
