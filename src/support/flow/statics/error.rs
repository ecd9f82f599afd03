use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Area, Ratio};

use crate::support::flow::ThermoError;

/// Errors that can occur while solving for static properties.
#[derive(Debug, Error)]
pub enum StaticsError {
    /// A thermodynamic model operation failed.
    #[error("static state evaluation failed")]
    Thermo(#[from] ThermoError),

    /// The target area is smaller than the sonic area for this flow.
    #[error("flow is choked: area {area:?} is below the critical area {critical_area:?}")]
    Choked { area: Area, critical_area: Area },

    /// The target Mach number needs a lower pressure ratio than
    /// [`StaticsConfig::min_pressure_ratio`](super::StaticsConfig::min_pressure_ratio).
    #[error("Mach target {mach:?} exceeds {max_mach:?}, the fastest flow in the search interval")]
    MachOutOfRange { mach: Ratio, max_mach: Ratio },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
