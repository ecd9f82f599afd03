use thiserror::Error;
use uom::si::f64::Ratio;

use crate::support::flow::{ThermoError, statics::StaticsError};

/// Errors that can occur while evaluating a combustor.
#[derive(Debug, Error)]
pub enum CombustorError {
    /// Statics are enabled but the input names no exit target.
    #[error("outlet statics requested without a Mach or area target")]
    MissingStaticTarget,

    /// The inlet station's fuel-air ratio differs from its fluid's.
    #[error("inlet fuel-air ratio {station:?} disagrees with its fluid's {fluid:?}")]
    FarMismatch { station: Ratio, fluid: Ratio },

    /// The outlet composition or total state could not be fixed.
    #[error("outlet total state failed")]
    Total(#[from] ThermoError),

    /// The outlet static state could not be solved.
    #[error("outlet static state failed")]
    Statics(#[from] StaticsError),
}
