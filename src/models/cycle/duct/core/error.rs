use thiserror::Error;

use crate::{
    models::cycle::MissingInletMach,
    support::flow::{ThermoError, statics::StaticsError},
};

/// Errors that can occur while evaluating a duct.
#[derive(Debug, Error)]
pub enum DuctError {
    #[error(transparent)]
    MissingInletMach(#[from] MissingInletMach),

    /// Statics are enabled but the input names no exit target.
    #[error("outlet statics requested without a Mach or area target")]
    MissingStaticTarget,

    /// The outlet total state could not be fixed.
    #[error("outlet total state failed")]
    Total(#[from] ThermoError),

    /// The outlet static state could not be solved.
    #[error("outlet static state failed")]
    Statics(#[from] StaticsError),
}
