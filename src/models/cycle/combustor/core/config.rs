use uom::si::f64::Ratio;

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    flow::{Fuel, statics::StaticsConfig},
};

/// Configuration for a [`Combustor`](crate::models::cycle::combustor::Combustor).
#[derive(Debug, Clone, Copy)]
pub struct CombustorConfig {
    pub fuel: Fuel,

    /// Fraction of the fuel's heating value released into the flow.
    pub efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,

    /// Whether to solve for outlet static properties.
    pub statics: bool,

    /// Static-state solver settings.
    pub solver: StaticsConfig,
}

impl Default for CombustorConfig {
    fn default() -> Self {
        Self {
            fuel: Fuel::default(),
            efficiency: UnitIntervalLowerOpen::one(),
            statics: true,
            solver: StaticsConfig::default(),
        }
    }
}
