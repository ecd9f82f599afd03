use crate::support::{
    constraint::{Constrained, NonNegative},
    flow::statics::StaticsConfig,
};

/// Configuration for a [`Duct`](crate::models::cycle::duct::Duct).
#[derive(Debug, Clone, Copy)]
pub struct DuctConfig {
    /// Mach number exponent of the loss map.
    ///
    /// Zero (the default) makes the loss independent of the inlet Mach number.
    pub mach_exponent: Constrained<f64, NonNegative>,

    /// Whether to solve for outlet static properties.
    pub statics: bool,

    /// Static-state solver settings.
    pub solver: StaticsConfig,
}

impl Default for DuctConfig {
    fn default() -> Self {
        Self {
            mach_exponent: NonNegative::zero(),
            statics: true,
            solver: StaticsConfig::default(),
        }
    }
}
