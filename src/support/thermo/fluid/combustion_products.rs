use uom::{ConstZero, si::f64::Ratio};

/// Air mixed with the products of burning fuel in it.
///
/// The fuel-air ratio is the mass of fuel burned per unit mass of air.
/// The default value is pure air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionProducts {
    pub far: Ratio,
}

impl CombustionProducts {
    /// Returns products at the given fuel-air ratio.
    #[must_use]
    pub fn new(far: Ratio) -> Self {
        Self { far }
    }
}

impl Default for CombustionProducts {
    fn default() -> Self {
        Self { far: Ratio::ZERO }
    }
}
