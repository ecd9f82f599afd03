use uom::si::f64::Ratio;

use crate::support::thermo::PropertyError;

use super::ThermoModel;

/// Capability for adding fuel to a fluid and burning it to completion.
///
/// Models whose fluid carries composition implement this so a combustor can
/// ask for the products without knowing how composition is represented.
pub trait BurnsFuel: ThermoModel {
    /// Returns the fluid that results from burning `far` mass of fuel per unit
    /// mass of the incoming `fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the resulting mixture is outside the
    /// model's valid domain.
    fn burn(&self, fluid: &Self::Fluid, far: Ratio) -> Result<Self::Fluid, PropertyError>;

    /// Returns the fuel-air ratio carried by `fluid`, on an air basis.
    fn fuel_air_ratio(&self, fluid: &Self::Fluid) -> Ratio;
}
