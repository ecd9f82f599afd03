//! Extensions to [`uom`].
//!
//! Every public quantity in this crate is a [`uom`] SI `f64` quantity, so
//! cycle inputs may be given in whatever units the caller has on hand:
//!
//! ```
//! use twine_cycle::support::units::SpecificEnthalpy;
//! use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};
//!
//! let ht = SpecificEnthalpy::new::<kilojoule_per_kilogram>(232.6);
//! assert!((ht.get::<joule_per_kilogram>() - 232_600.0).abs() < 1e-6);
//! ```
//!
//! This module adds the specific thermodynamic quantities [`uom`] does not
//! name, and [`TemperatureDifference`] for subtracting absolute temperatures.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// Shares its dimension with [`uom::si::f64::AvailableEnergy`], so the
/// `uom::si::available_energy` units apply.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] yields another
/// absolute temperature rather than a [`TemperatureInterval`]; see
/// [uom#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_rankine as delta_rankine,
        thermodynamic_temperature::{degree_rankine, kelvin},
    };

    #[test]
    fn burner_temperature_rise() {
        let t_in = ThermodynamicTemperature::new::<degree_rankine>(1_500.0);
        let t_out = ThermodynamicTemperature::new::<degree_rankine>(3_000.0);

        assert_relative_eq!(t_out.minus(t_in).get::<delta_rankine>(), 1_500.0, epsilon = 1e-9);
        assert_relative_eq!(
            t_in.minus(t_out).get::<delta_kelvin>(),
            -1_500.0 / 1.8,
            epsilon = 1e-9
        );
    }

    #[test]
    fn same_temperature_in_different_units() {
        let a = ThermodynamicTemperature::new::<kelvin>(300.0);
        let b = ThermodynamicTemperature::new::<degree_rankine>(540.0);
        assert_relative_eq!(a.minus(b).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}
