//! Property relations shared by the calorically perfect gas models.
//!
//! Ideal gas equation of state `p = ρ·R·T` with constant `cp`, and enthalpy
//! and entropy measured from a reference state.

use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, TemperatureDifference},
};

use super::perfect_gas::{PerfectGasParameters, PerfectGasParametersError, PerfectGasReference};

/// Validated constants of one calorically perfect gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CaloricallyPerfect {
    pub(crate) r: SpecificGasConstant,
    pub(crate) cp: SpecificHeatCapacity,
    pub(crate) cv: SpecificHeatCapacity,
    pub(crate) reference: PerfectGasReference,
}

impl CaloricallyPerfect {
    /// Validates the parameters and derives `cv = cp − R`.
    pub(crate) fn new(parameters: PerfectGasParameters) -> Result<Self, PerfectGasParametersError> {
        let r = parameters.gas_constant;
        if StrictlyPositive::check(&r.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::GasConstant { r });
        }

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        let t_ref = parameters.reference.temperature;
        if StrictlyPositive::check(&t_ref.get::<thermodynamic_temperature::kelvin>()).is_err() {
            return Err(PerfectGasParametersError::ReferenceTemperature { t_ref });
        }

        let p_ref = parameters.reference.pressure;
        if StrictlyPositive::check(&p_ref.get::<pascal>()).is_err() {
            return Err(PerfectGasParametersError::ReferencePressure { p_ref });
        }

        let cv = cp - r;
        if StrictlyPositive::check(&cv.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::NonPhysicalCv { r, cp, cv });
        }

        Ok(Self {
            r,
            cp,
            cv,
            reference: parameters.reference,
        })
    }

    /// Ratio of specific heats, `γ = cp / cv`.
    pub(crate) fn gamma(&self) -> f64 {
        (self.cp / self.cv).get::<ratio>()
    }

    pub(crate) fn pressure(&self, t: ThermodynamicTemperature, density: MassDensity) -> Pressure {
        density * self.r * t
    }

    pub(crate) fn density(&self, t: ThermodynamicTemperature, pressure: Pressure) -> MassDensity {
        pressure / (self.r * t)
    }

    /// `h = h₀ + cp·(T − T₀)`
    pub(crate) fn enthalpy(&self, t: ThermodynamicTemperature) -> SpecificEnthalpy {
        self.reference.enthalpy + self.cp * t.minus(self.reference.temperature)
    }

    /// `s = s₀ + cp·ln(T⁄T₀) − R·ln(p⁄p₀)`
    pub(crate) fn entropy(&self, t: ThermodynamicTemperature, pressure: Pressure) -> SpecificEntropy {
        let PerfectGasReference {
            temperature: t_ref,
            pressure: p_ref,
            entropy: s_ref,
            ..
        } = self.reference;

        s_ref + self.cp * (t / t_ref).ln() - self.r * (pressure / p_ref).ln()
    }

    /// `a = √(γ·R·T)`
    pub(crate) fn sound_speed(&self, t: ThermodynamicTemperature) -> Velocity {
        let r = self.r.get::<joule_per_kilogram_kelvin>();
        let t = t.get::<thermodynamic_temperature::kelvin>();
        Velocity::new::<meter_per_second>((self.gamma() * r * t).sqrt())
    }

    /// Inverts the enthalpy relation for temperature.
    pub(crate) fn temperature_from_enthalpy(
        &self,
        enthalpy: SpecificEnthalpy,
    ) -> ThermodynamicTemperature {
        self.reference.temperature + (enthalpy - self.reference.enthalpy) / self.cp
    }

    /// Inverts the entropy relation for temperature along an isobar.
    pub(crate) fn temperature_from_pressure_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> ThermodynamicTemperature {
        let PerfectGasReference {
            temperature: t_ref,
            pressure: p_ref,
            entropy: s_ref,
            ..
        } = self.reference;

        let exponent = ((entropy - s_ref) + self.r * (pressure / p_ref).ln()) / self.cp;
        t_ref * exponent.get::<ratio>().exp()
    }
}
