//! Calorically perfect gas model.
//!
//! `PerfectGas` is an ideal gas equation of state with constant heat
//! capacities. For cycle work it is the cold-air-standard model: good enough
//! to size ducts and check derivatives, and exact enough that isentropic
//! relations hold to machine precision.
//!
//! # Reference State
//!
//! Enthalpy and entropy are reported relative to a configurable reference state
//! (`T_ref`, `p_ref`, `h_ref`, `s_ref`).

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
        pressure::atmosphere,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasCp, HasCv, HasEnthalpy, HasEntropy, HasPressure, HasSoundSpeed, StateFrom, ThermoModel,
    },
};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};

use super::calorically_perfect::CaloricallyPerfect;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid reference pressure: {p_ref:?}")]
    ReferencePressure { p_ref: Pressure },
    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}, cv={cv:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        cv: SpecificHeatCapacity,
    },
}

/// Reference values used to define enthalpy/entropy offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasReference {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
}

impl PerfectGasReference {
    /// Returns a standard reference: 0°C, 1 atm, `h_ref = 0`, `s_ref = 0`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            pressure: Pressure::new::<atmosphere>(1.0),
            enthalpy: SpecificEnthalpy::ZERO,
            entropy: SpecificEntropy::ZERO,
        }
    }
}

/// Constant parameters for a calorically perfect gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub reference: PerfectGasReference,
}

impl PerfectGasParameters {
    #[must_use]
    pub fn new(gas_constant: SpecificGasConstant, cp: SpecificHeatCapacity) -> Self {
        Self {
            gas_constant,
            cp,
            reference: PerfectGasReference::standard(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: PerfectGasReference) -> Self {
        self.reference = reference;
        self
    }
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model (constant `cp`/`cv`) using the ideal gas equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas<Fluid> {
    gas: CaloricallyPerfect,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for PerfectGas<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: PerfectGasFluid> PerfectGas<Fluid> {
    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if any required constant is
    /// invalid or if `cv = cp - R` is non-physical.
    pub fn new() -> Result<Self, PerfectGasParametersError> {
        Ok(Self {
            gas: CaloricallyPerfect::new(Fluid::parameters())?,
            _marker: PhantomData,
        })
    }
}

impl<Fluid> PerfectGas<Fluid> {
    /// Ratio of specific heats `γ = cp / cv`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gas.gamma()
    }

    /// Creates a state at the reference temperature and pressure.
    #[must_use]
    pub fn reference_state(&self, fluid: Fluid) -> State<Fluid> {
        let temperature = self.gas.reference.temperature;
        let density = self.gas.density(temperature, self.gas.reference.pressure);
        State::new(temperature, density, fluid)
    }
}

impl<Fluid> HasPressure for PerfectGas<Fluid> {
    /// Computes pressure with `P = ρ·R·T`.
    fn pressure(&self, state: &State<Fluid>) -> Result<Pressure, PropertyError> {
        Ok(self.gas.pressure(state.temperature, state.density))
    }
}

impl<Fluid> HasEnthalpy for PerfectGas<Fluid> {
    /// Computes enthalpy with `h = h₀ + cp·(T − T₀)`.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(self.gas.enthalpy(state.temperature))
    }
}

impl<Fluid> HasEntropy for PerfectGas<Fluid> {
    /// Computes entropy with `s = s₀ + cp·ln(T⁄T₀) − R·ln(p⁄p₀)`.
    fn entropy(&self, state: &State<Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let p = self.gas.pressure(state.temperature, state.density);
        Ok(self.gas.entropy(state.temperature, p))
    }
}

impl<Fluid> HasCp for PerfectGas<Fluid> {
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.gas.cp)
    }
}

impl<Fluid> HasCv for PerfectGas<Fluid> {
    fn cv(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.gas.cv)
    }
}

impl<Fluid> HasSoundSpeed for PerfectGas<Fluid> {
    /// Computes the speed of sound with `a = √(γ·R·T)`.
    fn sound_speed(&self, state: &State<Fluid>) -> Result<Velocity, PropertyError> {
        Ok(self.gas.sound_speed(state.temperature))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        let density = self.gas.density(temperature, pressure);
        Ok(State::new(temperature, density, fluid))
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, SpecificEnthalpy)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Fluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<Fluid>, Self::Error> {
        let temperature = self.gas.temperature_from_enthalpy(enthalpy);
        let density = self.gas.density(temperature, pressure);
        Ok(State::new(temperature, density, fluid))
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, SpecificEntropy)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (Fluid, Pressure, SpecificEntropy),
    ) -> Result<State<Fluid>, Self::Error> {
        let temperature = self.gas.temperature_from_pressure_entropy(pressure, entropy);
        let density = self.gas.density(temperature, pressure);
        Ok(State::new(temperature, density, fluid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::{kilopascal, psi},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::{degree_rankine, kelvin},
        velocity::meter_per_second,
    };

    use crate::support::thermo::fluid::Air;

    fn air() -> PerfectGas<Air> {
        PerfectGas::<Air>::new().expect("air parameters must be physically valid")
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct BadGas;

    impl PerfectGasFluid for BadGas {
        fn parameters() -> PerfectGasParameters {
            PerfectGasParameters::new(
                SpecificGasConstant::new::<joule_per_kilogram_kelvin>(-1.0),
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
            )
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            PerfectGas::<BadGas>::new(),
            Err(PerfectGasParametersError::GasConstant { .. })
        ));
    }

    #[test]
    fn reference_state_is_one_atmosphere() -> Result<(), PropertyError> {
        let thermo = air();
        let state = thermo.reference_state(Air);
        assert_relative_eq!(thermo.pressure(&state)?.get::<kilopascal>(), 101.325);
        assert_eq!(thermo.enthalpy(&state)?, SpecificEnthalpy::ZERO);
        Ok(())
    }

    #[test]
    fn isentropic_expansion_follows_gamma() -> Result<(), PropertyError> {
        let thermo = air();
        let gamma = thermo.gamma();

        let t_total = ThermodynamicTemperature::new::<degree_rankine>(1_000.0);
        let p_total = Pressure::new::<psi>(100.0);
        let total: State<Air> = thermo.state_from((t_total, p_total)).unwrap();
        let s = thermo.entropy(&total)?;

        let p_static = Pressure::new::<psi>(60.0);
        let stat: State<Air> = thermo.state_from((p_static, s)).unwrap();

        let expected = (60.0_f64 / 100.0).powf((gamma - 1.0) / gamma);
        assert_relative_eq!(
            (stat.temperature / total.temperature).value,
            expected,
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn pressure_enthalpy_roundtrip() -> Result<(), PropertyError> {
        let thermo = air();

        let t = ThermodynamicTemperature::new::<kelvin>(750.0);
        let p = Pressure::new::<kilopascal>(1_500.0);
        let state: State<Air> = thermo.state_from((t, p)).unwrap();

        let h = thermo.enthalpy(&state)?;
        let back: State<Air> = thermo.state_from((p, h)).unwrap();

        assert_relative_eq!(back.temperature.get::<kelvin>(), 750.0, epsilon = 1e-9);
        assert_relative_eq!(thermo.pressure(&back)?.get::<kilopascal>(), 1_500.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn pressure_density_roundtrip() -> Result<(), PropertyError> {
        let thermo = air();

        let t = ThermodynamicTemperature::new::<kelvin>(400.0);
        let p = Pressure::new::<kilopascal>(300.0);
        let state: State<Air> = thermo.state_from((t, p)).unwrap();

        let back: State<Air> = thermo.state_from((p, state.density)).unwrap();
        assert_relative_eq!(back.temperature.get::<kelvin>(), 400.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn sound_speed_scales_with_root_temperature() -> Result<(), PropertyError> {
        let thermo = air();
        let p = Pressure::new::<kilopascal>(100.0);

        let cold: State<Air> = thermo
            .state_from((ThermodynamicTemperature::new::<kelvin>(300.0), p))
            .unwrap();
        let hot: State<Air> = thermo
            .state_from((ThermodynamicTemperature::new::<kelvin>(1_200.0), p))
            .unwrap();

        let a_cold = thermo.sound_speed(&cold)?.get::<meter_per_second>();
        let a_hot = thermo.sound_speed(&hot)?.get::<meter_per_second>();
        assert_relative_eq!(a_hot / a_cold, 2.0, epsilon = 1e-12);
        Ok(())
    }
}
