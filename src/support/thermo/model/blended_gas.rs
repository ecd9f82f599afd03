//! Air and combustion products as a blend of two perfect gases.
//!
//! `BlendedGas` treats a burned mixture as pure air plus a lumped
//! "burned fuel" component, each calorically perfect.
//! The mixture constants are mass-weighted by the fuel-air ratio `f`
//! carried in [`CombustionProducts`]:
//!
//! ```text
//! R  = (R_air  + f·R_burned)  / (1 + f)
//! cp = (cp_air + f·cp_burned) / (1 + f)
//! ```
//!
//! Both components share the air reference state, so enthalpy stays
//! continuous as fuel is added and the heat of reaction enters only through
//! a burner's energy balance.
//! Mixing entropy is neglected.

use uom::si::{
    f64::{Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{
        BurnsFuel, HasCp, HasCv, HasEnthalpy, HasEntropy, HasPressure, HasSoundSpeed, StateFrom,
        ThermoModel,
    },
    fluid::{Air, CombustionProducts},
};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};

use super::{
    calorically_perfect::CaloricallyPerfect,
    perfect_gas::{PerfectGasFluid, PerfectGasParameters, PerfectGasParametersError},
};

/// Composition-dependent calorically perfect gas for burner flow paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedGas {
    air: PerfectGasParameters,
    burned: PerfectGasParameters,
    max_far: f64,
}

impl BlendedGas {
    /// Creates a blend of air and the given burned-fuel component.
    ///
    /// `max_far` is the richest fuel-air ratio the blend accepts, normally
    /// the fuel's stoichiometric ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if either component, or the
    /// blend at `max_far`, is non-physical.
    pub fn new(
        air: PerfectGasParameters,
        burned: PerfectGasParameters,
        max_far: f64,
    ) -> Result<Self, PerfectGasParametersError> {
        CaloricallyPerfect::new(air)?;
        CaloricallyPerfect::new(burned)?;

        let blend = Self {
            air,
            burned,
            max_far,
        };
        CaloricallyPerfect::new(blend.parameters(max_far))?;
        Ok(blend)
    }

    /// Air blended with representative kerosene combustion products.
    ///
    /// The burned component is sized so that the stoichiometric mixture
    /// (`f = 0.0676`) has `R ≈ 288.3 J/kg·K` and `cp ≈ 1150 J/kg·K`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the built-in constants are
    /// rejected, which indicates a bug in this constructor.
    pub fn kerosene() -> Result<Self, PerfectGasParametersError> {
        let air = Air::parameters();
        let burned = PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(306.6),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3_282.0),
        )
        .with_reference(air.reference);

        Self::new(air, burned, 0.0676)
    }

    /// Richest fuel-air ratio this blend accepts.
    #[must_use]
    pub fn max_far(&self) -> f64 {
        self.max_far
    }

    /// Ratio of specific heats for the given products.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the fuel-air ratio is
    /// negative or richer than [`BlendedGas::max_far`].
    pub fn gamma(&self, fluid: &CombustionProducts) -> Result<f64, PropertyError> {
        Ok(self.gas(fluid)?.gamma())
    }

    fn parameters(&self, far: f64) -> PerfectGasParameters {
        let blend = |air: f64, burned: f64| (air + far * burned) / (1.0 + far);

        let r = blend(
            self.air.gas_constant.get::<joule_per_kilogram_kelvin>(),
            self.burned.gas_constant.get::<joule_per_kilogram_kelvin>(),
        );
        let cp = blend(
            self.air.cp.get::<joule_per_kilogram_kelvin>(),
            self.burned.cp.get::<joule_per_kilogram_kelvin>(),
        );

        PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(r),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
        )
        .with_reference(self.air.reference)
    }

    fn check_far(&self, far: f64) -> Result<f64, PropertyError> {
        if far.is_nan() || far < 0.0 || far > self.max_far {
            return Err(PropertyError::OutOfDomain {
                context: format!("fuel-air ratio {far} outside [0, {}]", self.max_far),
            });
        }
        Ok(far)
    }

    fn gas(&self, fluid: &CombustionProducts) -> Result<CaloricallyPerfect, PropertyError> {
        let far = self.check_far(fluid.far.get::<ratio>())?;
        CaloricallyPerfect::new(self.parameters(far)).map_err(|err| PropertyError::Calculation {
            context: err.to_string(),
        })
    }
}

impl ThermoModel for BlendedGas {
    type Fluid = CombustionProducts;
}

impl HasPressure for BlendedGas {
    fn pressure(&self, state: &State<CombustionProducts>) -> Result<Pressure, PropertyError> {
        Ok(self.gas(&state.fluid)?.pressure(state.temperature, state.density))
    }
}

impl HasEnthalpy for BlendedGas {
    fn enthalpy(
        &self,
        state: &State<CombustionProducts>,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(self.gas(&state.fluid)?.enthalpy(state.temperature))
    }
}

impl HasEntropy for BlendedGas {
    fn entropy(&self, state: &State<CombustionProducts>) -> Result<SpecificEntropy, PropertyError> {
        let gas = self.gas(&state.fluid)?;
        let p = gas.pressure(state.temperature, state.density);
        Ok(gas.entropy(state.temperature, p))
    }
}

impl HasCp for BlendedGas {
    fn cp(
        &self,
        state: &State<CombustionProducts>,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.gas(&state.fluid)?.cp)
    }
}

impl HasCv for BlendedGas {
    fn cv(
        &self,
        state: &State<CombustionProducts>,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.gas(&state.fluid)?.cv)
    }
}

impl HasSoundSpeed for BlendedGas {
    fn sound_speed(&self, state: &State<CombustionProducts>) -> Result<Velocity, PropertyError> {
        Ok(self.gas(&state.fluid)?.sound_speed(state.temperature))
    }
}

impl StateFrom<(CombustionProducts, ThermodynamicTemperature, Pressure)> for BlendedGas {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (CombustionProducts, ThermodynamicTemperature, Pressure),
    ) -> Result<State<CombustionProducts>, Self::Error> {
        let density = self.gas(&fluid)?.density(temperature, pressure);
        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<(CombustionProducts, Pressure, SpecificEnthalpy)> for BlendedGas {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (CombustionProducts, Pressure, SpecificEnthalpy),
    ) -> Result<State<CombustionProducts>, Self::Error> {
        let gas = self.gas(&fluid)?;
        let temperature = gas.temperature_from_enthalpy(enthalpy);
        Ok(State::new(temperature, gas.density(temperature, pressure), fluid))
    }
}

impl StateFrom<(CombustionProducts, Pressure, SpecificEntropy)> for BlendedGas {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (CombustionProducts, Pressure, SpecificEntropy),
    ) -> Result<State<CombustionProducts>, Self::Error> {
        let gas = self.gas(&fluid)?;
        let temperature = gas.temperature_from_pressure_entropy(pressure, entropy);
        Ok(State::new(temperature, gas.density(temperature, pressure), fluid))
    }
}

impl BurnsFuel for BlendedGas {
    /// Accumulates fuel on an air basis: `f_out = f_in + far·(1 + f_in)`.
    fn burn(
        &self,
        fluid: &CombustionProducts,
        far: Ratio,
    ) -> Result<CombustionProducts, PropertyError> {
        let f_in = self.check_far(fluid.far.get::<ratio>())?;
        let f_out = self.check_far(f_in + far.get::<ratio>() * (1.0 + f_in))?;
        Ok(CombustionProducts::new(Ratio::new::<ratio>(f_out)))
    }

    fn fuel_air_ratio(&self, fluid: &CombustionProducts) -> Ratio {
        fluid.far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::kilopascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::model::PerfectGas;

    fn products(far: f64) -> CombustionProducts {
        CombustionProducts::new(Ratio::new::<ratio>(far))
    }

    #[test]
    fn pure_air_matches_perfect_gas() -> Result<(), PropertyError> {
        let blend = BlendedGas::kerosene().unwrap();
        let air = PerfectGas::<Air>::new().unwrap();

        let t = ThermodynamicTemperature::new::<kelvin>(700.0);
        let p = Pressure::new::<kilopascal>(900.0);

        let mixed = blend.state_from((CombustionProducts::default(), t, p))?;
        let pure: State<Air> = air.state_from((t, p)).unwrap();

        assert_relative_eq!(
            blend.enthalpy(&mixed)?.get::<kilojoule_per_kilogram>(),
            air.enthalpy(&pure)?.get::<kilojoule_per_kilogram>(),
            epsilon = 1e-12
        );
        assert_relative_eq!(blend.gamma(&mixed.fluid)?, air.gamma(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn stoichiometric_blend_constants() -> Result<(), PropertyError> {
        let blend = BlendedGas::kerosene().unwrap();
        let state = blend.state_from((
            products(0.0676),
            ThermodynamicTemperature::new::<kelvin>(2_000.0),
            Pressure::new::<kilopascal>(2_000.0),
        ))?;

        let cp = blend.cp(&state)?.get::<joule_per_kilogram_kelvin>();
        let cv = blend.cv(&state)?.get::<joule_per_kilogram_kelvin>();
        assert_relative_eq!(cp, 1150.0, max_relative = 1e-3);
        assert_relative_eq!(cp - cv, 288.3, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn burning_accumulates_fuel_on_an_air_basis() -> Result<(), PropertyError> {
        let blend = BlendedGas::kerosene().unwrap();

        let once = blend.burn(&CombustionProducts::default(), Ratio::new::<ratio>(0.02))?;
        assert_relative_eq!(once.far.get::<ratio>(), 0.02);

        let twice = blend.burn(&once, Ratio::new::<ratio>(0.01))?;
        assert_relative_eq!(twice.far.get::<ratio>(), 0.02 + 0.01 * 1.02, epsilon = 1e-15);
        Ok(())
    }

    #[test]
    fn rejects_rich_mixtures() {
        let blend = BlendedGas::kerosene().unwrap();
        let result = blend.burn(&products(0.05), Ratio::new::<ratio>(0.05));
        assert!(matches!(result, Err(PropertyError::OutOfDomain { .. })));

        let result = blend.gamma(&products(-0.01));
        assert!(matches!(result, Err(PropertyError::OutOfDomain { .. })));
    }
}
