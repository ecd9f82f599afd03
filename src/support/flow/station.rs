use uom::si::f64::{
    Area, MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, Velocity,
};

use crate::support::{
    thermo::State,
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{ThermoError, traits::FlowThermoModel};

/// Flow at a port of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowStation<Fluid> {
    /// Mass flow rate.
    pub m_dot: MassRate,

    /// Fuel-air ratio of the flow.
    pub far: Ratio,

    pub total: TotalProperties<Fluid>,

    /// Static properties, when they have been solved for.
    pub statics: Option<StaticProperties<Fluid>>,
}

impl<Fluid> FlowStation<Fluid> {
    /// Creates a station without static properties.
    #[must_use]
    pub fn new(m_dot: MassRate, far: Ratio, total: TotalProperties<Fluid>) -> Self {
        Self {
            m_dot,
            far,
            total,
            statics: None,
        }
    }

    #[must_use]
    pub fn with_statics(self, statics: StaticProperties<Fluid>) -> Self {
        Self {
            statics: Some(statics),
            ..self
        }
    }

    /// Static Mach number, if statics are known.
    #[must_use]
    pub fn mach(&self) -> Option<Ratio> {
        self.statics.as_ref().map(|statics| statics.mach)
    }
}

/// Stagnation properties of a flow.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalProperties<Fluid> {
    pub state: State<Fluid>,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,

    /// Ratio of specific heats at the total state.
    pub gamma: Ratio,
}

impl<Fluid: Clone> TotalProperties<Fluid> {
    /// Evaluates total properties at an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError`] if the thermo model fails.
    pub fn from_state(
        thermo: &impl FlowThermoModel<Fluid>,
        state: State<Fluid>,
    ) -> Result<Self, ThermoError> {
        let pressure = thermo
            .pressure(&state)
            .map_err(|err| ThermoError::new("pressure(total)", err))?;
        let enthalpy = thermo
            .enthalpy(&state)
            .map_err(|err| ThermoError::new("enthalpy(total)", err))?;
        let entropy = thermo
            .entropy(&state)
            .map_err(|err| ThermoError::new("entropy(total)", err))?;
        let gamma = gamma(thermo, &state, "total")?;

        Ok(Self {
            temperature: state.temperature,
            state,
            pressure,
            enthalpy,
            entropy,
            gamma,
        })
    }

    /// Fixes the total state from total pressure and enthalpy.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError`] if the thermo model fails.
    pub fn from_pressure_enthalpy(
        thermo: &impl FlowThermoModel<Fluid>,
        fluid: Fluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<Self, ThermoError> {
        let state = thermo
            .state_from((fluid, pressure, enthalpy))
            .map_err(|err| ThermoError::new("state_from(total pressure, enthalpy)", err))?;
        Self::from_state(thermo, state)
    }

    /// Fixes the total state from total temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError`] if the thermo model fails.
    pub fn from_temperature_pressure(
        thermo: &impl FlowThermoModel<Fluid>,
        fluid: Fluid,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, ThermoError> {
        let state = thermo
            .state_from((fluid, temperature, pressure))
            .map_err(|err| ThermoError::new("state_from(total temperature, pressure)", err))?;
        Self::from_state(thermo, state)
    }
}

/// Local (static) properties of a moving flow.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticProperties<Fluid> {
    pub state: State<Fluid>,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub density: MassDensity,
    pub velocity: Velocity,
    pub mach: Ratio,

    /// Flow area. Infinite when the flow is at rest.
    pub area: Area,

    /// Ratio of specific heats at the static state.
    pub gamma: Ratio,
}

/// Evaluates `γ = cp / cv` at a state.
pub(crate) fn gamma<Fluid>(
    thermo: &impl FlowThermoModel<Fluid>,
    state: &State<Fluid>,
    which: &str,
) -> Result<Ratio, ThermoError> {
    let cp = thermo
        .cp(state)
        .map_err(|err| ThermoError::new(format!("cp({which})"), err))?;
    let cv = thermo
        .cv(state)
        .map_err(|err| ThermoError::new(format!("cv({which})"), err))?;
    Ok(cp / cv)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, mass_rate::kilogram_per_second,
        pressure::kilopascal, ratio::ratio, thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::{
        fluid::{Air, CombustionProducts},
        model::{BlendedGas, PerfectGas},
    };

    #[test]
    fn total_properties_from_pressure_and_enthalpy() {
        let thermo = PerfectGas::<Air>::new().unwrap();
        let pt = Pressure::new::<kilopascal>(500.0);
        let ht = SpecificEnthalpy::new::<kilojoule_per_kilogram>(1.005 * (600.0 - 273.15));

        let total = TotalProperties::from_pressure_enthalpy(&thermo, Air, pt, ht).unwrap();

        assert_relative_eq!(total.temperature.get::<kelvin>(), 600.0, epsilon = 1e-9);
        assert_relative_eq!(total.pressure.get::<kilopascal>(), 500.0, epsilon = 1e-9);
        assert_relative_eq!(total.gamma.get::<ratio>(), thermo.gamma(), epsilon = 1e-12);
    }

    #[test]
    fn blended_gas_errors_carry_context() {
        let thermo = BlendedGas::kerosene().unwrap();
        let rich = CombustionProducts::new(Ratio::new::<ratio>(0.5));

        let err = TotalProperties::from_temperature_pressure(
            &thermo,
            rich,
            ThermodynamicTemperature::new::<kelvin>(1_500.0),
            Pressure::new::<kilopascal>(1_000.0),
        )
        .unwrap_err();

        assert!(err.context.contains("state_from"), "{err}");
    }

    #[test]
    fn station_without_statics_has_no_mach() {
        let thermo = PerfectGas::<Air>::new().unwrap();
        let total = TotalProperties::from_temperature_pressure(
            &thermo,
            Air,
            ThermodynamicTemperature::new::<kelvin>(288.15),
            Pressure::new::<kilopascal>(101.325),
        )
        .unwrap();

        let station = FlowStation::new(
            MassRate::new::<kilogram_per_second>(10.0),
            Ratio::new::<ratio>(0.0),
            total,
        );
        assert_eq!(station.mach(), None);
    }
}
