//! Problem formulation for the static-state solve.

use std::{convert::Infallible, marker::PhantomData};

use twine_core::{EquationProblem, Model};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Area, MassRate, Pressure, Ratio, Velocity},
    mass_rate::kilogram_per_second,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::flow::{
    StaticProperties, ThermoError, TotalProperties, station::gamma, traits::FlowThermoModel,
};

/// Model adapter evaluating the flow at a trial static pressure.
///
/// The static state lies on the total state's isentrope and shares its
/// total enthalpy, which fixes velocity, Mach number, and area.
pub(super) struct StaticModel<'a, Fluid, Thermo> {
    total: &'a TotalProperties<Fluid>,
    m_dot: MassRate,
    thermo: &'a Thermo,
}

impl<'a, Fluid, Thermo> StaticModel<'a, Fluid, Thermo> {
    pub(super) fn new(
        total: &'a TotalProperties<Fluid>,
        m_dot: MassRate,
        thermo: &'a Thermo,
    ) -> Self {
        Self {
            total,
            m_dot,
            thermo,
        }
    }
}

impl<Fluid, Thermo> Model for StaticModel<'_, Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: FlowThermoModel<Fluid>,
{
    type Input = Pressure;
    type Output = StaticProperties<Fluid>;
    type Error = ThermoError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let pressure = *input;

        let state = self
            .thermo
            .state_from((self.total.state.fluid.clone(), pressure, self.total.entropy))
            .map_err(|err| ThermoError::new("state_from(static pressure, entropy)", err))?;
        let enthalpy = self
            .thermo
            .enthalpy(&state)
            .map_err(|err| ThermoError::new("enthalpy(static)", err))?;
        let sound_speed = self
            .thermo
            .sound_speed(&state)
            .map_err(|err| ThermoError::new("sound_speed(static)", err))?;
        let gamma = gamma(self.thermo, &state, "static")?;

        // Round-off can leave a tiny negative kinetic energy at the total state.
        let dh = (self.total.enthalpy - enthalpy).get::<joule_per_kilogram>();
        let velocity = Velocity::new::<meter_per_second>((2.0 * dh).max(0.0).sqrt());
        let mach = velocity / sound_speed;
        let area = self.m_dot / (state.density * velocity);

        Ok(StaticProperties {
            temperature: state.temperature,
            density: state.density,
            state,
            pressure,
            enthalpy,
            velocity,
            mach,
            area,
            gamma,
        })
    }
}

/// Residual `MN − MN_target` over the static-to-total pressure ratio.
pub(super) struct MachProblem<Fluid> {
    total_pressure: Pressure,
    target: f64,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid> MachProblem<Fluid> {
    pub(super) fn new(total_pressure: Pressure, target: Ratio) -> Self {
        Self {
            total_pressure,
            target: target.get::<ratio>(),
            _fluid: PhantomData,
        }
    }
}

impl<Fluid> EquationProblem<1> for MachProblem<Fluid> {
    type Input = Pressure;
    type Output = StaticProperties<Fluid>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.total_pressure * x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.mach.get::<ratio>() - self.target])
    }
}

/// Residual `(ρ·V·A − W) / W` over the static-to-total pressure ratio.
pub(super) struct AreaProblem<Fluid> {
    total_pressure: Pressure,
    area: Area,
    m_dot: MassRate,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid> AreaProblem<Fluid> {
    pub(super) fn new(total_pressure: Pressure, area: Area, m_dot: MassRate) -> Self {
        Self {
            total_pressure,
            area,
            m_dot,
            _fluid: PhantomData,
        }
    }
}

impl<Fluid> EquationProblem<1> for AreaProblem<Fluid> {
    type Input = Pressure;
    type Output = StaticProperties<Fluid>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.total_pressure * x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let flow = output.density * output.velocity * self.area;
        let w = self.m_dot.get::<kilogram_per_second>();
        Ok([(flow.get::<kilogram_per_second>() - w) / w])
    }
}
