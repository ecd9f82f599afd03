//! A combustor burning fuel into the flow.
//!
//! Fuel enters at `W_fuel = W_in · FAR`. The outlet carries the combined
//! flow at the energy-balanced total enthalpy, with its composition updated
//! through the thermo model's [`BurnsFuel`] capability.

mod core;

pub use self::core::{
    CombustorConfig, CombustorError, CombustorInput, CombustorOutput, CombustorPartials,
};

use twine_core::Model;

use crate::support::{
    flow::FlowThermoModel,
    thermo::capability::{BurnsFuel, ThermoModel},
};

/// A combustor as a [`Model`].
#[derive(Debug, Clone)]
pub struct Combustor<Thermo> {
    thermo: Thermo,
    config: CombustorConfig,
}

impl<Thermo> Combustor<Thermo> {
    #[must_use]
    pub fn new(thermo: Thermo, config: CombustorConfig) -> Self {
        Self { thermo, config }
    }

    #[must_use]
    pub fn config(&self) -> &CombustorConfig {
        &self.config
    }
}

impl<Thermo, Fluid> Model for Combustor<Thermo>
where
    Thermo: ThermoModel<Fluid = Fluid> + FlowThermoModel<Fluid> + BurnsFuel,
    Fluid: Clone,
{
    type Input = CombustorInput<Fluid>;
    type Output = CombustorOutput<Fluid>;
    type Error = CombustorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::evaluate(input, &self.config, &self.thermo)
    }
}
