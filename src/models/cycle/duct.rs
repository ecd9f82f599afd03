//! A duct with pressure loss and heat addition.
//!
//! Off design the pressure loss may scale with the inlet Mach number through
//! a [`MachLossMap`](crate::support::flow::MachLossMap): `dPqP = s_dPqP · MN^exp`.
//! At design the fraction `dPqP` is given and `s_dPqP` is calibrated from it.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_cycle::{
//!     models::cycle::{
//!         Loss,
//!         duct::{Duct, DuctConfig, DuctInput},
//!     },
//!     support::{
//!         constraint::NonNegative,
//!         flow::{FlowStation, TotalProperties, statics::StaticTarget},
//!         thermo::{fluid::Air, model::PerfectGas},
//!     },
//! };
//! use uom::si::{
//!     f64::{MassRate, Power, Pressure, Ratio, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     pressure::kilopascal,
//!     ratio::ratio,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let thermo = PerfectGas::<Air>::new().unwrap();
//! let total = TotalProperties::from_temperature_pressure(
//!     &thermo,
//!     Air,
//!     ThermodynamicTemperature::new::<kelvin>(600.0),
//!     Pressure::new::<kilopascal>(800.0),
//! )
//! .unwrap();
//! let inlet = FlowStation::new(
//!     MassRate::new::<kilogram_per_second>(25.0),
//!     Ratio::new::<ratio>(0.0),
//!     total,
//! );
//!
//! let duct = Duct::new(thermo, DuctConfig::default());
//! let output = duct
//!     .call(&DuctInput {
//!         inlet,
//!         loss: Loss::Fraction(Ratio::new::<ratio>(0.03)),
//!         q_dot: Power::new::<watt>(0.0),
//!         exit: Some(StaticTarget::Mach(
//!             NonNegative::new(Ratio::new::<ratio>(0.35)).unwrap(),
//!         )),
//!     })
//!     .unwrap();
//!
//! let pt_out = output.outlet.total.pressure.get::<kilopascal>();
//! assert!((pt_out - 776.0).abs() < 1e-9);
//! ```

mod core;

pub use self::core::{DuctConfig, DuctError, DuctInput, DuctOutput, DuctPartials};

use twine_core::Model;

use crate::support::{flow::FlowThermoModel, thermo::capability::ThermoModel};

/// A duct as a [`Model`].
#[derive(Debug, Clone)]
pub struct Duct<Thermo> {
    thermo: Thermo,
    config: DuctConfig,
}

impl<Thermo> Duct<Thermo> {
    #[must_use]
    pub fn new(thermo: Thermo, config: DuctConfig) -> Self {
        Self { thermo, config }
    }

    #[must_use]
    pub fn config(&self) -> &DuctConfig {
        &self.config
    }
}

impl<Thermo, Fluid> Model for Duct<Thermo>
where
    Thermo: ThermoModel<Fluid = Fluid> + FlowThermoModel<Fluid>,
    Fluid: Clone,
{
    type Input = DuctInput<Fluid>;
    type Output = DuctOutput<Fluid>;
    type Error = DuctError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::evaluate(input, &self.config, &self.thermo)
    }
}
