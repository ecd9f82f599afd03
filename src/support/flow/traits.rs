use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::capability::{
        HasCp, HasCv, HasEnthalpy, HasEntropy, HasPressure, HasSoundSpeed, StateFrom, ThermoModel,
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Thermo model bounds required to evaluate flow stations.
///
/// Blanket-implemented for every model with the listed capabilities, so it
/// is only ever used as a bound.
pub trait FlowThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasPressure
    + HasEnthalpy
    + HasEntropy
    + HasCp
    + HasCv
    + HasSoundSpeed
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
    + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}

impl<Fluid, T> FlowThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasPressure
        + HasEnthalpy
        + HasEntropy
        + HasCp
        + HasCv
        + HasSoundSpeed
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
        + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}
