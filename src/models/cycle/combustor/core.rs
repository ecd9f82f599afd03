//! Combustor evaluation.

mod config;
mod error;
mod input;
mod output;

pub use config::CombustorConfig;
pub use error::CombustorError;
pub use input::CombustorInput;
pub use output::{CombustorOutput, CombustorPartials};

use uom::si::{
    available_energy::kilojoule_per_kilogram, mass_rate::kilogram_per_second, pressure::kilopascal,
    ratio::ratio, thermodynamic_temperature::kelvin,
};

use crate::support::{
    flow::{
        FlowStation, FlowThermoModel, FuelMixing, PressureLoss, ThermoError, TotalProperties,
        statics,
    },
    thermo::capability::BurnsFuel,
};

/// Largest accepted difference between the inlet station fuel-air ratio and
/// the one carried by its fluid.
const FAR_TOLERANCE: f64 = 1e-12;

/// Evaluates a combustor.
///
/// The outlet fuel-air ratio is read from the burned fluid, so the station
/// and its composition always agree.
///
/// # Errors
///
/// Returns [`CombustorError`] if the inlet station and its fluid disagree on
/// the fuel-air ratio, if the thermo model rejects the burned
/// composition, if statics are enabled without a target, or if the total or
/// static solve fails.
pub(super) fn evaluate<Fluid, Thermo>(
    input: &CombustorInput<Fluid>,
    config: &CombustorConfig,
    thermo: &Thermo,
) -> Result<CombustorOutput<Fluid>, CombustorError>
where
    Fluid: Clone,
    Thermo: FlowThermoModel<Fluid> + BurnsFuel,
{
    let inlet = &input.inlet;
    let far = input.far.get::<ratio>();

    let fluid_far = thermo.fuel_air_ratio(&inlet.total.state.fluid);
    if (fluid_far - inlet.far).get::<ratio>().abs() > FAR_TOLERANCE {
        return Err(CombustorError::FarMismatch {
            station: inlet.far,
            fluid: fluid_far,
        });
    }

    let w_fuel = inlet.m_dot * far;
    let m_dot_out = inlet.m_dot + w_fuel;

    let fluid = thermo
        .burn(&inlet.total.state.fluid, input.far)
        .map_err(|err| ThermoError::new("burn", err))?;
    let far_out = thermo.fuel_air_ratio(&fluid);

    let mixing = FuelMixing::new(config.fuel, config.efficiency);
    let pt_in = inlet.total.pressure;
    let ht_in = inlet.total.enthalpy;
    let pt_out = PressureLoss.outlet_pressure(pt_in, input.dpqp);
    let ht_out = mixing.outlet_enthalpy(ht_in, input.far);

    let total = TotalProperties::from_pressure_enthalpy(thermo, fluid, pt_out, ht_out)?;
    let mut outlet = FlowStation::new(m_dot_out, far_out, total);

    if config.statics {
        let target = input.exit.ok_or(CombustorError::MissingStaticTarget)?;
        let stat = statics::solve(&outlet.total, m_dot_out, target, &config.solver, thermo)?;
        outlet = outlet.with_statics(stat);
    }

    let pressure = PressureLoss.partials(pt_in, input.dpqp);
    let energy = mixing.partials(ht_in, input.far);
    let partials = CombustorPartials {
        pt_out_pt_in: pressure.pt_in,
        pt_out_dpqp: pressure.dpqp,
        ht_out_ht_in: energy.ht_in,
        ht_out_far: energy.far,
        m_dot_out_m_dot_in: 1.0 + far,
        m_dot_out_far: inlet.m_dot.get::<kilogram_per_second>(),
    };

    tracing::debug!(
        w_fuel_kg_s = w_fuel.get::<kilogram_per_second>(),
        far_out = far_out.get::<ratio>(),
        pt_out_kpa = pt_out.get::<kilopascal>(),
        ht_out_kj_kg = ht_out.get::<kilojoule_per_kilogram>(),
        tt_out_k = outlet.total.temperature.get::<kelvin>(),
        "evaluated combustor"
    );

    Ok(CombustorOutput {
        outlet,
        w_fuel,
        partials,
    })
}
