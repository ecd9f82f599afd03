//! Static properties of a flow from its total state.
//!
//! The static state shares entropy and total enthalpy with the total state.
//! The unknown is the static-to-total pressure ratio `π`; for a trial `π` the
//! static state follows from `(Ps, s)`, and then
//!
//! ```text
//! V  = √(2·(ht − hs))
//! MN = V / a
//! A  = W / (ρ·V)
//! ```
//!
//! A target Mach number or a target flow area closes the problem, and
//! [`solve`] bisects on `π` to meet it.
//! Area targets are solved on the subsonic branch, between the sonic
//! pressure ratio and 1.

mod config;
mod error;
mod problem;

pub use config::StaticsConfig;
pub use error::StaticsError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    area::square_meter,
    f64::{Area, MassRate, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{StaticProperties, TotalProperties, traits::FlowThermoModel};

use problem::{AreaProblem, MachProblem, StaticModel};

/// What fixes the static state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticTarget {
    /// A Mach number, normally known at design.
    Mach(Constrained<Ratio, NonNegative>),

    /// A flow area, normally known off design.
    Area(Constrained<Area, StrictlyPositive>),
}

/// Solves for the static properties of a flow.
///
/// A zero Mach target returns the total state at rest, with an infinite
/// flow area.
///
/// # Errors
///
/// Returns [`StaticsError`] if the thermo model fails, if an area target is
/// below the sonic area, if a Mach target lies beyond the pressure ratio
/// search interval, or if the bisection does not converge.
pub fn solve<Fluid: Clone>(
    total: &TotalProperties<Fluid>,
    m_dot: MassRate,
    target: StaticTarget,
    config: &StaticsConfig,
    thermo: &impl FlowThermoModel<Fluid>,
) -> Result<StaticProperties<Fluid>, StaticsError> {
    let model = StaticModel::new(total, m_dot, thermo);

    let statics = match target {
        StaticTarget::Mach(mach) => given_mach(&model, total, mach.into_inner(), config)?,
        StaticTarget::Area(area) => given_area(&model, total, m_dot, area.into_inner(), config)?,
    };

    tracing::trace!(
        pressure_ratio = (statics.pressure / total.pressure).get::<ratio>(),
        mach = statics.mach.get::<ratio>(),
        area_m2 = statics.area.get::<square_meter>(),
        "solved static state"
    );

    Ok(statics)
}

fn given_mach<Fluid, Thermo>(
    model: &StaticModel<'_, Fluid, Thermo>,
    total: &TotalProperties<Fluid>,
    mach: Ratio,
    config: &StaticsConfig,
) -> Result<StaticProperties<Fluid>, StaticsError>
where
    Fluid: Clone,
    Thermo: FlowThermoModel<Fluid>,
{
    if mach.get::<ratio>() == 0.0 {
        return Ok(model.call(&total.pressure)?);
    }

    // The fastest flow the search interval reaches.
    let fastest = model
        .call(&(total.pressure * config.min_pressure_ratio))
        .ok()
        .map(|statics| statics.mach);
    if let Some(max_mach) = fastest.filter(|max_mach| *max_mach < mach) {
        return Err(StaticsError::MachOutOfRange { mach, max_mach });
    }

    let problem = MachProblem::new(total.pressure, mach);

    let solution = bisection::solve(
        model,
        &problem,
        [config.min_pressure_ratio, 1.0],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation sits at an extreme expansion; treat it as
            // supersonic so the search moves toward the total pressure.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(StaticsError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

fn given_area<Fluid, Thermo>(
    model: &StaticModel<'_, Fluid, Thermo>,
    total: &TotalProperties<Fluid>,
    m_dot: MassRate,
    area: Area,
    config: &StaticsConfig,
) -> Result<StaticProperties<Fluid>, StaticsError>
where
    Fluid: Clone,
    Thermo: FlowThermoModel<Fluid>,
{
    let sonic = given_mach(model, total, Ratio::new::<ratio>(1.0), config)?;
    if area < sonic.area {
        tracing::warn!(
            area_m2 = area.get::<square_meter>(),
            critical_area_m2 = sonic.area.get::<square_meter>(),
            "target area is choked"
        );
        return Err(StaticsError::Choked {
            area,
            critical_area: sonic.area,
        });
    }

    let sonic_ratio = (sonic.pressure / total.pressure).get::<ratio>();
    let problem = AreaProblem::new(total.pressure, area, m_dot);

    let solution = bisection::solve(
        model,
        &problem,
        [sonic_ratio, 1.0],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(StaticsError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}
