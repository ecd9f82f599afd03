//! Duct evaluation.
//!
//! A duct applies, in order:
//!
//! 1. the Mach loss map (when active), using the inlet static Mach number;
//! 2. the pressure loss and the heat addition;
//! 3. the total-state solve from outlet total pressure and enthalpy;
//! 4. the static-state solve, when enabled.
//!
//! Mass flow and fuel-air ratio pass through unchanged.

mod config;
mod error;
mod input;
mod output;

pub use config::DuctConfig;
pub use error::DuctError;
pub use input::DuctInput;
pub use output::{DuctOutput, DuctPartials};

use uom::si::{
    available_energy::kilojoule_per_kilogram, mass_rate::kilogram_per_second, pressure::kilopascal,
    ratio::ratio,
};

use crate::{
    models::cycle::loss,
    support::flow::{
        FlowStation, FlowThermoModel, HeatAddition, PressureLoss, TotalProperties, statics,
    },
};

/// Evaluates a duct.
///
/// # Errors
///
/// Returns [`DuctError`] if the loss map needs a missing inlet Mach number,
/// if statics are enabled without a target, or if the total or static solve
/// fails.
pub(super) fn evaluate<Fluid: Clone>(
    input: &DuctInput<Fluid>,
    config: &DuctConfig,
    thermo: &impl FlowThermoModel<Fluid>,
) -> Result<DuctOutput<Fluid>, DuctError> {
    let inlet = &input.inlet;

    let loss = loss::resolve(config.mach_exponent, input.loss, inlet.mach())?;

    let pt_in = inlet.total.pressure;
    let ht_in = inlet.total.enthalpy;
    let pt_out = PressureLoss.outlet_pressure(pt_in, loss.result.fraction);
    let ht_out = HeatAddition.outlet_enthalpy(inlet.m_dot, input.q_dot, ht_in);

    let total = TotalProperties::from_pressure_enthalpy(
        thermo,
        inlet.total.state.fluid.clone(),
        pt_out,
        ht_out,
    )?;
    let mut outlet = FlowStation::new(inlet.m_dot, inlet.far, total);

    if config.statics {
        let target = input.exit.ok_or(DuctError::MissingStaticTarget)?;
        let stat = statics::solve(&outlet.total, inlet.m_dot, target, &config.solver, thermo)?;
        outlet = outlet.with_statics(stat);
    }

    let pressure = PressureLoss.partials(pt_in, loss.result.fraction);
    let heat = HeatAddition.partials(inlet.m_dot, input.q_dot, ht_in);
    let partials = DuctPartials {
        pt_out_pt_in: pressure.pt_in,
        pt_out_loss: pressure.dpqp * loss.fraction_partials.given,
        pt_out_mach_in: pressure.dpqp * loss.fraction_partials.mach,
        ht_out_ht_in: heat.ht_in,
        ht_out_m_dot: heat.m_dot,
        ht_out_q_dot: heat.q_dot,
        loss_given: loss.computed_partials.given,
        loss_mach_in: loss.computed_partials.mach,
    };

    tracing::debug!(
        m_dot_kg_s = inlet.m_dot.get::<kilogram_per_second>(),
        dpqp = loss.result.fraction.get::<ratio>(),
        pt_out_kpa = pt_out.get::<kilopascal>(),
        ht_out_kj_kg = ht_out.get::<kilojoule_per_kilogram>(),
        mach_out = outlet.mach().map(|mach| mach.get::<ratio>()),
        "evaluated duct"
    );

    Ok(DuctOutput {
        outlet,
        loss: loss.result,
        partials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{
            available_energy::joule_per_kilogram,
            f64::{MassRate, Power, Pressure, Ratio, ThermodynamicTemperature},
            power::{kilowatt, watt},
            pressure::{pascal, psi},
            thermodynamic_temperature::{degree_rankine, kelvin},
        },
    };

    use crate::{
        models::cycle::Loss,
        support::{
            constraint::{NonNegative, StrictlyPositive},
            flow::statics::{StaticTarget, StaticsConfig},
            partials::{Differentiable, PartialsCheckConfig, check_partials},
            thermo::{fluid::Air, model::PerfectGas},
            units::SpecificEnthalpy,
        },
    };

    fn air() -> PerfectGas<Air> {
        PerfectGas::<Air>::new().unwrap()
    }

    fn r(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    fn mach(value: f64) -> StaticTarget {
        StaticTarget::Mach(NonNegative::new(r(value)).unwrap())
    }

    /// Inlet at 100 psia, 1000 °R, 30 kg/s, moving at `mn_in`.
    fn inlet(thermo: &PerfectGas<Air>, mn_in: f64) -> FlowStation<Air> {
        let total = TotalProperties::from_temperature_pressure(
            thermo,
            Air,
            ThermodynamicTemperature::new::<degree_rankine>(1_000.0),
            Pressure::new::<psi>(100.0),
        )
        .unwrap();
        let m_dot = MassRate::new::<kilogram_per_second>(30.0);
        let stat =
            statics::solve(&total, m_dot, mach(mn_in), &StaticsConfig::default(), thermo).unwrap();

        FlowStation::new(m_dot, Ratio::ZERO, total).with_statics(stat)
    }

    #[test]
    fn matches_isentropic_perfect_gas_values() {
        let thermo = air();
        let input = DuctInput {
            inlet: inlet(&thermo, 0.4),
            loss: Loss::Fraction(r(0.02)),
            q_dot: Power::ZERO,
            exit: Some(mach(0.3)),
        };

        let output = evaluate(&input, &DuctConfig::default(), &thermo).unwrap();
        let outlet = &output.outlet;

        // Textbook relations with γ = 1.4.
        let stretch: f64 = 1.0 + 0.2 * 0.3 * 0.3;
        let ps = 98.0 * stretch.powf(-3.5);
        let ts = 1_000.0 / stretch;

        assert_relative_eq!(outlet.total.pressure.get::<psi>(), 98.0, max_relative = 0.01);
        assert_relative_eq!(
            outlet.total.temperature.get::<degree_rankine>(),
            1_000.0,
            max_relative = 0.01
        );

        let stat = outlet.statics.as_ref().unwrap();
        assert_relative_eq!(stat.pressure.get::<psi>(), ps, max_relative = 0.01);
        assert_relative_eq!(stat.temperature.get::<degree_rankine>(), ts, max_relative = 0.01);
        assert_relative_eq!(stat.mach.get::<ratio>(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn passes_mass_flow_and_far_through() {
        let thermo = air();
        let mut station = inlet(&thermo, 0.4);
        station.far = r(0.015);

        for statics in [true, false] {
            let input = DuctInput {
                inlet: station.clone(),
                loss: Loss::Fraction(r(0.03)),
                q_dot: Power::new::<kilowatt>(250.0),
                exit: Some(mach(0.25)),
            };
            let config = DuctConfig {
                statics,
                ..DuctConfig::default()
            };

            let output = evaluate(&input, &config, &thermo).unwrap();
            assert_eq!(output.outlet.m_dot, station.m_dot);
            assert_eq!(output.outlet.far, station.far);
            assert_eq!(output.outlet.statics.is_some(), statics);
        }
    }

    #[test]
    fn heat_raises_total_temperature() {
        let thermo = air();
        let input = DuctInput {
            inlet: inlet(&thermo, 0.4),
            loss: Loss::Fraction(r(0.0)),
            q_dot: Power::new::<kilowatt>(3_015.0),
            exit: None,
        };
        let config = DuctConfig {
            statics: false,
            ..DuctConfig::default()
        };

        let output = evaluate(&input, &config, &thermo).unwrap();

        // Δh = 3015 kW / 30 kg/s = 100.5 kJ/kg, ΔT = Δh / cp = 100 K.
        let t_in = input.inlet.total.temperature.get::<kelvin>();
        assert_relative_eq!(
            output.outlet.total.temperature.get::<kelvin>(),
            t_in + 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn off_design_scalar_recovers_design_loss() {
        let thermo = air();
        let config = DuctConfig {
            mach_exponent: NonNegative::new(2.0).unwrap(),
            ..DuctConfig::default()
        };

        let design = evaluate(
            &DuctInput {
                inlet: inlet(&thermo, 0.4),
                loss: Loss::Fraction(r(0.02)),
                q_dot: Power::ZERO,
                exit: Some(mach(0.3)),
            },
            &config,
            &thermo,
        )
        .unwrap();
        assert_relative_eq!(design.loss.scalar.get::<ratio>(), 0.125, epsilon = 1e-8);

        let exit_area = design.outlet.statics.as_ref().unwrap().area;
        let off_design = evaluate(
            &DuctInput {
                inlet: inlet(&thermo, 0.4),
                loss: Loss::Scalar(design.loss.scalar),
                q_dot: Power::ZERO,
                exit: Some(StaticTarget::Area(StrictlyPositive::new(exit_area).unwrap())),
            },
            &config,
            &thermo,
        )
        .unwrap();

        assert_relative_eq!(off_design.loss.fraction.get::<ratio>(), 0.02, epsilon = 1e-8);
        assert_relative_eq!(
            off_design.outlet.mach().unwrap().get::<ratio>(),
            0.3,
            epsilon = 1e-7
        );

        // A faster inlet loses more.
        let faster = evaluate(
            &DuctInput {
                inlet: inlet(&thermo, 0.5),
                loss: Loss::Scalar(design.loss.scalar),
                q_dot: Power::ZERO,
                exit: None,
            },
            &DuctConfig {
                statics: false,
                ..config
            },
            &thermo,
        )
        .unwrap();
        assert!(faster.loss.fraction > off_design.loss.fraction);
    }

    #[test]
    fn active_map_without_inlet_statics_is_rejected() {
        let thermo = air();
        let mut station = inlet(&thermo, 0.4);
        station.statics = None;

        let input = DuctInput {
            inlet: station,
            loss: Loss::Fraction(r(0.02)),
            q_dot: Power::ZERO,
            exit: Some(mach(0.3)),
        };
        let config = DuctConfig {
            mach_exponent: NonNegative::new(1.5).unwrap(),
            ..DuctConfig::default()
        };

        let result = evaluate(&input, &config, &thermo);
        assert!(matches!(result, Err(DuctError::MissingInletMach(_))), "{result:?}");
    }

    #[test]
    fn inactive_map_tolerates_an_inlet_at_rest() {
        let thermo = air();
        let input = DuctInput {
            inlet: inlet(&thermo, 0.0),
            loss: Loss::Scalar(r(0.02)),
            q_dot: Power::ZERO,
            exit: Some(mach(0.3)),
        };

        let output = evaluate(&input, &DuctConfig::default(), &thermo).unwrap();
        assert_eq!(output.partials.pt_out_mach_in, 0.0);
        assert!(output.partials.pt_out_loss.is_finite());
        assert_relative_eq!(output.outlet.total.pressure.get::<psi>(), 98.0, epsilon = 1e-9);
    }

    #[test]
    fn design_loss_reports_scalar_partials() {
        let thermo = air();
        let input = DuctInput {
            inlet: inlet(&thermo, 0.4),
            loss: Loss::Fraction(r(0.02)),
            q_dot: Power::ZERO,
            exit: None,
        };
        let config = DuctConfig {
            mach_exponent: NonNegative::new(2.0).unwrap(),
            statics: false,
            ..DuctConfig::default()
        };

        let p = evaluate(&input, &config, &thermo).unwrap().partials;

        // s_dPqP = dPqP / MN², so ∂s/∂dPqP = 1/MN² and ∂s/∂MN = −2·dPqP/MN³.
        assert_relative_eq!(p.loss_given, 1.0 / 0.16, epsilon = 1e-9);
        assert_relative_eq!(p.loss_mach_in, -2.0 * 0.02 / 0.064, epsilon = 1e-9);
        assert_eq!(p.pt_out_mach_in, 0.0);
    }

    #[test]
    fn statics_without_a_target_are_rejected() {
        let thermo = air();
        let input = DuctInput {
            inlet: inlet(&thermo, 0.4),
            loss: Loss::Fraction(r(0.02)),
            q_dot: Power::ZERO,
            exit: None,
        };

        let result = evaluate(&input, &DuctConfig::default(), &thermo);
        assert!(matches!(result, Err(DuctError::MissingStaticTarget)), "{result:?}");
    }

    #[derive(Debug, Clone, Copy)]
    enum Output {
        Pressure,
        Enthalpy,
        /// `s_dPqP` at design, `dPqP` off design.
        ComputedLoss,
    }

    /// One duct output as a function of its scalar inputs.
    ///
    /// Inputs, in SI: `Pt_in`, `ht_in`, `W`, `Q_dot`, `loss`, `MN_in`.
    struct Outlet {
        base: FlowStation<Air>,
        exponent: f64,
        design: bool,
        output: Output,
    }

    impl Outlet {
        fn evaluate(&self, x: &[f64; 6]) -> DuctOutput<Air> {
            let thermo = air();

            let mut inlet = self.base.clone();
            inlet.total.pressure = Pressure::new::<pascal>(x[0]);
            inlet.total.enthalpy = SpecificEnthalpy::new::<joule_per_kilogram>(x[1]);
            inlet.m_dot = MassRate::new::<kilogram_per_second>(x[2]);
            if let Some(stat) = inlet.statics.as_mut() {
                stat.mach = r(x[5]);
            }

            let loss = if self.design {
                Loss::Fraction(r(x[4]))
            } else {
                Loss::Scalar(r(x[4]))
            };
            let config = DuctConfig {
                mach_exponent: NonNegative::new(self.exponent).unwrap(),
                statics: false,
                ..DuctConfig::default()
            };

            let input = DuctInput {
                inlet,
                loss,
                q_dot: Power::new::<watt>(x[3]),
                exit: None,
            };
            evaluate(&input, &config, &thermo).unwrap()
        }
    }

    impl Differentiable<6> for Outlet {
        const INPUTS: [&'static str; 6] = ["Pt_in", "ht_in", "W", "Q_dot", "loss", "MN_in"];

        fn value(&self, x: &[f64; 6]) -> f64 {
            let output = self.evaluate(x);
            match self.output {
                Output::Pressure => output.outlet.total.pressure.get::<pascal>(),
                Output::Enthalpy => output.outlet.total.enthalpy.get::<joule_per_kilogram>(),
                Output::ComputedLoss if self.design => output.loss.scalar.get::<ratio>(),
                Output::ComputedLoss => output.loss.fraction.get::<ratio>(),
            }
        }

        fn gradient(&self, x: &[f64; 6]) -> [f64; 6] {
            let p = self.evaluate(x).partials;
            match self.output {
                Output::Pressure => {
                    [p.pt_out_pt_in, 0.0, 0.0, 0.0, p.pt_out_loss, p.pt_out_mach_in]
                }
                Output::Enthalpy => [0.0, p.ht_out_ht_in, p.ht_out_m_dot, p.ht_out_q_dot, 0.0, 0.0],
                Output::ComputedLoss => [0.0, 0.0, 0.0, 0.0, p.loss_given, p.loss_mach_in],
            }
        }
    }

    #[test]
    fn composite_partials_match_finite_differences() {
        let thermo = air();
        let base = inlet(&thermo, 0.4);
        let config = PartialsCheckConfig::default();

        for exponent in [0.0, 1.0, 2.0] {
            for design in [true, false] {
                for output in [Output::Pressure, Output::Enthalpy, Output::ComputedLoss] {
                    let relation = Outlet {
                        base: base.clone(),
                        exponent,
                        design,
                        output,
                    };
                    let loss = if design { 0.02 } else { 0.12 };
                    let x = [689_476.0, 300_000.0, 30.0, 150_000.0, loss, 0.4];

                    let check = check_partials(&relation, &x, &config);
                    assert!(
                        check.max_relative_error() < 1e-6,
                        "{output:?}, exponent {exponent}, design {design}: {check:?}"
                    );
                }
            }
        }
    }
}
