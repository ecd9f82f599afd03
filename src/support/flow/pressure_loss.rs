use uom::si::{
    f64::{Pressure, Ratio},
    pressure::pascal,
    ratio::ratio,
};

use crate::support::partials::Differentiable;

/// Total pressure loss across an element.
///
/// `Pt_out = Pt_in·(1 − dPqP)`, where `dPqP` is the loss as a fraction of
/// the inlet total pressure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressureLoss;

/// Partials of [`PressureLoss`], in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureLossPartials {
    /// `∂Pt_out/∂Pt_in = 1 − dPqP`
    pub pt_in: f64,

    /// `∂Pt_out/∂dPqP = −Pt_in`, in Pa.
    pub dpqp: f64,
}

impl PressureLoss {
    /// Outlet total pressure.
    #[must_use]
    pub fn outlet_pressure(&self, pt_in: Pressure, dpqp: Ratio) -> Pressure {
        pt_in * (1.0 - dpqp.get::<ratio>())
    }

    #[must_use]
    pub fn partials(&self, pt_in: Pressure, dpqp: Ratio) -> PressureLossPartials {
        PressureLossPartials {
            pt_in: 1.0 - dpqp.get::<ratio>(),
            dpqp: -pt_in.get::<pascal>(),
        }
    }
}

impl Differentiable<2> for PressureLoss {
    const INPUTS: [&'static str; 2] = ["Pt_in", "dPqP"];

    fn value(&self, x: &[f64; 2]) -> f64 {
        self.outlet_pressure(Pressure::new::<pascal>(x[0]), Ratio::new::<ratio>(x[1]))
            .get::<pascal>()
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let partials = self.partials(Pressure::new::<pascal>(x[0]), Ratio::new::<ratio>(x[1]));
        [partials.pt_in, partials.dpqp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::psi;

    use crate::support::partials::{PartialsCheckConfig, check_partials};

    #[test]
    fn two_percent_loss() {
        let pt_out =
            PressureLoss.outlet_pressure(Pressure::new::<psi>(5.0), Ratio::new::<ratio>(0.02));
        assert_relative_eq!(pt_out.get::<psi>(), 4.9, epsilon = 1e-12);
    }

    #[test]
    fn no_loss_passes_pressure_through() {
        let pt_in = Pressure::new::<psi>(100.0);
        let pt_out = PressureLoss.outlet_pressure(pt_in, Ratio::new::<ratio>(0.0));
        assert_eq!(pt_out, pt_in);
    }

    #[test]
    fn partials_are_the_linear_coefficients() {
        let pt_in = Pressure::new::<pascal>(200_000.0);
        let partials = PressureLoss.partials(pt_in, Ratio::new::<ratio>(0.05));
        assert_relative_eq!(partials.pt_in, 0.95);
        assert_relative_eq!(partials.dpqp, -200_000.0);
    }

    #[test]
    fn partials_match_finite_differences() {
        let config = PartialsCheckConfig::default();
        for x in [[34_473.8, 0.02], [1.5e6, 0.0], [101_325.0, 0.3]] {
            let check = check_partials(&PressureLoss, &x, &config);
            assert!(check.max_relative_error() < 1e-7, "{check:?}");
        }
    }
}
