use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassRate, Power},
    mass_rate::kilogram_per_second,
    power::watt,
};

use crate::support::{partials::Differentiable, units::SpecificEnthalpy};

/// Heat added to (or extracted from) the flow through an element.
///
/// `ht_out = ht_in + Q_dot / W`. Positive `Q_dot` heats the flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatAddition;

/// Partials of [`HeatAddition`], in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatAdditionPartials {
    /// `∂ht_out/∂W = −Q_dot / W²`
    pub m_dot: f64,

    /// `∂ht_out/∂Q_dot = 1 / W`
    pub q_dot: f64,

    /// `∂ht_out/∂ht_in = 1`
    pub ht_in: f64,
}

impl HeatAddition {
    /// Outlet total enthalpy.
    #[must_use]
    pub fn outlet_enthalpy(
        &self,
        m_dot: MassRate,
        q_dot: Power,
        ht_in: SpecificEnthalpy,
    ) -> SpecificEnthalpy {
        ht_in + q_dot / m_dot
    }

    #[must_use]
    pub fn partials(
        &self,
        m_dot: MassRate,
        q_dot: Power,
        _ht_in: SpecificEnthalpy,
    ) -> HeatAdditionPartials {
        let w = m_dot.get::<kilogram_per_second>();
        let q = q_dot.get::<watt>();

        HeatAdditionPartials {
            m_dot: -q / (w * w),
            q_dot: 1.0 / w,
            ht_in: 1.0,
        }
    }
}

impl Differentiable<3> for HeatAddition {
    const INPUTS: [&'static str; 3] = ["W", "Q_dot", "ht_in"];

    fn value(&self, x: &[f64; 3]) -> f64 {
        self.outlet_enthalpy(
            MassRate::new::<kilogram_per_second>(x[0]),
            Power::new::<watt>(x[1]),
            SpecificEnthalpy::new::<joule_per_kilogram>(x[2]),
        )
        .get::<joule_per_kilogram>()
    }

    fn gradient(&self, x: &[f64; 3]) -> [f64; 3] {
        let partials = self.partials(
            MassRate::new::<kilogram_per_second>(x[0]),
            Power::new::<watt>(x[1]),
            SpecificEnthalpy::new::<joule_per_kilogram>(x[2]),
        );
        [partials.m_dot, partials.q_dot, partials.ht_in]
    }
}
