use uom::{
    ConstZero,
    si::{
        available_energy::{joule_per_kilogram, megajoule_per_kilogram},
        f64::Ratio,
        ratio::ratio,
    },
};

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    partials::Differentiable,
    units::SpecificEnthalpy,
};

/// Fuel properties for a burner energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuel {
    /// Lower heating value, per unit mass of fuel.
    pub lower_heating_value: SpecificEnthalpy,

    /// Fuel enthalpy as delivered, on the gas model's enthalpy scale.
    pub enthalpy: SpecificEnthalpy,
}

impl Fuel {
    /// Jet-A with a lower heating value of 43.2 MJ/kg, delivered at the
    /// reference enthalpy.
    #[must_use]
    pub fn jet_a() -> Self {
        Self {
            lower_heating_value: SpecificEnthalpy::new::<megajoule_per_kilogram>(43.2),
            enthalpy: SpecificEnthalpy::ZERO,
        }
    }
}

impl Default for Fuel {
    fn default() -> Self {
        Self::jet_a()
    }
}

/// Energy balance of fuel burned into a flow.
///
/// Per unit mass of inlet flow, `FAR` units of fuel bring their own enthalpy
/// plus the fraction `η` of their heating value that is released:
///
/// ```text
/// ht_out = (ht_in + FAR·(h_fuel + η·LHV)) / (1 + FAR)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelMixing {
    fuel: Fuel,
    efficiency: f64,
}

/// Partials of [`FuelMixing`], in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelMixingPartials {
    /// `∂ht_out/∂ht_in = 1 / (1 + FAR)`
    pub ht_in: f64,

    /// `∂ht_out/∂FAR = (h_fuel + η·LHV − ht_in) / (1 + FAR)²`, in J/kg.
    pub far: f64,
}

impl FuelMixing {
    #[must_use]
    pub fn new(fuel: Fuel, efficiency: Constrained<Ratio, UnitIntervalLowerOpen>) -> Self {
        Self {
            fuel,
            efficiency: efficiency.into_inner().get::<ratio>(),
        }
    }

    /// Enthalpy each unit mass of fuel contributes, `h_fuel + η·LHV`.
    #[must_use]
    pub fn fuel_energy(&self) -> SpecificEnthalpy {
        self.fuel.enthalpy + self.fuel.lower_heating_value * self.efficiency
    }

    /// Outlet total enthalpy.
    #[must_use]
    pub fn outlet_enthalpy(&self, ht_in: SpecificEnthalpy, far: Ratio) -> SpecificEnthalpy {
        let far = far.get::<ratio>();
        (ht_in + self.fuel_energy() * far) / (1.0 + far)
    }

    #[must_use]
    pub fn partials(&self, ht_in: SpecificEnthalpy, far: Ratio) -> FuelMixingPartials {
        let far = far.get::<ratio>();
        let h_in = ht_in.get::<joule_per_kilogram>();
        let e_fuel = self.fuel_energy().get::<joule_per_kilogram>();

        FuelMixingPartials {
            ht_in: 1.0 / (1.0 + far),
            far: (e_fuel - h_in) / (1.0 + far).powi(2),
        }
    }
}

impl Differentiable<2> for FuelMixing {
    const INPUTS: [&'static str; 2] = ["ht_in", "FAR"];

    fn value(&self, x: &[f64; 2]) -> f64 {
        self.outlet_enthalpy(
            SpecificEnthalpy::new::<joule_per_kilogram>(x[0]),
            Ratio::new::<ratio>(x[1]),
        )
        .get::<joule_per_kilogram>()
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let partials = self.partials(
            SpecificEnthalpy::new::<joule_per_kilogram>(x[0]),
            Ratio::new::<ratio>(x[1]),
        );
        [partials.ht_in, partials.far]
    }
}
