use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` is fixed by temperature and density plus whatever the
/// `Fluid` value carries.
/// For cycle work the fluid often carries composition, as
/// [`CombustionProducts`](crate::support::thermo::fluid::CombustionProducts)
/// does with its fuel-air ratio.
///
/// # Example
///
/// ```
/// use twine_cycle::support::thermo::{State, fluid::Air};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let inlet = State::new(
///     ThermodynamicTemperature::new::<kelvin>(288.15),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.225),
///     Air,
/// );
/// assert_eq!(inlet.fluid, Air);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
