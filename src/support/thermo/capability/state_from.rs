use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses at compile time which property pairs a model
/// can invert. Cycle elements lean on two of them:
///
/// - `(Fluid, Pressure, SpecificEnthalpy)` fixes the total state from the
///   outlet total pressure and total enthalpy.
/// - `(Fluid, Pressure, SpecificEntropy)` walks the isentrope from the total
///   state down to a trial static pressure.
///
/// Inputs are ordinary tuples, so a model that cannot invert a pair simply
/// does not implement it and the mistake surfaces as a type error.
///
/// ## Default fluid convenience
///
/// When the `Fluid` is a marker type (such as
/// [`Air`](crate::support::thermo::fluid::Air)), the blanket impl below lets
/// callers drop it: a model implementing `StateFrom<(Fluid, A, B)>` with
/// `Fluid: Default` also implements `StateFrom<(A, B)>`.
/// Fluids that carry composition should be passed explicitly.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
