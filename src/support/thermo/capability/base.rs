/// Base trait for thermodynamic property models.
///
/// Names the `Fluid` type whose [`State`](crate::support::thermo::State)
/// the model understands. Every other capability builds on it.
pub trait ThermoModel {
    type Fluid;
}
