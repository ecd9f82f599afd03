//! Thermodynamic property models.

pub mod blended_gas;
pub mod perfect_gas;

mod calorically_perfect;

pub use blended_gas::BlendedGas;
pub use perfect_gas::PerfectGas;
