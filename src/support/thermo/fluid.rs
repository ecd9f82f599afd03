//! Canonical fluid identifiers.
//!
//! [`Air`] is a plain marker. [`CombustionProducts`] carries its fuel-air
//! ratio, which is the state-defining data a burner changes.

mod air;
mod combustion_products;

pub use air::Air;
pub use combustion_products::CombustionProducts;
