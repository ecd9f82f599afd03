//! Thermodynamic property modeling for cycle flow elements.
//!
//! Elements never assume a particular equation of state. They ask a model for
//! the capabilities they need (see [`capability`]) and work with whatever
//! [`State`] that model produces.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
