//! Capability traits used to query and construct thermodynamic states.
//!
//! Flow elements state their needs as trait bounds over these capabilities
//! instead of depending on a concrete model.

mod base;
mod fuel;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use fuel::BurnsFuel;
pub use properties::*;
pub use state_from::StateFrom;
