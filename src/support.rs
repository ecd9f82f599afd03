pub mod constraint;
pub mod flow;
pub mod partials;
pub mod thermo;
pub mod units;
