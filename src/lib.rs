//! # Twine Cycle
//!
//! Gas-turbine cycle flow elements for [Twine](https://github.com/isentropic-dev/twine),
//! with analytic partial derivatives for gradient-based solvers.
//!
//! ## Crate layout
//!
//! - [`models`]: Cycle elements as [`twine_core::Model`] implementations.
//! - [`support`]: Flow stations, loss and energy relations, thermodynamic
//!   models, and the static-state solver that the elements are built from.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `cycle`),
//!    it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//! 4. **Standalone**: If broadly useful and stable, it may become its own crate
//!    (and be removed from here in a future release)
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific and domain-specific utility code remains private.

pub mod models;
pub mod support;
