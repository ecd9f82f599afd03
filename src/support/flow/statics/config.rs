use twine_solvers::equation::bisection;

/// Solver configuration for the static-state solve.
#[derive(Debug, Clone, Copy)]
pub struct StaticsConfig {
    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the static-to-total pressure ratio.
    pub pressure_ratio_tol: f64,

    /// Absolute tolerance on the residual.
    ///
    /// Mach number for a Mach target, and the mass flow error relative to the
    /// flow for an area target.
    pub residual_tol: f64,

    /// Lower end of the pressure ratio search interval.
    ///
    /// This caps the Mach numbers a Mach target can reach. The default of
    /// `1e-6` allows about Mach 16 in air with `γ = 1.4`; faster targets are
    /// rejected with [`StaticsError::MachOutOfRange`](super::StaticsError::MachOutOfRange).
    pub min_pressure_ratio: f64,
}

impl Default for StaticsConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            pressure_ratio_tol: 1e-14,
            residual_tol: 1e-12,
            min_pressure_ratio: 1e-6,
        }
    }
}

impl StaticsConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.pressure_ratio_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
