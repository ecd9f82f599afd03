//! Analytic partial derivatives and their finite-difference check.
//!
//! Every explicit relation in [`flow`](crate::support::flow) implements
//! [`Differentiable`]: a scalar output of `N` scalar inputs, evaluated in SI
//! base units, with a closed-form gradient.
//! This is the form a gradient-based solver consumes, and it lets one
//! checker cover every relation:
//!
//! ```
//! use twine_cycle::support::flow::PressureLoss;
//! use twine_cycle::support::partials::{PartialsCheckConfig, check_partials};
//!
//! // Pt_in = 5 psia in Pa, dPqP = 2 %.
//! let check = check_partials(&PressureLoss, &[34_473.8, 0.02], &PartialsCheckConfig::default());
//! assert!(check.max_relative_error() < 1e-6);
//! ```

/// A scalar relation `y = f(x₁, …, x_N)` with analytic first derivatives.
///
/// Inputs and output are in SI base units.
pub trait Differentiable<const N: usize> {
    /// Input names, in the order of `x`.
    const INPUTS: [&'static str; N];

    /// Evaluates the relation.
    fn value(&self, x: &[f64; N]) -> f64;

    /// Evaluates `∂y/∂xᵢ` for each input.
    fn gradient(&self, x: &[f64; N]) -> [f64; N];
}

/// Step control for [`check_partials`].
#[derive(Debug, Clone, Copy)]
pub struct PartialsCheckConfig {
    /// Step relative to the magnitude of each input.
    pub relative_step: f64,

    /// Step used when an input is zero or very small.
    pub absolute_step: f64,

    /// Fraction of the derivative scale `|y| / |xᵢ|` below which derivatives
    /// are compared in absolute terms.
    ///
    /// Inputs at zero have no such scale and are always compared relatively.
    ///
    /// A relation that recomputes its output through a property round trip
    /// carries round-off of order `ε·|y|`, which a central difference turns
    /// into a small nonzero slope where the exact derivative is zero.
    pub scale_floor: f64,
}

impl Default for PartialsCheckConfig {
    fn default() -> Self {
        Self {
            relative_step: 1e-6,
            absolute_step: 1e-7,
            scale_floor: 1e-2,
        }
    }
}

/// One input's analytic derivative next to its central-difference estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialComparison {
    pub input: &'static str,
    pub analytic: f64,
    pub finite_difference: f64,

    /// Smallest magnitude the derivatives are compared against.
    pub floor: f64,
}

impl PartialComparison {
    /// Absolute difference between the two derivatives.
    #[must_use]
    pub fn absolute_error(&self) -> f64 {
        (self.analytic - self.finite_difference).abs()
    }

    /// Difference relative to the larger derivative magnitude, or to
    /// [`floor`](Self::floor) when both are smaller.
    ///
    /// Derivatives that are both zero compare as exact.
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        let scale = self
            .analytic
            .abs()
            .max(self.finite_difference.abs())
            .max(self.floor);
        if scale == 0.0 {
            0.0
        } else {
            self.absolute_error() / scale
        }
    }
}

/// Result of [`check_partials`].
#[derive(Debug, Clone, PartialEq)]
pub struct PartialsCheck<const N: usize> {
    pub comparisons: [PartialComparison; N],
}

impl<const N: usize> PartialsCheck<N> {
    /// Largest [`PartialComparison::relative_error`] over all inputs.
    #[must_use]
    pub fn max_relative_error(&self) -> f64 {
        self.comparisons
            .iter()
            .map(PartialComparison::relative_error)
            .fold(0.0, f64::max)
    }

    /// The comparison with the largest relative error.
    #[must_use]
    pub fn worst(&self) -> Option<&PartialComparison> {
        self.comparisons
            .iter()
            .max_by(|a, b| a.relative_error().total_cmp(&b.relative_error()))
    }
}

/// Compares a relation's analytic gradient against central differences at `x`.
#[must_use]
pub fn check_partials<R, const N: usize>(
    relation: &R,
    x: &[f64; N],
    config: &PartialsCheckConfig,
) -> PartialsCheck<N>
where
    R: Differentiable<N>,
{
    let analytic = relation.gradient(x);
    let y = relation.value(x).abs();

    let comparisons = std::array::from_fn(|i| {
        let step = (x[i].abs() * config.relative_step).max(config.absolute_step);
        let floor = if x[i].abs() > step {
            config.scale_floor * y / x[i].abs()
        } else {
            0.0
        };

        let mut forward = *x;
        forward[i] += step;
        let mut backward = *x;
        backward[i] -= step;

        let finite_difference =
            (relation.value(&forward) - relation.value(&backward)) / (2.0 * step);

        PartialComparison {
            input: R::INPUTS[i],
            analytic: analytic[i],
            finite_difference,
            floor,
        }
    });

    PartialsCheck { comparisons }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// `y = a·b² + sin(a)`
    struct Sample;

    impl Differentiable<2> for Sample {
        const INPUTS: [&'static str; 2] = ["a", "b"];

        fn value(&self, x: &[f64; 2]) -> f64 {
            x[0] * x[1].powi(2) + x[0].sin()
        }

        fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
            [x[1].powi(2) + x[0].cos(), 2.0 * x[0] * x[1]]
        }
    }

    /// Same as [`Sample`] but with a wrong `∂y/∂b`.
    struct Wrong;

    impl Differentiable<2> for Wrong {
        const INPUTS: [&'static str; 2] = ["a", "b"];

        fn value(&self, x: &[f64; 2]) -> f64 {
            Sample.value(x)
        }

        fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
            [Sample.gradient(x)[0], x[0] * x[1]]
        }
    }

    #[test]
    fn correct_gradient_passes() {
        let check = check_partials(&Sample, &[1.3, -0.7], &PartialsCheckConfig::default());
        assert!(check.max_relative_error() < 1e-8);
        assert_eq!(check.comparisons[1].input, "b");
        assert_relative_eq!(check.comparisons[1].analytic, 2.0 * 1.3 * -0.7);
    }

    #[test]
    fn wrong_gradient_is_reported() {
        let check = check_partials(&Wrong, &[1.3, -0.7], &PartialsCheckConfig::default());
        let worst = check.worst().unwrap();
        assert_eq!(worst.input, "b");
        assert_relative_eq!(worst.relative_error(), 0.5, epsilon = 1e-6);
    }

    /// `y = a·(1 + b)` computed through a lossy round trip in `b`.
    struct RoundOff;

    impl Differentiable<2> for RoundOff {
        const INPUTS: [&'static str; 2] = ["a", "b"];

        fn value(&self, x: &[f64; 2]) -> f64 {
            let scaled = x[0] * (1.0 + x[1]);
            scaled / (1.0 + x[1]) * (1.0 + 1e-16 * x[1].sin())
        }

        fn gradient(&self, _x: &[f64; 2]) -> [f64; 2] {
            [1.0, 0.0]
        }
    }

    #[test]
    fn round_off_against_a_zero_derivative_passes() {
        let x = [689_476.0, 30.0];
        let check = check_partials(&RoundOff, &x, &PartialsCheckConfig::default());

        let b = check.comparisons[1];
        assert_eq!(b.analytic, 0.0);
        assert_relative_eq!(b.floor, 1e-2 * 689_476.0 / 30.0, max_relative = 1e-9);
        assert!(check.max_relative_error() < 1e-6, "{check:?}");
    }

    #[test]
    fn zero_inputs_use_absolute_step() {
        let check = check_partials(&Sample, &[0.0, 0.0], &PartialsCheckConfig::default());
        assert_relative_eq!(check.comparisons[0].finite_difference, 1.0, epsilon = 1e-9);
        assert_eq!(check.comparisons[1].relative_error(), 0.0);
    }
}
