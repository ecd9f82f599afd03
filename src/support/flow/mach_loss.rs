use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::{
    constraint::{Constrained, NonNegative},
    partials::Differentiable,
};

/// Exponents at or below this value leave the map inactive.
pub const MACH_EXPONENT_THRESHOLD: f64 = 1e-10;

/// Which side of the Mach loss map is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachLossMode {
    /// The loss fraction `dPqP` is given; the scalar is computed.
    Design,

    /// The loss scalar `s_dPqP` is given; the fraction is computed.
    OffDesign,
}

/// Scales a pressure loss with inlet Mach number.
///
/// The loss fraction and its scalar are related by
///
/// ```text
/// dPqP = s_dPqP · MN^exp
/// ```
///
/// At design the fraction is given and the scalar is calibrated from it.
/// Off design the calibrated scalar is given and the fraction follows the
/// local Mach number.
///
/// With an exponent at or below [`MACH_EXPONENT_THRESHOLD`] the map is
/// inactive: the computed quantity equals the given one and the Mach number
/// is not needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachLossMap {
    exponent: f64,
    mode: MachLossMode,
}

/// Partials of [`MachLossMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachLossPartials {
    /// Derivative with respect to the given loss quantity.
    pub given: f64,

    /// Derivative with respect to the inlet Mach number.
    pub mach: f64,
}

impl MachLossMap {
    #[must_use]
    pub fn new(exponent: Constrained<f64, NonNegative>, mode: MachLossMode) -> Self {
        Self {
            exponent: exponent.into_inner(),
            mode,
        }
    }

    /// Map that calibrates `s_dPqP` from a given `dPqP`.
    #[must_use]
    pub fn design(exponent: Constrained<f64, NonNegative>) -> Self {
        Self::new(exponent, MachLossMode::Design)
    }

    /// Map that evaluates `dPqP` from a calibrated `s_dPqP`.
    #[must_use]
    pub fn off_design(exponent: Constrained<f64, NonNegative>) -> Self {
        Self::new(exponent, MachLossMode::OffDesign)
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn mode(&self) -> MachLossMode {
        self.mode
    }

    /// Whether the Mach number affects the loss.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.exponent > MACH_EXPONENT_THRESHOLD
    }

    /// Computes the complementary loss quantity from the given one.
    ///
    /// Returns `s_dPqP` in [`MachLossMode::Design`] and `dPqP` in
    /// [`MachLossMode::OffDesign`]. A zero Mach number at design yields an
    /// infinite scalar.
    #[must_use]
    pub fn evaluate(&self, given: Ratio, mach: Ratio) -> Ratio {
        if !self.is_active() {
            return given;
        }

        let scale = mach.get::<ratio>().powf(self.exponent);
        match self.mode {
            MachLossMode::Design => given / scale,
            MachLossMode::OffDesign => given * scale,
        }
    }

    #[must_use]
    pub fn partials(&self, given: Ratio, mach: Ratio) -> MachLossPartials {
        if !self.is_active() {
            return MachLossPartials {
                given: 1.0,
                mach: 0.0,
            };
        }

        let x = given.get::<ratio>();
        let mn = mach.get::<ratio>();
        let n = self.exponent;

        match self.mode {
            // s = dPqP·MN^(−n)
            MachLossMode::Design => MachLossPartials {
                given: mn.powf(-n),
                mach: -n * x * mn.powf(-n - 1.0),
            },
            // dPqP = s·MN^n
            MachLossMode::OffDesign => MachLossPartials {
                given: mn.powf(n),
                mach: n * x * mn.powf(n - 1.0),
            },
        }
    }
}

impl Differentiable<2> for MachLossMap {
    const INPUTS: [&'static str; 2] = ["loss", "MN_in"];

    fn value(&self, x: &[f64; 2]) -> f64 {
        self.evaluate(Ratio::new::<ratio>(x[0]), Ratio::new::<ratio>(x[1]))
            .get::<ratio>()
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let partials = self.partials(Ratio::new::<ratio>(x[0]), Ratio::new::<ratio>(x[1]));
        [partials.given, partials.mach]
    }
}
