use crate::base::ParamDegradation;
use russell_tensor::{t2_ddot_t2, Tensor2};

/// Defines how the phase-field degradation function g acts on the creep-rate law
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degradation {
    /// No coupling
    Plain,

    /// Coupling with the phase-field degradation function
    Degraded {
        /// Degrades the effective stress: σ ← g σ
        stress: bool,

        /// Degrades the creep rate: ε̇ ← g ε̇
        rate: bool,
    },
}

impl Degradation {
    /// Allocates a new instance
    pub fn new(param: Option<ParamDegradation>) -> Self {
        match param {
            Some(p) => Degradation::Degraded {
                stress: p.stress_degradation,
                rate: p.rate_degradation,
            },
            None => Degradation::Plain,
        }
    }

    /// Indicates that the wrapped rate law keeps its closed-form derivative
    pub fn closed_form(&self) -> bool {
        *self == Degradation::Plain
    }

    /// Returns the effective stress seen by the rate law
    pub fn stress(&self, sigma: f64, g: f64) -> f64 {
        match *self {
            Degradation::Degraded { stress: true, .. } => clamp(g) * sigma,
            _ => sigma,
        }
    }

    /// Returns the degraded creep rate
    pub fn rate(&self, rate: f64, g: f64) -> f64 {
        match *self {
            Degradation::Degraded { rate: true, .. } => clamp(g) * rate,
            _ => rate,
        }
    }

    /// Returns the factor multiplying the (active) energy functional
    pub fn energy_factor(&self, g: f64) -> f64 {
        match *self {
            Degradation::Plain => 1.0,
            Degradation::Degraded { .. } => clamp(g),
        }
    }
}

/// Calculates the strain-energy rate density of a creep law with stress exponent n
///
/// ```text
///        n
/// ψ̇ = ───── σ : ε̇
///      n + 1
/// ```
///
/// Returns zero if `n ≤ 1`.
pub fn strain_energy_rate_density(n_exponent: f64, stress: &Tensor2, strain_rate: &Tensor2) -> f64 {
    if n_exponent <= 1.0 {
        return 0.0;
    }
    n_exponent / (n_exponent + 1.0) * t2_ddot_t2(stress, strain_rate)
}

/// Clamps g into [0, 1]
#[inline]
fn clamp(g: f64) -> f64 {
    f64::min(f64::max(g, 0.0), 1.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{strain_energy_rate_density, Degradation};
    use crate::base::ParamDegradation;
    use russell_lab::approx_eq;
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn new_works() {
        assert_eq!(Degradation::new(None), Degradation::Plain);
        let param = ParamDegradation {
            stress_degradation: false,
            rate_degradation: true,
        };
        assert_eq!(
            Degradation::new(Some(param)),
            Degradation::Degraded {
                stress: false,
                rate: true
            }
        );
        assert!(Degradation::Plain.closed_form());
        assert!(!Degradation::new(Some(param)).closed_form());
    }

    #[test]
    fn stress_and_rate_work() {
        let plain = Degradation::Plain;
        assert_eq!(plain.stress(10.0, 0.5), 10.0);
        assert_eq!(plain.rate(2.0, 0.5), 2.0);
        assert_eq!(plain.energy_factor(0.5), 1.0);

        let both = Degradation::Degraded {
            stress: true,
            rate: true,
        };
        assert_eq!(both.stress(10.0, 0.5), 5.0);
        assert_eq!(both.rate(2.0, 0.5), 1.0);
        assert_eq!(both.energy_factor(0.5), 0.5);
        assert_eq!(both.rate(2.0, 0.0), 0.0);
        assert_eq!(both.stress(10.0, 1.5), 10.0);
        assert_eq!(both.stress(10.0, -0.5), 0.0);

        let rate_only = Degradation::Degraded {
            stress: false,
            rate: true,
        };
        assert_eq!(rate_only.stress(10.0, 0.5), 10.0);
        assert_eq!(rate_only.rate(2.0, 0.25), 0.5);
    }

    #[test]
    fn strain_energy_rate_density_works() {
        let stress = Tensor2::from_matrix(
            &[[2.0, 1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 0.0, 0.5]],
            Mandel::Symmetric,
        )
        .unwrap();
        let rate = Tensor2::from_matrix(
            &[[1.0, 0.5, 0.0], [0.5, 3.0, 0.0], [0.0, 0.0, 2.0]],
            Mandel::Symmetric,
        )
        .unwrap();
        // σ : ε̇ = 2 + 2*0.5 - 3 + 1 = 1
        approx_eq(strain_energy_rate_density(3.0, &stress, &rate), 0.75, 1e-15);
        assert_eq!(strain_energy_rate_density(1.0, &stress, &rate), 0.0);
        assert_eq!(strain_energy_rate_density(0.5, &stress, &rate), 0.0);
    }
}
