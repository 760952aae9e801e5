use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the scalar creep-rate law
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamCreepRate {
    /// UO2 creep with thermal diffusion, thermal dislocation, and irradiation mechanisms
    ///
    /// ```text
    /// ε̇ = ε̇_th1 + ε̇_th2 + ε̇_ir
    ///
    /// ε̇_th1 = (A1 + A2 F) min(σ, σt) exp(-Q1/RT) / ((D - 87.7) G²)
    /// ε̇_th2 = A4 σ⁴·⁵ exp(-Q2/RT) / (D - 90.5)
    /// ε̇_ir  = A7 F σ exp(-Q3/RT)
    ///
    /// Qi = ai / (exp(-20/ln(x) - 8) + 1) + bi    (i = 1, 2)
    /// σt = 1.6547e7 / G^0.5714
    /// ```
    Uo2 {
        /// Fission rate density F (fissions/m³/s)
        fission_rate: f64,

        /// Percent of theoretical density D
        theoretical_density: f64,

        /// Grain size G (μm)
        grain_size: f64,

        /// Universal gas constant R (J/mol/K)
        gas_constant: f64,

        /// Amplitude a1 of the activation-energy sigmoid Q1 (J/mol)
        q1_a: f64,

        /// Offset b1 of the activation-energy sigmoid Q1 (J/mol)
        q1_b: f64,

        /// Amplitude a2 of the activation-energy sigmoid Q2 (J/mol)
        q2_a: f64,

        /// Offset b2 of the activation-energy sigmoid Q2 (J/mol)
        q2_b: f64,

        /// Activation energy for irradiation creep Q3 (J/mol)
        q3: f64,
    },

    /// Power-law creep
    ///
    /// ```text
    /// ε̇ = A σⁿ exp(-Q/RT)
    /// ```
    PowerLaw {
        /// Leading coefficient A
        coefficient: f64,

        /// Stress exponent n
        n_exponent: f64,

        /// Activation energy Q (J/mol)
        activation_energy: f64,

        /// Universal gas constant R (J/mol/K)
        gas_constant: f64,
    },
}

/// Holds parameters for the transient-creep amplification
///
/// ```text
/// factor = amplitude exp(-decay t) + 1
/// ```
///
/// where `t` is the time elapsed since the maximum effective stress was reached.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamTransient {
    /// Amplitude of the extra rate at t = 0
    pub amplitude: f64,

    /// Decay coefficient (1/s)
    pub decay: f64,
}

/// Holds the options for the coupling with a phase-field degradation function g
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamDegradation {
    /// Degrades the effective stress seen by the creep-rate law (σ ← g σ)
    pub stress_degradation: bool,

    /// Degrades the creep rate (ε̇ ← g ε̇)
    pub rate_degradation: bool,
}

/// Holds parameters for the Newton iterations of the radial return
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamRadialReturn {
    /// Absolute tolerance on the (unscaled) residual
    pub abs_tol: f64,

    /// Tolerance on the residual relative to the increment
    pub rel_tol: f64,

    /// Max number of iterations
    pub n_iteration_max: usize,

    /// Uniform scaling of residual and derivative (cancels in the Newton update)
    pub residual_scale: f64,

    /// Always use the one-sided numerical derivative of the creep rate
    pub numerical_derivative: bool,

    /// Compatibility mode: replaces a degenerate increment by this fraction of rate(σ_trial) Δt
    pub fallback_fraction: Option<f64>,
}

/// Holds all parameters for the creep stress-update
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamCreep {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Creep-rate law
    pub creep_rate: ParamCreepRate,

    /// Transient-creep amplification (None means steady creep only)
    pub transient: Option<ParamTransient>,

    /// Phase-field degradation coupling (None means no coupling)
    pub degradation: Option<ParamDegradation>,

    /// Newton iterations
    pub radial_return: ParamRadialReturn,
}

/// Holds parameters for the radial power shape in a pellet
///
/// The radial coordinate is `r = √(x² + y²)` (the pellet axis is aligned with z).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamRadialPower {
    /// Burnup-dependent shape
    ///
    /// ```text
    /// shape = 1 + (p1 b / 33) exp(-p2 (R - r)^p3)
    /// ```
    BurnupDependent { p1: f64, p2: f64, p3: f64 },

    /// Burnup-free shape
    ///
    /// ```text
    /// shape = base + p1 exp(-p2 (1 - r/R)^p3)
    /// ```
    BurnupFree { base: f64, p1: f64, p2: f64, p3: f64 },
}

impl ParamRadialPower {
    /// Returns the default burnup-dependent parameters
    pub fn burnup_dependent() -> Self {
        ParamRadialPower::BurnupDependent {
            p1: 1.2,
            p2: 500.0,
            p3: 0.75,
        }
    }

    /// Returns the default burnup-free parameters
    pub fn burnup_free() -> Self {
        ParamRadialPower::BurnupFree {
            base: 0.922920,
            p1: 1.372656,
            p2: 8.0,
            p3: 0.586372,
        }
    }

    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        let p3 = match *self {
            ParamRadialPower::BurnupDependent { p3, .. } => p3,
            ParamRadialPower::BurnupFree { p3, .. } => p3,
        };
        if p3 <= 0.0 {
            return Err("p3 must be > 0.0");
        }
        Ok(())
    }
}

impl ParamTransient {
    /// Returns the parameters of the UO2 transient creep
    pub fn uo2() -> Self {
        ParamTransient {
            amplitude: 2.5,
            decay: 1.4e-6,
        }
    }
}

impl ParamRadialReturn {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        ParamRadialReturn {
            abs_tol: 1e-14,
            rel_tol: 1e-10,
            n_iteration_max: 50,
            residual_scale: 1e5,
            numerical_derivative: false,
            fallback_fraction: None,
        }
    }
}

impl ParamCreepRate {
    /// Returns the UO2 creep-rate parameters with the standard activation energies
    pub fn uo2(fission_rate: f64, theoretical_density: f64, grain_size: f64) -> Self {
        ParamCreepRate::Uo2 {
            fission_rate,
            theoretical_density,
            grain_size,
            gas_constant: 8.314,
            q1_a: 74829.0,
            q1_b: 301762.0,
            q2_a: 83143.0,
            q2_b: 469191.0,
            q3: 21759.0,
        }
    }

    /// Checks the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        match *self {
            ParamCreepRate::Uo2 {
                fission_rate,
                theoretical_density,
                grain_size,
                gas_constant,
                ..
            } => {
                if fission_rate < 0.0 {
                    return Err("fission_rate must be ≥ 0.0");
                }
                if theoretical_density <= 90.5 || theoretical_density > 100.0 {
                    return Err("theoretical_density must satisfy 90.5 < D ≤ 100.0");
                }
                if grain_size <= 0.0 {
                    return Err("grain_size must be > 0.0");
                }
                if gas_constant <= 0.0 {
                    return Err("gas_constant must be > 0.0");
                }
            }
            ParamCreepRate::PowerLaw {
                coefficient,
                n_exponent,
                gas_constant,
                ..
            } => {
                if coefficient < 0.0 {
                    return Err("coefficient must be ≥ 0.0");
                }
                if n_exponent < 1.0 {
                    return Err("n_exponent must be ≥ 1.0");
                }
                if gas_constant <= 0.0 {
                    return Err("gas_constant must be > 0.0");
                }
            }
        }
        Ok(())
    }
}

impl ParamCreep {
    /// Checks all parameters
    ///
    /// This function must be called before any per-point evaluation.
    pub fn validate(&self) -> Result<(), StrError> {
        if self.young <= 0.0 {
            return Err("young must be > 0.0");
        }
        if self.poisson <= -1.0 || self.poisson >= 0.5 {
            return Err("poisson must satisfy -1.0 < ν < 0.5");
        }
        self.creep_rate.validate()?;
        if let Some(p) = self.transient {
            if p.amplitude < 0.0 {
                return Err("transient amplitude must be ≥ 0.0");
            }
            if p.decay < 0.0 {
                return Err("transient decay must be ≥ 0.0");
            }
        }
        if let Some(p) = self.degradation {
            if !p.stress_degradation && !p.rate_degradation {
                return Err("degradation coupling requires stress or rate degradation");
            }
        }
        let rr = &self.radial_return;
        if rr.abs_tol <= 0.0 {
            return Err("abs_tol must be > 0.0");
        }
        if rr.rel_tol < 0.0 {
            return Err("rel_tol must be ≥ 0.0");
        }
        if rr.n_iteration_max < 1 {
            return Err("n_iteration_max must be ≥ 1");
        }
        if rr.residual_scale <= 0.0 {
            return Err("residual_scale must be > 0.0");
        }
        if let Some(fraction) = rr.fallback_fraction {
            if fraction <= 0.0 || fraction > 1.0 {
                return Err("fallback_fraction must satisfy 0.0 < f ≤ 1.0");
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamCreep, ParamCreepRate, ParamDegradation, ParamRadialPower, ParamTransient};
    use crate::base::SampleParams;

    #[test]
    fn validate_captures_errors() {
        let mut param = SampleParams::param_creep_uo2();
        assert_eq!(param.validate(), Ok(()));

        param.young = 0.0;
        assert_eq!(param.validate().err(), Some("young must be > 0.0"));
        param.young = 200e9;
        param.poisson = 0.5;
        assert_eq!(param.validate().err(), Some("poisson must satisfy -1.0 < ν < 0.5"));
        param.poisson = 0.345;

        param.creep_rate = ParamCreepRate::uo2(1e19, 90.0, 10.0);
        assert_eq!(
            param.validate().err(),
            Some("theoretical_density must satisfy 90.5 < D ≤ 100.0")
        );
        param.creep_rate = ParamCreepRate::uo2(1e19, 95.0, 0.0);
        assert_eq!(param.validate().err(), Some("grain_size must be > 0.0"));
        param.creep_rate = ParamCreepRate::uo2(-1.0, 95.0, 10.0);
        assert_eq!(param.validate().err(), Some("fission_rate must be ≥ 0.0"));
        param.creep_rate = ParamCreepRate::PowerLaw {
            coefficient: 1e-20,
            n_exponent: 0.5,
            activation_energy: 0.0,
            gas_constant: 8.314,
        };
        assert_eq!(param.validate().err(), Some("n_exponent must be ≥ 1.0"));
        param.creep_rate = ParamCreepRate::uo2(1e19, 95.0, 10.0);

        param.transient = Some(ParamTransient {
            amplitude: 2.5,
            decay: -1.0,
        });
        assert_eq!(param.validate().err(), Some("transient decay must be ≥ 0.0"));
        param.transient = Some(ParamTransient::uo2());

        param.degradation = Some(ParamDegradation {
            stress_degradation: false,
            rate_degradation: false,
        });
        assert_eq!(
            param.validate().err(),
            Some("degradation coupling requires stress or rate degradation")
        );
        param.degradation = None;

        param.radial_return.n_iteration_max = 0;
        assert_eq!(param.validate().err(), Some("n_iteration_max must be ≥ 1"));
        param.radial_return.n_iteration_max = 10;
        param.radial_return.fallback_fraction = Some(1.5);
        assert_eq!(
            param.validate().err(),
            Some("fallback_fraction must satisfy 0.0 < f ≤ 1.0")
        );
        param.radial_return.fallback_fraction = Some(1.0);
        assert_eq!(param.validate(), Ok(()));
    }

    #[test]
    fn serialize_and_deserialize_work() {
        let param = SampleParams::param_creep_uo2();
        let json = serde_json::to_string(&param).unwrap();
        let read: ParamCreep = serde_json::from_str(&json).unwrap();
        assert_eq!(read.young, param.young);
        assert_eq!(read.radial_return.n_iteration_max, param.radial_return.n_iteration_max);
        match read.creep_rate {
            ParamCreepRate::Uo2 { grain_size, .. } => assert_eq!(grain_size, 10.0),
            _ => panic!("creep rate law must be Uo2"),
        }
    }

    #[test]
    fn radial_power_params_work() {
        assert_eq!(ParamRadialPower::burnup_dependent().validate(), Ok(()));
        assert_eq!(ParamRadialPower::burnup_free().validate(), Ok(()));
        let wrong = ParamRadialPower::BurnupFree {
            base: 1.0,
            p1: 1.0,
            p2: 1.0,
            p3: 0.0,
        };
        assert_eq!(wrong.validate().err(), Some("p3 must be > 0.0"));
    }
}
