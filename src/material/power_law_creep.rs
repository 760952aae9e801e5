use super::CreepRateTrait;
use crate::base::{ParamCreepRate, MIN_STRESS, MIN_TEMPERATURE};
use crate::StrError;

/// Implements the power-law creep-rate law
///
/// ```text
/// ε̇ = A σⁿ exp(-Q/RT)
/// ```
pub struct PowerLawCreep {
    /// Leading coefficient A
    coefficient: f64,

    /// Stress exponent n
    n_exponent: f64,

    /// Activation energy Q
    activation_energy: f64,

    /// Gas constant R
    gas_constant: f64,
}

impl PowerLawCreep {
    /// Allocates a new instance
    pub fn new(param: &ParamCreepRate) -> Result<Self, StrError> {
        match *param {
            ParamCreepRate::PowerLaw {
                coefficient,
                n_exponent,
                activation_energy,
                gas_constant,
            } => {
                param.validate()?;
                Ok(PowerLawCreep {
                    coefficient,
                    n_exponent,
                    activation_energy,
                    gas_constant,
                })
            }
            _ => Err("parameters must correspond to the PowerLaw creep-rate law"),
        }
    }

    fn exponential(&self, temperature: f64) -> f64 {
        let t = if temperature < MIN_TEMPERATURE {
            MIN_TEMPERATURE
        } else {
            temperature
        };
        let rt = self.gas_constant * t;
        f64::exp(-self.activation_energy / rt)
    }
}

impl CreepRateTrait for PowerLawCreep {
    fn rate(&self, effective_stress: f64, temperature: f64, _oxygen_ratio: f64) -> f64 {
        let sigma = f64::abs(effective_stress);
        if sigma < MIN_STRESS {
            return 0.0;
        }
        self.coefficient * f64::powf(sigma, self.n_exponent) * self.exponential(temperature)
    }

    fn drate_dsigma(&self, effective_stress: f64, temperature: f64, _oxygen_ratio: f64) -> f64 {
        let sigma = f64::abs(effective_stress);
        if sigma < MIN_STRESS {
            return 0.0;
        }
        let n = self.n_exponent;
        self.coefficient * n * f64::powf(sigma, n - 1.0) * self.exponential(temperature)
    }

    fn stress_exponent(&self) -> f64 {
        self.n_exponent
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
