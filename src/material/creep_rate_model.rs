use super::{Degradation, LocalInputs, PowerLawCreep, Uo2Creep};
use crate::base::{ParamCreep, ParamCreepRate, ParamTransient};
use crate::StrError;

/// Specifies the essential functions for scalar creep-rate laws
pub trait CreepRateTrait: Send + Sync {
    /// Calculates the equivalent creep rate
    fn rate(&self, effective_stress: f64, temperature: f64, oxygen_ratio: f64) -> f64;

    /// Calculates the derivative of the equivalent creep rate w.r.t the effective stress
    fn drate_dsigma(&self, effective_stress: f64, temperature: f64, oxygen_ratio: f64) -> f64;

    /// Returns the stress exponent n (used in the split of the strain-energy rate)
    fn stress_exponent(&self) -> f64;
}

/// Holds the creep-rate law composed with the transient amplification and the degradation coupling
pub struct CreepRateModel {
    /// Holds the actual creep-rate law
    pub actual: Box<dyn CreepRateTrait>,

    /// Transient-creep amplification
    transient: Option<ParamTransient>,

    /// Degradation coupling
    degradation: Degradation,

    /// Forces the numerical derivative
    numerical_derivative: bool,
}

impl CreepRateModel {
    /// Allocates a new instance
    pub fn new(param: &ParamCreep) -> Result<Self, StrError> {
        let actual: Box<dyn CreepRateTrait> = match param.creep_rate {
            // UO2 thermal and irradiation creep
            ParamCreepRate::Uo2 { .. } => Box::new(Uo2Creep::new(&param.creep_rate)?),

            // Power-law creep
            ParamCreepRate::PowerLaw { .. } => Box::new(PowerLawCreep::new(&param.creep_rate)?),
        };
        Ok(CreepRateModel {
            actual,
            transient: param.transient,
            degradation: Degradation::new(param.degradation),
            numerical_derivative: param.radial_return.numerical_derivative,
        })
    }

    /// Returns the degradation coupling
    pub fn degradation(&self) -> Degradation {
        self.degradation
    }

    /// Indicates whether the transient-creep amplification is enabled
    pub fn transient_enabled(&self) -> bool {
        self.transient.is_some()
    }

    /// Returns the transient-creep amplification factor
    ///
    /// ```text
    /// factor = amplitude exp(-decay t) + 1
    /// ```
    ///
    /// Returns 1.0 if the transient creep is disabled.
    pub fn transient_factor(&self, elapsed_time: f64) -> f64 {
        match self.transient {
            Some(p) => p.amplitude * f64::exp(-p.decay * elapsed_time) + 1.0,
            None => 1.0,
        }
    }

    /// Indicates whether the closed-form derivative is used
    pub fn closed_form_derivative(&self) -> bool {
        !self.numerical_derivative && self.degradation.closed_form()
    }

    /// Calculates the equivalent creep rate
    pub fn rate(&self, effective_stress: f64, inputs: &LocalInputs, elapsed_time: f64) -> f64 {
        let g = inputs.degradation;
        let sigma = self.degradation.stress(effective_stress, g);
        let rate = self.actual.rate(sigma, inputs.temperature, inputs.oxygen_ratio);
        self.degradation.rate(rate * self.transient_factor(elapsed_time), g)
    }

    /// Calculates the derivative of the equivalent creep rate w.r.t the effective stress
    ///
    /// Uses the closed-form derivative if available; otherwise, uses the one-sided difference
    /// with `h = max(1e-10, 1e-6 |σ|)`.
    pub fn drate_dsigma(&self, effective_stress: f64, inputs: &LocalInputs, elapsed_time: f64) -> f64 {
        if self.closed_form_derivative() {
            let d = self
                .actual
                .drate_dsigma(effective_stress, inputs.temperature, inputs.oxygen_ratio);
            return d * self.transient_factor(elapsed_time);
        }
        let h = f64::max(1e-10, 1e-6 * f64::abs(effective_stress));
        let rate = self.rate(effective_stress, inputs, elapsed_time);
        let rate_plus = self.rate(effective_stress + h, inputs, elapsed_time);
        (rate_plus - rate) / h
    }

    /// Returns the stress exponent n of the underlying law
    pub fn stress_exponent(&self) -> f64 {
        self.actual.stress_exponent()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
