use crate::StrError;

/// Holds the externally supplied fields at an integration point
///
/// These values are read-only during a time step.
#[derive(Clone, Copy, Debug)]
pub struct LocalInputs {
    /// Temperature T (K)
    pub temperature: f64,

    /// Oxygen hyper-stoichiometry ratio x
    pub oxygen_ratio: f64,

    /// Phase-field degradation function g ∈ [0, 1]
    pub degradation: f64,

    /// Derivative of the degradation function w.r.t the phase field: dg/dφ
    pub ddegradation_dphase: f64,
}

impl LocalInputs {
    /// Allocates a new instance without degradation (g = 1)
    pub fn new(temperature: f64, oxygen_ratio: f64) -> Self {
        LocalInputs {
            temperature,
            oxygen_ratio,
            degradation: 1.0,
            ddegradation_dphase: 0.0,
        }
    }

    /// Sets the degradation function g and its derivative dg/dφ
    pub fn with_degradation(mut self, g: f64, dg_dphase: f64) -> Self {
        self.degradation = g;
        self.ddegradation_dphase = dg_dphase;
        self
    }

    /// Checks that all fields are finite
    ///
    /// The floors applied by the creep-rate laws would otherwise turn NaN into a zero rate.
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.temperature.is_finite() {
            return Err("temperature must be finite");
        }
        if !self.oxygen_ratio.is_finite() {
            return Err("oxygen_ratio must be finite");
        }
        if !self.degradation.is_finite() || !self.ddegradation_dphase.is_finite() {
            return Err("degradation and its derivative must be finite");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LocalInputs;

    #[test]
    fn validate_captures_errors() {
        let inputs = LocalInputs::new(1500.0, 2.01);
        assert_eq!(inputs.validate(), Ok(()));
        assert_eq!(
            LocalInputs::new(f64::NAN, 2.01).validate().err(),
            Some("temperature must be finite")
        );
        assert_eq!(
            LocalInputs::new(f64::INFINITY, 2.01).validate().err(),
            Some("temperature must be finite")
        );
        assert_eq!(
            LocalInputs::new(1500.0, f64::NAN).validate().err(),
            Some("oxygen_ratio must be finite")
        );
        assert_eq!(
            inputs.with_degradation(f64::NAN, 0.0).validate().err(),
            Some("degradation and its derivative must be finite")
        );
        assert_eq!(
            inputs.with_degradation(0.5, f64::NEG_INFINITY).validate().err(),
            Some("degradation and its derivative must be finite")
        );
    }
}
