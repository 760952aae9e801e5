use super::{Idealization, ParamCreep, ParamDegradation, ParamTransient};
use crate::StrError;
use std::fmt;

/// Holds configuration data for the creep stress-update
pub struct Config {
    /// Geometry idealization
    pub ideal: Idealization,

    /// Parameters of the creep model
    pub param: ParamCreep,
}

impl Config {
    /// Allocates a new instance
    ///
    /// **Note:** The parameters are validated here; thus, configuration errors are
    /// captured before any per-point evaluation.
    pub fn new(ndim: usize, param: ParamCreep) -> Result<Self, StrError> {
        if ndim != 2 && ndim != 3 {
            return Err("ndim must be 2 or 3");
        }
        param.validate()?;
        Ok(Config {
            ideal: Idealization::new(ndim),
            param,
        })
    }

    /// Sets the parameters of the creep model
    pub fn set_param(&mut self, param: ParamCreep) -> Result<&mut Self, StrError> {
        param.validate()?;
        self.param = param;
        Ok(self)
    }

    /// Enables the transient-creep amplification
    pub fn set_transient(&mut self, amplitude: f64, decay: f64) -> Result<&mut Self, StrError> {
        let mut param = self.param;
        param.transient = Some(ParamTransient { amplitude, decay });
        self.set_param(param)
    }

    /// Enables the coupling with the phase-field degradation function
    pub fn set_degradation(&mut self, stress_degradation: bool, rate_degradation: bool) -> Result<&mut Self, StrError> {
        let mut param = self.param;
        param.degradation = Some(ParamDegradation {
            stress_degradation,
            rate_degradation,
        });
        self.set_param(param)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "ndim = {:?}\n", self.ideal.ndim()).unwrap();
        write!(f, "young = {:?}\n", self.param.young).unwrap();
        write!(f, "poisson = {:?}\n", self.param.poisson).unwrap();
        write!(f, "creep_rate = {:?}\n", self.param.creep_rate).unwrap();
        write!(f, "transient = {:?}\n", self.param.transient).unwrap();
        write!(f, "degradation = {:?}\n", self.param.degradation).unwrap();
        write!(f, "radial_return = {:?}\n", self.param.radial_return).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
