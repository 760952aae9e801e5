use super::{ParamCreep, ParamCreepRate, ParamDegradation, ParamRadialReturn, ParamTransient};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for UO2 creep (SI units)
    ///
    /// Fuel at 95 % of the theoretical density with 10 μm grains under a
    /// fission rate density of 1e19 fissions/m³/s.
    pub fn param_creep_uo2() -> ParamCreep {
        ParamCreep {
            young: 200e9,  // Pa
            poisson: 0.345, // -
            creep_rate: ParamCreepRate::uo2(1e19, 95.0, 10.0),
            transient: None,
            degradation: None,
            radial_return: ParamRadialReturn::new(),
        }
    }

    /// Returns sample parameters for UO2 creep with transient creep (SI units)
    pub fn param_creep_uo2_transient() -> ParamCreep {
        let mut param = SampleParams::param_creep_uo2();
        param.transient = Some(ParamTransient::uo2());
        param
    }

    /// Returns sample parameters for UO2 creep coupled with phase-field degradation (SI units)
    pub fn param_creep_uo2_degraded() -> ParamCreep {
        let mut param = SampleParams::param_creep_uo2();
        param.degradation = Some(ParamDegradation {
            stress_degradation: true,
            rate_degradation: true,
        });
        param
    }

    /// Returns sample parameters for power-law creep (SI units)
    pub fn param_creep_power_law() -> ParamCreep {
        ParamCreep {
            young: 200e9,
            poisson: 0.3,
            creep_rate: ParamCreepRate::PowerLaw {
                coefficient: 1e-24,
                n_exponent: 4.0,
                activation_energy: 3e5,
                gas_constant: 8.314,
            },
            transient: None,
            degradation: None,
            radial_return: ParamRadialReturn::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleParams;

    #[test]
    fn sample_params_are_valid() {
        SampleParams::param_creep_uo2().validate().unwrap();
        SampleParams::param_creep_uo2_transient().validate().unwrap();
        SampleParams::param_creep_uo2_degraded().validate().unwrap();
        SampleParams::param_creep_power_law().validate().unwrap();
    }
}
