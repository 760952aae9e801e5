use super::CreepRateTrait;
use crate::base::{ParamCreepRate, MIN_LOG_OXYGEN_RATIO, MIN_OXYGEN_RATIO, MIN_STRESS, MIN_TEMPERATURE};
use crate::StrError;

/// Coefficient A1 of the fission-rate term of the diffusion mechanism
const A1: f64 = 0.3919;

/// Coefficient A2 of the fission-rate term of the diffusion mechanism
const A2: f64 = 1.31e-19;

/// Density offset of the diffusion mechanism (percent)
const A3: f64 = 87.7;

/// Coefficient A4 of the dislocation mechanism
const A4: f64 = 2.0391e-25;

/// Density offset of the dislocation mechanism (percent)
const A6: f64 = 90.5;

/// Coefficient A7 of the irradiation mechanism
const A7: f64 = 3.7226e-35;

/// Stress exponent of the dislocation mechanism
const N_DISLOCATION: f64 = 4.5;

/// Coefficient of the transition stress σt = K_TRANSITION / G^E_TRANSITION
const K_TRANSITION: f64 = 1.6547e7;

/// Grain-size exponent of the transition stress
const E_TRANSITION: f64 = 0.5714;

/// Holds the rates of each creep mechanism
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mechanisms {
    /// Thermal diffusion creep (low stress)
    pub diffusion: f64,

    /// Thermal dislocation creep (high stress)
    pub dislocation: f64,

    /// Irradiation creep
    pub irradiation: f64,
}

impl Mechanisms {
    /// Returns the sum of all mechanisms
    pub fn total(&self) -> f64 {
        self.diffusion + self.dislocation + self.irradiation
    }
}

/// Implements the UO2 creep-rate law
///
/// Three additive mechanisms:
///
/// ```text
/// ε̇_th1 = (A1 + A2 F) min(σ, σt) exp(-Q1/RT) / ((D - 87.7) G²)
/// ε̇_th2 = A4 σ⁴·⁵ exp(-Q2/RT) / (D - 90.5)
/// ε̇_ir  = A7 F σ exp(-Q3/RT)
/// ```
///
/// The activation energies Q1 and Q2 depend on the oxygen hyper-stoichiometry x:
///
/// ```text
/// Qi = ai / (exp(-20/ln(x) - 8) + 1) + bi
/// ```
///
/// The diffusion mechanism saturates at the transition stress `σt = 1.6547e7 / G^0.5714`.
pub struct Uo2Creep {
    /// Fission rate density F
    fission_rate: f64,

    /// Gas constant R
    gas_constant: f64,

    /// Sigmoid coefficients (a1, b1) of Q1
    q1: (f64, f64),

    /// Sigmoid coefficients (a2, b2) of Q2
    q2: (f64, f64),

    /// Activation energy Q3
    q3: f64,

    /// Coefficient of the diffusion mechanism: (A1 + A2 F) / ((D - 87.7) G²)
    c_diffusion: f64,

    /// Coefficient of the dislocation mechanism: A4 / (D - 90.5)
    c_dislocation: f64,

    /// Coefficient of the irradiation mechanism: A7 F
    c_irradiation: f64,

    /// Transition stress σt
    sigma_t: f64,
}

impl Uo2Creep {
    /// Allocates a new instance
    pub fn new(param: &ParamCreepRate) -> Result<Self, StrError> {
        match *param {
            ParamCreepRate::Uo2 {
                fission_rate,
                theoretical_density,
                grain_size,
                gas_constant,
                q1_a,
                q1_b,
                q2_a,
                q2_b,
                q3,
            } => {
                param.validate()?;
                let gg = grain_size;
                let dd = theoretical_density;
                Ok(Uo2Creep {
                    fission_rate,
                    gas_constant,
                    q1: (q1_a, q1_b),
                    q2: (q2_a, q2_b),
                    q3,
                    c_diffusion: (A1 + A2 * fission_rate) / ((dd - A3) * gg * gg),
                    c_dislocation: A4 / (dd - A6),
                    c_irradiation: A7 * fission_rate,
                    sigma_t: K_TRANSITION / f64::powf(gg, E_TRANSITION),
                })
            }
            _ => Err("parameters must correspond to the Uo2 creep-rate law"),
        }
    }

    /// Returns the fission rate density
    pub fn fission_rate(&self) -> f64 {
        self.fission_rate
    }

    /// Returns the transition stress σt
    pub fn transition_stress(&self) -> f64 {
        self.sigma_t
    }

    /// Calculates the activation energies (Q1, Q2) for a given oxygen ratio
    ///
    /// The oxygen ratio is clamped to [MIN_OXYGEN_RATIO] and |ln(x)| to [MIN_LOG_OXYGEN_RATIO].
    /// A NaN ratio propagates to the results.
    pub fn activation_energies(&self, oxygen_ratio: f64) -> (f64, f64) {
        let x = if oxygen_ratio < MIN_OXYGEN_RATIO {
            MIN_OXYGEN_RATIO
        } else {
            oxygen_ratio
        };
        let mut log_x = f64::ln(x);
        if f64::abs(log_x) < MIN_LOG_OXYGEN_RATIO {
            log_x = if log_x < 0.0 { -MIN_LOG_OXYGEN_RATIO } else { MIN_LOG_OXYGEN_RATIO };
        }
        let sigmoid = 1.0 / (f64::exp(-20.0 / log_x - 8.0) + 1.0);
        let q1 = self.q1.0 * sigmoid + self.q1.1;
        let q2 = self.q2.0 * sigmoid + self.q2.1;
        (q1, q2)
    }

    /// Returns the Arrhenius factors exp(-Qi/RT) of the three mechanisms
    fn arrhenius(&self, temperature: f64, oxygen_ratio: f64) -> (f64, f64, f64) {
        let t = if temperature < MIN_TEMPERATURE {
            MIN_TEMPERATURE
        } else {
            temperature
        };
        let rt = self.gas_constant * t;
        let (q1, q2) = self.activation_energies(oxygen_ratio);
        (
            f64::exp(-q1 / rt),
            f64::exp(-q2 / rt),
            f64::exp(-self.q3 / rt),
        )
    }

    /// Calculates the rate of each mechanism
    ///
    /// Returns zero rates if the effective stress is below [MIN_STRESS].
    pub fn mechanisms(&self, effective_stress: f64, temperature: f64, oxygen_ratio: f64) -> Mechanisms {
        let sigma = f64::abs(effective_stress);
        if sigma < MIN_STRESS {
            return Mechanisms {
                diffusion: 0.0,
                dislocation: 0.0,
                irradiation: 0.0,
            };
        }
        let (e1, e2, e3) = self.arrhenius(temperature, oxygen_ratio);
        Mechanisms {
            diffusion: self.c_diffusion * f64::min(sigma, self.sigma_t) * e1,
            dislocation: self.c_dislocation * f64::powf(sigma, N_DISLOCATION) * e2,
            irradiation: self.c_irradiation * sigma * e3,
        }
    }
}

impl CreepRateTrait for Uo2Creep {
    fn rate(&self, effective_stress: f64, temperature: f64, oxygen_ratio: f64) -> f64 {
        self.mechanisms(effective_stress, temperature, oxygen_ratio).total()
    }

    fn drate_dsigma(&self, effective_stress: f64, temperature: f64, oxygen_ratio: f64) -> f64 {
        let sigma = f64::abs(effective_stress);
        if sigma < MIN_STRESS {
            return 0.0;
        }
        let (e1, e2, e3) = self.arrhenius(temperature, oxygen_ratio);
        let d_diffusion = if sigma < self.sigma_t { self.c_diffusion * e1 } else { 0.0 };
        let d_dislocation = N_DISLOCATION * self.c_dislocation * f64::powf(sigma, N_DISLOCATION - 1.0) * e2;
        let d_irradiation = self.c_irradiation * e3;
        d_diffusion + d_dislocation + d_irradiation
    }

    fn stress_exponent(&self) -> f64 {
        N_DISLOCATION
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Uo2Creep;
    use crate::base::{ParamCreepRate, MIN_STRESS};
    use crate::material::CreepRateTrait;
    use russell_lab::approx_eq;

    const T: f64 = 1500.0;
    const X: f64 = 2.01;

    #[test]
    fn new_captures_errors() {
        let param = ParamCreepRate::PowerLaw {
            coefficient: 1.0,
            n_exponent: 1.0,
            activation_energy: 0.0,
            gas_constant: 8.314,
        };
        assert_eq!(
            Uo2Creep::new(&param).err(),
            Some("parameters must correspond to the Uo2 creep-rate law")
        );
        let param = ParamCreepRate::uo2(1e19, 95.0, -1.0);
        assert_eq!(Uo2Creep::new(&param).err(), Some("grain_size must be > 0.0"));
    }

    #[test]
    fn activation_energies_work() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        let (q1, q2) = model.activation_energies(X);
        approx_eq(q1, 376591.0, 1e-8);
        approx_eq(q2, 552334.0, 1e-8);

        // x → 1⁻ makes the sigmoid vanish; x = 1 uses the floor of ln(x)
        let (q1, q2) = model.activation_energies(1.0);
        assert!(q1.is_finite() && q2.is_finite());
        approx_eq(q1, 376591.0, 1e-8);
        let (q1, q2) = model.activation_energies(0.999);
        approx_eq(q1, 301762.0, 1e-8);
        approx_eq(q2, 469191.0, 1e-8);

        // non-positive ratios are clamped
        let (q1, q2) = model.activation_energies(-3.0);
        assert!(q1.is_finite() && q2.is_finite());
        assert_eq!(model.activation_energies(0.0), model.activation_energies(-3.0));
    }

    #[test]
    fn rate_matches_reference_values() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        approx_eq(model.transition_stress(), 4439348.779366129, 1e-6);

        // σ > σt (diffusion term saturated)
        let m = model.mechanisms(1e7, T, X);
        approx_eq(m.diffusion, 7.950478363795392e-10, 1e-20);
        approx_eq(m.dislocation, 8.347432191469016e-14, 1e-24);
        approx_eq(m.irradiation, 6.502843744870774e-10, 1e-20);
        approx_eq(model.rate(1e7, T, X), 1.4454156851885313e-09, 1e-20);

        // σ < σt
        let m = model.mechanisms(1e6, T, X);
        approx_eq(m.diffusion, 1.790910955397066e-10, 1e-20);
        approx_eq(m.dislocation, 2.6396898338852846e-18, 1e-28);
        approx_eq(m.irradiation, 6.502843744870775e-11, 1e-21);
        approx_eq(model.rate(1e6, T, X), 2.4411953562810417e-10, 1e-20);
    }

    #[test]
    fn transition_stress_caps_diffusion_only() {
        // large grains make σt small (≈ 2.3e4 Pa)
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 100000.0)).unwrap();
        let sigma_t = model.transition_stress();
        approx_eq(sigma_t, 22999.546188687353, 1e-8);
        let m = model.mechanisms(1e7, T, X);
        approx_eq(m.diffusion, 4.119013923848102e-20, 1e-30);
        let m_t = model.mechanisms(sigma_t, T, X);
        approx_eq(m.diffusion, m_t.diffusion, 1e-30);
        // the other mechanisms use the true stress (independent of G)
        approx_eq(m.dislocation, 8.347432191469016e-14, 1e-24);
        approx_eq(m.irradiation, 6.502843744870774e-10, 1e-20);
    }

    #[test]
    fn rate_vanishes_at_zero_stress() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        assert_eq!(model.rate(0.0, T, X), 0.0);
        assert_eq!(model.rate(0.5 * MIN_STRESS, T, X), 0.0);
        assert_eq!(model.drate_dsigma(0.0, T, X), 0.0);
    }

    #[test]
    fn nan_inputs_give_nan_rates() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        assert!(model.rate(1e7, f64::NAN, X).is_nan());
        assert!(model.rate(1e7, T, f64::NAN).is_nan());
        assert!(model.drate_dsigma(1e7, f64::NAN, X).is_nan());
        let (q1, q2) = model.activation_energies(f64::NAN);
        assert!(q1.is_nan() && q2.is_nan());
    }

    #[test]
    fn rate_is_monotonic() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        let mut previous = model.mechanisms(0.0, T, X);
        for i in 1..200 {
            let sigma = (i as f64) * 1e5;
            let m = model.mechanisms(sigma, T, X);
            assert!(m.diffusion >= previous.diffusion);
            assert!(m.dislocation >= previous.dislocation);
            assert!(m.irradiation >= previous.irradiation);
            assert!(m.total() >= previous.total());
            assert!(m.total() >= 0.0);
            previous = m;
        }
    }

    #[test]
    fn drate_dsigma_works() {
        let model = Uo2Creep::new(&ParamCreepRate::uo2(1e19, 95.0, 10.0)).unwrap();
        for sigma in [1e6, 3e6, 1e7, 5e7] {
            let h = 1e-3 * sigma;
            let num = (model.rate(sigma + h, T, X) - model.rate(sigma - h, T, X)) / (2.0 * h);
            let ana = model.drate_dsigma(sigma, T, X);
            approx_eq(ana / num, 1.0, 1e-4);
        }
        assert_eq!(model.stress_exponent(), 4.5);
    }
}
