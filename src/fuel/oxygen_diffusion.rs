use crate::base::MIN_TEMPERATURE;
use crate::StrError;
use russell_lab::Vector;

/// Minimum value of u and T in the diffusivity
const MIN_DIFFUSION_ARG: f64 = 1e-6;

/// Maximum value of u in the thermodynamic factor (slightly below 1/3)
const MAX_RATIO_THERMO: f64 = 0.32;

/// Minimum value of the denominators and of the thermodynamic factor
const MIN_THERMO: f64 = 1e-8;

/// Implements the oxygen hyper-stoichiometry diffusion with thermal transport (Soret effect)
///
/// ```text
/// D  = 10^(-9.386 - 4260/T + 0.0012 T u + 0.00075 T log₁₀(1 + 2/u))
/// F  = (2 + u) / (2 (1 - 3u) (1 - 2u))
/// Q* = -1380.8 - 134435.5 exp(-u/0.0261)
/// J  = -D (∇u + u Q* / (F R T²) ∇T)
/// ```
///
/// where u is the oxygen hyper-stoichiometry ratio and T the temperature.
pub struct OxygenDiffusion {
    /// Universal gas constant R (J/mol/K)
    gas_constant: f64,
}

impl OxygenDiffusion {
    /// Allocates a new instance
    pub fn new(gas_constant: f64) -> Result<Self, StrError> {
        if gas_constant <= 0.0 {
            return Err("gas_constant must be > 0.0");
        }
        Ok(OxygenDiffusion { gas_constant })
    }

    /// Calculates the diffusivity D (m²/s)
    pub fn diffusivity(&self, u: f64, temperature: f64) -> f64 {
        let u = f64::max(f64::abs(u), MIN_DIFFUSION_ARG);
        let tt = f64::max(f64::abs(temperature), MIN_DIFFUSION_ARG);
        let exponent = -9.386 - 4260.0 / tt + 0.0012 * tt * u + 0.00075 * tt * f64::log10(1.0 + 2.0 / u);
        f64::powf(10.0, exponent)
    }

    /// Calculates the thermodynamic factor F
    pub fn thermodynamic_factor(&self, u: f64) -> f64 {
        let u = f64::min(f64::abs(u), MAX_RATIO_THERMO);
        let den1 = f64::max(1.0 - 3.0 * u, MIN_THERMO);
        let den2 = f64::max(1.0 - 2.0 * u, MIN_THERMO);
        f64::max((2.0 + u) / (2.0 * den1 * den2), MIN_THERMO)
    }

    /// Calculates the heat of transport Q* (J/mol)
    pub fn heat_of_transport(&self, u: f64) -> f64 {
        -1380.8 - 134435.5 * f64::exp(-u / 0.0261)
    }

    /// Calculates the oxygen flux J
    ///
    /// # Output
    ///
    /// * `flux` -- the flux vector J (ndim)
    ///
    /// # Input
    ///
    /// * `u` -- the oxygen hyper-stoichiometry ratio
    /// * `grad_u` -- the gradient of u (ndim)
    /// * `temperature` -- the temperature T
    /// * `grad_temperature` -- the gradient of T (ndim)
    pub fn calc_flux(
        &self,
        flux: &mut Vector,
        u: f64,
        grad_u: &Vector,
        temperature: f64,
        grad_temperature: &Vector,
    ) -> Result<(), StrError> {
        let ndim = flux.dim();
        if grad_u.dim() != ndim || grad_temperature.dim() != ndim {
            return Err("flux and gradient vectors must have the same dimension");
        }
        let dd = self.diffusivity(u, temperature);
        let ff = self.thermodynamic_factor(u);
        let q_star = self.heat_of_transport(u);
        let tt = f64::max(f64::abs(temperature), MIN_TEMPERATURE);
        let coef = u / ff * q_star / (self.gas_constant * tt * tt);
        for i in 0..ndim {
            flux[i] = -dd * (grad_u[i] + coef * grad_temperature[i]);
        }
        Ok(())
    }

    /// Calculates the weak-form residual contribution `-∇ψ · J` of a test function ψ
    pub fn residual(
        &self,
        grad_test: &Vector,
        u: f64,
        grad_u: &Vector,
        temperature: f64,
        grad_temperature: &Vector,
    ) -> Result<f64, StrError> {
        let mut flux = Vector::new(grad_test.dim());
        self.calc_flux(&mut flux, u, grad_u, temperature, grad_temperature)?;
        let mut res = 0.0;
        for i in 0..grad_test.dim() {
            res -= grad_test[i] * flux[i];
        }
        Ok(res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
