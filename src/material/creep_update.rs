use super::{strain_energy_rate_density, update_history, CreepRateModel, CreepState, CreepStates};
use super::{Degradation, ElasticityTrait, LinearElastic, LocalInputs, Observer, RadialReturn, Stats};
use crate::base::{Config, MIN_DEV_NORM_SQUARED};
use crate::StrError;
use rayon::prelude::*;
use russell_tensor::{t2_add, t2_ddot_t2, Mandel, Tensor2};
use std::sync::Arc;

/// Holds the results of the creep stress-update at an integration point
#[derive(Clone, Debug)]
pub struct CreepOutput {
    /// Updated stress tensor σ
    pub stress: Tensor2,

    /// Updated elastic strain tensor εₑ
    pub elastic_strain: Tensor2,

    /// Equivalent inelastic strain increment Δε
    pub delta: f64,

    /// Trial effective (von Mises) stress
    pub sigma_trial: f64,

    /// (Degraded) strain-energy rate density of the creep flow
    pub energy_rate: f64,

    /// Derivative of the strain-energy rate density w.r.t the phase field
    pub denergy_rate_dphase: f64,

    /// Statistics of the radial return
    pub stats: Stats,
}

/// Implements the implicit creep stress-update (radial return)
///
/// For each integration point:
///
/// 1. Computes the trial stress `σ_trial = D : (ε - εᵢ_old)`
/// 2. Computes the flow direction `N = 3/2 s/σ_vm` with `σ_vm = √(3/2 s:s)`
/// 3. Updates the transient-creep history (if enabled)
/// 4. Solves the scalar creep equation for Δε
/// 5. Updates `εᵢ ← εᵢ_old + Δε N` and `σ = D : (ε - εᵢ)`
/// 6. Computes the strain-energy rate density
///
/// The state is only modified if the radial return converges.
///
/// **Note:** This model works in 2D (plane-strain) or 3D.
pub struct CreepUpdate {
    /// Elastic law
    elasticity: Box<dyn ElasticityTrait>,

    /// Creep-rate law (with transient and degradation)
    rate_model: CreepRateModel,

    /// Scalar solver
    solver: RadialReturn,

    /// Mandel representation of all tensors
    mandel: Mandel,

    /// Receives the diagnostics
    observer: Arc<dyn Observer>,
}

impl CreepUpdate {
    /// Allocates a new instance
    pub fn new(config: &Config, observer: Arc<dyn Observer>) -> Result<Self, StrError> {
        config.param.validate()?;
        let elasticity = LinearElastic::new(&config.ideal, config.param.young, config.param.poisson);
        Ok(CreepUpdate {
            elasticity: Box::new(elasticity),
            rate_model: CreepRateModel::new(&config.param)?,
            solver: RadialReturn::new(&config.param.radial_return),
            mandel: config.ideal.mandel(),
            observer,
        })
    }

    /// Returns the Mandel representation of the tensors
    pub fn mandel(&self) -> Mandel {
        self.mandel
    }

    /// Returns the creep-rate model
    pub fn rate_model(&self) -> &CreepRateModel {
        &self.rate_model
    }

    /// Updates the state at a single integration point
    ///
    /// # Input
    ///
    /// * `point` -- identifier of the integration point (used by the observer only)
    /// * `state` -- the state at the beginning of the time step; updated on success
    /// * `strain` -- the total strain tensor at the end of the time step
    /// * `inputs` -- the temperature, oxygen ratio, and degradation at the point
    /// * `dt` -- the time step length
    pub fn update_state(
        &self,
        point: usize,
        state: &mut CreepState,
        strain: &Tensor2,
        inputs: &LocalInputs,
        dt: f64,
    ) -> Result<CreepOutput, StrError> {
        if strain.mandel() != self.mandel || state.inelastic_strain.mandel() != self.mandel {
            return Err("tensors must have the same Mandel representation as the model");
        }
        let checked = if dt.is_finite() && dt >= 0.0 {
            inputs.validate()
        } else {
            Err("the time step length must be finite and non-negative")
        };
        if let Err(error) = checked {
            self.observer.failed(point, error, &Stats::new());
            return Err(error);
        }

        // trial stress: σ_trial = D : (ε - εᵢ_old)
        let mut elastic_strain = Tensor2::new(self.mandel);
        let mut stress = Tensor2::new(self.mandel);
        t2_add(&mut elastic_strain, 1.0, strain, -1.0, &state.inelastic_strain);
        self.elasticity.calc_stress(&mut stress, &elastic_strain);

        // flow direction: N = 3/2 s / σ_vm
        let mut s = Tensor2::new(self.mandel);
        stress.deviator(&mut s);
        let s_ddot_s = t2_ddot_t2(&s, &s);
        let sigma_trial = f64::sqrt(1.5 * s_ddot_s);
        let norm = f64::sqrt(1.5 * f64::max(s_ddot_s, MIN_DEV_NORM_SQUARED));
        let mut nn = Tensor2::new(self.mandel);
        nn.set_tensor(1.5 / norm, &s);

        // transient-creep history
        let (max_stress, max_stress_time) = if self.rate_model.transient_enabled() {
            update_history(sigma_trial, state.max_stress, state.max_stress_time, dt)
        } else {
            (state.max_stress, state.max_stress_time)
        };

        // radial return
        let three_gg = 3.0 * self.elasticity.shear_modulus();
        let increment = self.solver.solve(
            sigma_trial,
            three_gg,
            dt,
            |sigma| self.rate_model.rate(sigma, inputs, max_stress_time),
            |sigma| self.rate_model.drate_dsigma(sigma, inputs, max_stress_time),
        );
        let delta = match increment.accepted() {
            Ok(delta) => delta,
            Err(error) => {
                self.observer.failed(point, error, &increment.stats);
                return Err(error);
            }
        };
        if increment.stats.fallback {
            self.observer.fallback(point, delta, &increment.stats);
        } else {
            self.observer.converged(point, delta, &increment.stats);
        }

        // commit: εᵢ ← εᵢ_old + Δε N
        state.update_inelastic_strain(delta, &nn);
        state.max_stress = max_stress;
        state.max_stress_time = max_stress_time;

        // final stress: σ = D : (ε - εᵢ)
        t2_add(&mut elastic_strain, 1.0, strain, -1.0, &state.inelastic_strain);
        self.elasticity.calc_stress(&mut stress, &elastic_strain);

        // strain-energy rate density
        let (energy_rate, denergy_rate_dphase) = self.energy_rate(&stress, &nn, delta, inputs, dt);
        Ok(CreepOutput {
            stress,
            elastic_strain,
            delta,
            sigma_trial,
            energy_rate,
            denergy_rate_dphase,
            stats: increment.stats,
        })
    }

    /// Updates the states at all integration points in parallel
    ///
    /// The states are restored to the beginning of the time step if any point fails;
    /// in this case, the returned error is one of the failures.
    pub fn update_all(
        &self,
        states: &mut CreepStates,
        strains: &[Tensor2],
        inputs: &[LocalInputs],
        dt: f64,
    ) -> Result<Vec<CreepOutput>, StrError> {
        if strains.len() != states.len() || inputs.len() != states.len() {
            return Err("the numbers of strains and inputs must equal the number of states");
        }
        states.backup();
        let res: Result<Vec<CreepOutput>, StrError> = states
            .all
            .par_iter_mut()
            .zip(strains.par_iter())
            .zip(inputs.par_iter())
            .enumerate()
            .map(|(point, ((state, strain), local))| self.update_state(point, state, strain, local, dt))
            .collect();
        if res.is_err() {
            states.restore();
        }
        res
    }

    /// Computes the (degraded) strain-energy rate density and its derivative w.r.t the phase field
    fn energy_rate(&self, stress: &Tensor2, nn: &Tensor2, delta: f64, inputs: &LocalInputs, dt: f64) -> (f64, f64) {
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        let mut strain_rate = Tensor2::new(self.mandel);
        strain_rate.set_tensor(delta / dt, nn); // ε̇ᵢ = Δε N / Δt
        let n = self.rate_model.stress_exponent();
        let active = strain_energy_rate_density(n, stress, &strain_rate);
        let degradation = self.rate_model.degradation();
        let denergy = match degradation {
            Degradation::Plain => 0.0,
            Degradation::Degraded { .. } => inputs.ddegradation_dphase * active,
        };
        (degradation.energy_factor(inputs.degradation) * active, denergy)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
