use crate::base::{ParamRadialReturn, DEGENERATE_INCREMENT};
use crate::StrError;
use std::fmt;

/// Holds statistics of the Newton iterations
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    /// Number of calls to the residual function
    pub n_function: usize,

    /// Number of calls to the derivative function
    pub n_jacobian: usize,

    /// Number of Newton updates
    pub n_iterations: usize,

    /// Number of bisections (Newton steps leaving the bracket)
    pub n_bisections: usize,

    /// Last (unscaled) residual
    pub residual: f64,

    /// Indicates that the fallback safeguard replaced the solution
    pub fallback: bool,
}

/// Holds the result of the radial return
#[derive(Clone, Copy, Debug)]
pub struct Increment {
    /// Equivalent inelastic strain increment Δε
    pub delta: f64,

    /// Indicates that the iterations converged
    pub converged: bool,

    /// Statistics
    pub stats: Stats,

    /// Reason of failure
    pub error: Option<StrError>,
}

/// Implements the radial return for the scalar creep equation
///
/// Solves for Δε:
///
/// ```text
/// r(Δε) = ε̇(σ_trial - 3G Δε) Δt - Δε = 0
/// ```
///
/// using Newton's method safeguarded by the bracket `[0, σ_trial/3G]`. The derivative is
/// multiplied by the residual scale only to detect underflow; the Newton step `r/r'` is
/// computed with the unscaled values, thus the scale does not alter the iterates.
///
/// The iterations stop when any of the following holds:
///
/// ```text
/// |r| ≤ abs_tol + rel_tol |Δε|           (residual)
/// |r/r'| ≤ rel_tol |Δε|                  (Newton step)
/// upper - lower ≤ 4 ϵ upper              (bracket collapsed to round-off)
/// ```
///
/// The last two rules handle stiff cases where |r'| is so large that one ulp of Δε
/// changes r by more than the residual tolerance.
pub struct RadialReturn {
    param: ParamRadialReturn,
}

impl Stats {
    /// Allocates a new instance
    pub fn new() -> Self {
        Stats {
            n_function: 0,
            n_jacobian: 0,
            n_iterations: 0,
            n_bisections: 0,
            residual: 0.0,
            fallback: false,
        }
    }
}

impl Increment {
    /// Returns Δε if converged; otherwise returns the reason of failure
    pub fn accepted(&self) -> Result<f64, StrError> {
        if self.converged {
            Ok(self.delta)
        } else {
            Err(self.error.unwrap_or("radial return failed"))
        }
    }

    fn success(delta: f64, stats: Stats) -> Self {
        Increment {
            delta,
            converged: true,
            stats,
            error: None,
        }
    }

    fn failure(delta: f64, stats: Stats, error: StrError) -> Self {
        Increment {
            delta,
            converged: false,
            stats,
            error: Some(error),
        }
    }
}

impl RadialReturn {
    /// Allocates a new instance
    pub fn new(param: &ParamRadialReturn) -> Self {
        RadialReturn { param: *param }
    }

    /// Solves the scalar creep equation
    ///
    /// # Input
    ///
    /// * `sigma_trial` -- trial effective stress σ_trial
    /// * `three_gg` -- elastic stiffness along the flow direction (3G for isotropic elasticity)
    /// * `dt` -- time step length Δt
    /// * `rate` -- the creep-rate function ε̇(σ)
    /// * `drate_dsigma` -- the derivative dε̇/dσ
    pub fn solve<R, D>(&self, sigma_trial: f64, three_gg: f64, dt: f64, rate: R, drate_dsigma: D) -> Increment
    where
        R: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let mut stats = Stats::new();
        if !(three_gg > 0.0) {
            return Increment::failure(0.0, stats, "the elastic stiffness 3G must be positive");
        }
        if !dt.is_finite() || dt < 0.0 {
            return Increment::failure(0.0, stats, "the time step length must be finite and non-negative");
        }
        if !sigma_trial.is_finite() {
            return Increment::failure(0.0, stats, "the trial stress is not finite");
        }
        let scale = self.param.residual_scale;
        let sigma_trial = f64::max(sigma_trial, 0.0);
        let mut lower = 0.0;
        let mut upper = sigma_trial / three_gg;
        let mut delta = 0.0;
        for _ in 0..self.param.n_iteration_max {
            // residual
            let sigma = sigma_trial - three_gg * delta;
            let r = rate(sigma) * dt - delta;
            stats.n_function += 1;
            stats.residual = r;
            if !r.is_finite() {
                return Increment::failure(delta, stats, "the residual is not finite");
            }

            // check convergence
            if f64::abs(r) <= self.param.abs_tol + self.param.rel_tol * f64::abs(delta) {
                return self.finalize(delta, sigma_trial, dt, stats, &rate);
            }

            // update bracket (r is decreasing in Δε)
            if r > 0.0 {
                lower = delta;
            } else {
                upper = delta;
            }

            // Newton step
            let d = drate_dsigma(sigma) * (-three_gg) * dt - 1.0;
            stats.n_jacobian += 1;
            let d_scaled = d * scale;
            let step = if d_scaled.is_finite() && d_scaled != 0.0 {
                r / d
            } else {
                f64::NAN
            };
            if f64::abs(step) <= self.param.rel_tol * f64::abs(delta) {
                return self.finalize(delta, sigma_trial, dt, stats, &rate);
            }

            // update with bisection if the step leaves the bracket
            let mut delta_new = delta - step;
            if !(delta_new > lower && delta_new < upper) {
                delta_new = 0.5 * (lower + upper);
                stats.n_bisections += 1;
            }
            delta = delta_new;
            stats.n_iterations += 1;
            if upper - lower <= 4.0 * f64::EPSILON * upper {
                return self.finalize(delta, sigma_trial, dt, stats, &rate);
            }
        }
        Increment::failure(delta, stats, "Newton-Raphson did not converge")
    }

    /// Applies the fallback safeguard, if enabled
    fn finalize<R>(&self, delta: f64, sigma_trial: f64, dt: f64, mut stats: Stats, rate: &R) -> Increment
    where
        R: Fn(f64) -> f64,
    {
        if let Some(fraction) = self.param.fallback_fraction {
            let estimate = rate(sigma_trial) * dt;
            stats.n_function += 1;
            if f64::abs(delta) < DEGENERATE_INCREMENT && f64::abs(estimate) > DEGENERATE_INCREMENT {
                stats.fallback = true;
                return Increment::success(fraction * estimate, stats);
            }
        }
        Increment::success(delta, stats)
    }
}

impl fmt::Display for Stats {
    /// Returns a nicely formatted string representing the statistics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of function evaluations   = {}\n\
             Number of Jacobian evaluations   = {}\n\
             Number of iterations             = {}\n\
             Number of bisections             = {}\n\
             Last residual                    = {:e}\n\
             Fallback                         = {}",
            self.n_function, self.n_jacobian, self.n_iterations, self.n_bisections, self.residual, self.fallback,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
