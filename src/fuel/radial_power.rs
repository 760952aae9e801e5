use crate::base::ParamRadialPower;
use crate::{FnSpaceTime, StrError};

/// Calculates the power density in a pellet using a radial power shape
///
/// ```text
/// P(x, t) = P_history(x, t) × shape(r, b)
/// ```
///
/// **Note:** Points beyond the pellet radius are treated as lying on the surface.
pub struct RadialPower {
    /// Shape parameters
    param: ParamRadialPower,

    /// Pellet radius R
    pellet_radius: f64,

    /// Power history P_history(x, t)
    power_history: FnSpaceTime,
}

impl RadialPower {
    /// Allocates a new instance
    pub fn new(param: ParamRadialPower, pellet_radius: f64, power_history: FnSpaceTime) -> Result<Self, StrError> {
        if pellet_radius <= 0.0 {
            return Err("pellet_radius must be > 0.0");
        }
        param.validate()?;
        Ok(RadialPower {
            param,
            pellet_radius,
            power_history,
        })
    }

    /// Returns the radial coordinate r = √(x² + y²)
    pub fn radius(x: &[f64]) -> f64 {
        match x.len() {
            0 => 0.0,
            1 => f64::abs(x[0]),
            _ => f64::sqrt(x[0] * x[0] + x[1] * x[1]),
        }
    }

    /// Calculates the radial power shape at a point given the local burnup
    pub fn shape(&self, x: &[f64], burnup: f64) -> f64 {
        let r = f64::min(RadialPower::radius(x), self.pellet_radius);
        match self.param {
            ParamRadialPower::BurnupDependent { p1, p2, p3 } => {
                let depth = self.pellet_radius - r;
                1.0 + (p1 * burnup / 33.0) * f64::exp(-p2 * f64::powf(depth, p3))
            }
            ParamRadialPower::BurnupFree { base, p1, p2, p3 } => {
                let depth = 1.0 - r / self.pellet_radius;
                base + p1 * f64::exp(-p2 * f64::powf(depth, p3))
            }
        }
    }

    /// Calculates the total power density at a point
    pub fn total_power(&self, x: &[f64], t: f64, burnup: f64) -> f64 {
        (self.power_history)(x, t) * self.shape(x, burnup)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
