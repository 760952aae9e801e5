use crate::{FnSpaceTime, StrError};

/// Avogadro's number (1/mol)
pub const AVOGADRO: f64 = 6.022e23;

/// Molar mass of UO2 (g/mol)
pub const MOLAR_MASS_UO2: f64 = 270.0;

/// Energy released per fission (J/fission)
pub const ENERGY_PER_FISSION: f64 = 3.2845e-11;

/// Default initial density of the fuel (kg/m³)
pub const DEFAULT_FUEL_DENSITY: f64 = 10412.0;

/// Calculates the local burnup (FIMA) from the power density history
///
/// ```text
/// F  = P(x, t) / α
/// N₀ = ρ₀ N_A / M × 1000
/// b  = b_old + F Δt / N₀
/// ```
pub struct Burnup {
    /// Power density P(x, t) (W/m³)
    power_density: FnSpaceTime,

    /// Initial heavy-metal atom density N₀ (1/m³)
    n0: f64,
}

impl Burnup {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `power_density` -- the power density P(x, t) in W/m³
    /// * `initial_density` -- the initial fuel density ρ₀ in kg/m³
    pub fn new(power_density: FnSpaceTime, initial_density: f64) -> Result<Self, StrError> {
        if initial_density <= 0.0 {
            return Err("initial_density must be > 0.0");
        }
        Ok(Burnup {
            power_density,
            n0: initial_density * AVOGADRO / MOLAR_MASS_UO2 * 1000.0,
        })
    }

    /// Returns the initial heavy-metal atom density N₀
    pub fn initial_atom_density(&self) -> f64 {
        self.n0
    }

    /// Calculates the fission rate density F = P/α (fissions/m³/s)
    pub fn fission_rate(&self, x: &[f64], t: f64) -> f64 {
        (self.power_density)(x, t) / ENERGY_PER_FISSION
    }

    /// Calculates the burnup increment F Δt / N₀
    pub fn increment(&self, x: &[f64], t: f64, dt: f64) -> f64 {
        self.fission_rate(x, t) * dt / self.n0
    }

    /// Returns the updated burnup given the previous value
    pub fn update(&self, burnup_old: f64, x: &[f64], t: f64, dt: f64) -> f64 {
        burnup_old + self.increment(x, t, dt)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
