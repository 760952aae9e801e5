//! Implements auxiliary fuel-physics evaluations at integration points

mod burnup;
mod eigenstrain;
mod oxygen_diffusion;
mod radial_power;
pub use crate::fuel::burnup::*;
pub use crate::fuel::eigenstrain::*;
pub use crate::fuel::oxygen_diffusion::*;
pub use crate::fuel::radial_power::*;
