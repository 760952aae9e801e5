//! Makes available common structures needed to run a creep update
//!
//! You may write `use uo2creep::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Idealization, SampleParams};
pub use crate::base::{ParamCreep, ParamCreepRate, ParamDegradation, ParamRadialReturn, ParamTransient};
pub use crate::material::{CreepOutput, CreepState, CreepStates, CreepUpdate, LocalInputs};
pub use crate::material::{NoObserver, Observer, TracingObserver};
