//! Sensor module for l9110-motion.
//!
//! Polls a pulse-width distance sensor, debounces the readings and publishes
//! the accepted value where a control loop can read it.

mod filter;
mod pulse_in;
mod sampler;
mod shared;

pub use filter::{DebounceFilter, Sample};
pub use pulse_in::PulseIn;
pub use sampler::{DistanceSampler, PulseInput, StopToken};
pub use shared::{pulse_to_mm, SharedDistance};
