//! Configuration module for l9110-motion.
//!
//! Provides types for loading and validating motor channel and distance
//! sampler configurations from TOML files (with `std` feature) or pre-parsed data.

#[cfg(feature = "std")]
mod loader;
mod motor;
mod sampler;
mod system;
mod validation;

pub use motor::MotorConfig;
pub use sampler::SamplerConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
