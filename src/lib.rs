//! # l9110-motion
//!
//! L9110 H-bridge motor driver and debounced distance sampler with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: Uses `OutputPin` for the IA/IB inputs, `DelayNs` for polling
//! - **no_std compatible**: Core library works without standard library
//! - **Legacy command masks**: `FORWARD | BRAKE` style flags, validated before anything moves
//! - **Typed commands**: [`Command`] cannot express a conflicting direction or mode
//! - **Debounced distance**: single-sample noise filtered out, result shared atomically
//! - **Configuration-driven**: Describe motor channels and the sampler in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use l9110_motion::{CommandMask, L9110Motor, SharedDistance};
//!
//! let mut motor = L9110Motor::new();
//! motor.initialize(ia_pin, ib_pin);
//!
//! motor.run(CommandMask::FORWARD)?;
//! if DISTANCE.current() < 600 {
//!     motor.run(CommandMask::BRAKE)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motor;
pub mod sensor;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, SamplerConfig, SystemConfig};
pub use error::{Error, Result};
pub use motor::{Command, CommandMask, Direction, L9110Motor, L9110MotorBuilder, Mode, RunState};
pub use sensor::{
    DebounceFilter, DistanceSampler, PulseIn, PulseInput, Sample, SharedDistance, StopToken,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

/// Legacy flag: drive forward.
pub const FORWARD: CommandMask = CommandMask::FORWARD;
/// Legacy flag: drive backward.
pub const BACKWARD: CommandMask = CommandMask::BACKWARD;
/// Legacy flag: brake.
pub const BRAKE: CommandMask = CommandMask::BRAKE;
/// Legacy flag: release.
pub const RELEASE: CommandMask = CommandMask::RELEASE;
