//! Error types for l9110-motion library.
//!
//! Provides unified error handling across configuration, motor control, and distance sampling.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all l9110-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Distance sampler error
    Sampler(SamplerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Both H-bridge inputs of a motor use the same pin
    IdenticalPins {
        /// Motor name
        motor: heapless::String<32>,
        /// The shared pin identifier
        pin: u8,
    },
    /// A pin is wired to more than one input across the configuration
    PinInUse(u8),
    /// Sampler threshold must be > 0
    InvalidThreshold(u32),
    /// Sampler poll interval must be > 0
    InvalidPollInterval(u32),
    /// Sampler stale limit must be > 0
    InvalidStaleLimit(u8),
    /// Pulse timeout must be > 0
    InvalidTimeout(u32),
    /// Required builder field missing
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Command combines FORWARD with BACKWARD, or BRAKE with RELEASE
    InvalidCommand {
        /// The rejected command bits
        mask: u8,
    },
    /// Pin operation failed
    PinError,
}

/// Distance sampler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerError {
    /// The pulse input could not be measured
    Measurement,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Sampler(e) => write!(f, "Sampler error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::IdenticalPins { motor, pin } => {
                write!(f, "Motor '{}' uses pin {} for both inputs", motor, pin)
            }
            ConfigError::PinInUse(pin) => write!(f, "Pin {} is assigned more than once", pin),
            ConfigError::InvalidThreshold(v) => write!(f, "Invalid threshold: {} us. Must be > 0", v),
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidStaleLimit(v) => write!(f, "Invalid stale limit: {}. Must be > 0", v),
            ConfigError::InvalidTimeout(v) => write!(f, "Invalid pulse timeout: {} us. Must be > 0", v),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::InvalidCommand { mask } => {
                write!(f, "Invalid command 0x{:02x}: conflicting direction or mode bits", mask)
            }
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::Measurement => write!(f, "Pulse measurement failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<SamplerError> for Error {
    fn from(e: SamplerError) -> Self {
        Error::Sampler(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for SamplerError {}
