//! Configuration validation.

use heapless::Vec;

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, SamplerConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Each motor uses two distinct pins
/// - No pin is shared between motors or with the sampler
/// - Sampler threshold, poll interval and stale limit are non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let mut used: Vec<u8, 17> = Vec::new();

    for (_, motor) in config.motors.iter() {
        validate_motor(motor)?;
        for pin in motor.pins() {
            claim_pin(&mut used, pin)?;
        }
    }

    validate_sampler(&config.sampler)?;
    if let Some(pin) = config.sampler.pin {
        claim_pin(&mut used, pin)?;
    }

    Ok(())
}

fn validate_motor(config: &MotorConfig) -> Result<()> {
    if config.pin_a == config.pin_b {
        return Err(Error::Config(ConfigError::IdenticalPins {
            motor: config.name.clone(),
            pin: config.pin_a,
        }));
    }

    Ok(())
}

fn validate_sampler(config: &SamplerConfig) -> Result<()> {
    if config.threshold_us == 0 {
        return Err(Error::Config(ConfigError::InvalidThreshold(
            config.threshold_us,
        )));
    }

    if config.poll_interval_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            config.poll_interval_ms,
        )));
    }

    if config.stale_limit == 0 {
        return Err(Error::Config(ConfigError::InvalidStaleLimit(
            config.stale_limit,
        )));
    }

    if config.timeout_us == 0 {
        return Err(Error::Config(ConfigError::InvalidTimeout(config.timeout_us)));
    }

    Ok(())
}

fn claim_pin(used: &mut Vec<u8, 17>, pin: u8) -> Result<()> {
    if used.contains(&pin) {
        return Err(Error::Config(ConfigError::PinInUse(pin)));
    }
    // 8 motors * 2 pins + 1 sampler pin always fits.
    let _ = used.push(pin);
    Ok(())
}
