//! Builder pattern for L9110Motor.

use embedded_hal::digital::OutputPin;

use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::L9110Motor;

/// Builder for creating L9110Motor instances.
pub struct L9110MotorBuilder<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    pin_a: Option<IA>,
    pin_b: Option<IB>,
    name: Option<heapless::String<32>>,
    invert_direction: bool,
}

impl<IA, IB> Default for L9110MotorBuilder<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IA, IB> L9110MotorBuilder<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pin_a: None,
            pin_b: None,
            name: None,
            invert_direction: false,
        }
    }

    /// Set the pin driving input A.
    pub fn pin_a(mut self, pin: IA) -> Self {
        self.pin_a = Some(pin);
        self
    }

    /// Set the pin driving input B.
    pub fn pin_b(mut self, pin: IB) -> Self {
        self.pin_b = Some(pin);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.invert_direction = config.invert_direction;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the L9110Motor.
    ///
    /// # Errors
    ///
    /// Returns an error if only one of the two pins was given. With no pins
    /// at all the motor is built unconfigured.
    pub fn build(self) -> Result<L9110Motor<IA, IB>> {
        let pins = match (self.pin_a, self.pin_b) {
            (Some(a), Some(b)) => Some((a, b)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingField("pin_b").into()),
            (None, Some(_)) => return Err(ConfigError::MissingField("pin_a").into()),
        };

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap_or_default());

        Ok(L9110Motor::from_parts(pins, name, self.invert_direction))
    }
}

impl<IA, IB> L9110Motor<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    /// Start building a motor.
    pub fn builder() -> L9110MotorBuilder<IA, IB> {
        L9110MotorBuilder::new()
    }
}
