//! L9110 motor channel driver.
//!
//! Generic over embedded-hal 1.0 output pin types.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};

use super::command::{Command, CommandMask, Direction, Mode};
use super::state::RunState;

/// One L9110 H-bridge channel (inputs IA and IB).
///
/// Generic over:
/// - `IA`: pin driving input A (must implement `OutputPin`)
/// - `IB`: pin driving input B (must implement `OutputPin`)
///
/// A motor starts without pins. Commands are still accepted and tracked
/// before [`initialize`](Self::initialize); they just have no physical effect.
pub struct L9110Motor<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    /// Input pins, once initialized.
    pins: Option<(IA, IB)>,

    /// Last commanded direction and mode.
    state: RunState,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Swap which input is driven high for each direction.
    invert_direction: bool,
}

impl<IA, IB> Default for L9110Motor<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IA, IB> L9110Motor<IA, IB>
where
    IA: OutputPin,
    IB: OutputPin,
{
    /// Create an unconfigured motor with an idle run state.
    pub fn new() -> Self {
        Self {
            pins: None,
            state: RunState::IDLE,
            name: heapless::String::new(),
            invert_direction: false,
        }
    }

    /// Create a motor that already owns its pins.
    pub fn with_pins(pin_a: IA, pin_b: IB) -> Self {
        let mut motor = Self::new();
        motor.initialize(pin_a, pin_b);
        motor
    }

    pub(crate) fn from_parts(
        pins: Option<(IA, IB)>,
        name: heapless::String<32>,
        invert_direction: bool,
    ) -> Self {
        Self {
            pins,
            state: RunState::IDLE,
            name,
            invert_direction,
        }
    }

    /// Attach the two input pins.
    ///
    /// Always succeeds. Calling it again replaces the pins; the previously
    /// attached pair is handed back. The run state is left untouched and no
    /// pin is written until the next command.
    pub fn initialize(&mut self, pin_a: IA, pin_b: IB) -> Option<(IA, IB)> {
        trace!("motor {}: pins attached", self.name.as_str());
        self.pins.replace((pin_a, pin_b))
    }

    /// Detach and return the input pins.
    pub fn release_pins(&mut self) -> Option<(IA, IB)> {
        self.pins.take()
    }

    /// Whether pins have been attached.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.pins.is_some()
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether direction logic is inverted.
    #[inline]
    pub fn invert_direction(&self) -> bool {
        self.invert_direction
    }

    /// Current mode sub-field (BRAKE, RELEASE or none).
    #[inline]
    pub fn state(&self) -> Option<Mode> {
        self.state.mode()
    }

    /// Current direction sub-field (FORWARD, BACKWARD or none).
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.state.direction()
    }

    /// The packed run state.
    #[inline]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Run a raw command mask.
    ///
    /// Each flag present is applied in the order FORWARD, BACKWARD, RELEASE,
    /// BRAKE. An empty mask is a no-op.
    ///
    /// # Errors
    ///
    /// - [`MotorError::InvalidCommand`] if FORWARD and BACKWARD, or BRAKE and
    ///   RELEASE, are both set. Nothing is written and the state is unchanged.
    /// - [`MotorError::PinError`] if a pin write fails. The state is unchanged.
    pub fn run(&mut self, mask: impl Into<CommandMask>) -> Result<()> {
        let mask = mask.into();
        let command = mask.decode().map_err(|e| {
            warn!("motor {}: rejected command {}", self.name.as_str(), mask.bits());
            e
        })?;
        self.execute(command)
    }

    /// Run a validated command.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if a pin write fails; the state is
    /// only updated once every write for the command went through.
    ///
    /// Writes that succeeded before the failure are not undone, so the inputs
    /// can be left driven for a direction that [`direction`](Self::direction)
    /// does not report. Re-issue a command (e.g. BRAKE) to resync.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let mut next = self.state;

        if let Some(direction) = command.direction {
            self.drive(direction)?;
            next = next.with_direction(direction);
        }

        match command.mode {
            Some(Mode::Release) => {
                // Re-asserts the current direction, it does not float the inputs.
                if let Some(direction) = next.direction() {
                    self.drive(direction)?;
                }
                next = next.with_mode(Mode::Release);
            }
            Some(Mode::Brake) => {
                self.write(false, false)?;
                next = next.with_mode(Mode::Brake);
            }
            None => {}
        }

        trace!(
            "motor {}: command {} -> state {}",
            self.name.as_str(),
            command.mask().bits(),
            next.bits()
        );
        self.state = next;
        Ok(())
    }

    /// Drive forward.
    pub fn forward(&mut self) -> Result<()> {
        self.execute(Command::drive(Direction::Forward))
    }

    /// Drive backward.
    pub fn backward(&mut self) -> Result<()> {
        self.execute(Command::drive(Direction::Backward))
    }

    /// Brake: both inputs low.
    pub fn brake(&mut self) -> Result<()> {
        self.execute(Command::mode(Mode::Brake))
    }

    /// Release: re-drive the last direction and record RELEASE.
    pub fn release(&mut self) -> Result<()> {
        self.execute(Command::mode(Mode::Release))
    }

    fn drive(&mut self, direction: Direction) -> Result<()> {
        let physical = if self.invert_direction {
            direction.reversed()
        } else {
            direction
        };

        match physical {
            Direction::Forward => self.write(true, false),
            Direction::Backward => self.write(false, true),
        }
    }

    /// Write both inputs, driving the high one first.
    fn write(&mut self, a_high: bool, b_high: bool) -> Result<()> {
        let Some((pin_a, pin_b)) = self.pins.as_mut() else {
            return Ok(());
        };

        let result = if b_high && !a_high {
            set_level(pin_b, true).and_then(|_| set_level(pin_a, false))
        } else {
            set_level(pin_a, a_high).and_then(|_| set_level(pin_b, b_high))
        };

        if result.is_err() {
            warn!("motor {}: pin write failed", self.name.as_str());
        }
        result.map_err(Into::into)
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> core::result::Result<(), MotorError> {
    if high {
        pin.set_high().map_err(|_| MotorError::PinError)
    } else {
        pin.set_low().map_err(|_| MotorError::PinError)
    }
}
