//! Motor command vocabulary.
//!
//! Two views of the same thing: [`CommandMask`] is the raw flag byte
//! (`FORWARD | BRAKE`, ...), [`Command`] is the decoded form where a
//! conflicting pair cannot be expressed.

use core::ops::{BitOr, BitOrAssign};

use crate::error::MotorError;

/// Drive direction sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Input A high, input B low.
    Forward,
    /// Input B high, input A low.
    Backward,
}

impl Direction {
    /// Bit used for this direction in masks and run-state bytes.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Direction::Forward => CommandMask::FORWARD.0,
            Direction::Backward => CommandMask::BACKWARD.0,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Mode sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Both inputs low.
    Brake,
    /// Re-drives the last commanded direction.
    ///
    /// Despite the name this does not float the outputs.
    Release,
}

impl Mode {
    /// Bit used for this mode in masks and run-state bytes.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Mode::Brake => CommandMask::BRAKE.0,
            Mode::Release => CommandMask::RELEASE.0,
        }
    }
}

/// Raw command bitmask.
///
/// Bits outside the four defined flags are ignored when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandMask(pub u8);

impl CommandMask {
    /// No command bits.
    pub const NONE: Self = Self(0);
    /// Drive forward.
    pub const FORWARD: Self = Self(1);
    /// Drive backward.
    pub const BACKWARD: Self = Self(2);
    /// Brake (both inputs low).
    pub const BRAKE: Self = Self(4);
    /// Release (see [`Mode::Release`]).
    pub const RELEASE: Self = Self(8);

    /// Direction bits.
    pub const DIRECTION: Self = Self(Self::FORWARD.0 | Self::BACKWARD.0);
    /// Mode bits.
    pub const MODE: Self = Self(Self::BRAKE.0 | Self::RELEASE.0);

    /// Get the raw value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether the mask carries both bits of a mutually exclusive pair.
    #[inline]
    pub const fn is_conflicting(self) -> bool {
        self.contains(Self::DIRECTION) || self.contains(Self::MODE)
    }

    /// Decode into a validated [`Command`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidCommand`] if both FORWARD and BACKWARD,
    /// or both BRAKE and RELEASE, are set.
    pub fn decode(self) -> Result<Command, MotorError> {
        if self.is_conflicting() {
            return Err(MotorError::InvalidCommand { mask: self.0 });
        }

        let direction = if self.contains(Self::FORWARD) {
            Some(Direction::Forward)
        } else if self.contains(Self::BACKWARD) {
            Some(Direction::Backward)
        } else {
            None
        };

        let mode = if self.contains(Self::RELEASE) {
            Some(Mode::Release)
        } else if self.contains(Self::BRAKE) {
            Some(Mode::Brake)
        } else {
            None
        };

        Ok(Command { direction, mode })
    }
}

impl BitOr for CommandMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CommandMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for CommandMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Direction> for CommandMask {
    fn from(direction: Direction) -> Self {
        Self(direction.bits())
    }
}

impl From<Mode> for CommandMask {
    fn from(mode: Mode) -> Self {
        Self(mode.bits())
    }
}

impl TryFrom<CommandMask> for Command {
    type Error = MotorError;

    fn try_from(mask: CommandMask) -> Result<Self, Self::Error> {
        mask.decode()
    }
}

/// A validated motor command: at most one direction and at most one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Direction to drive, if any.
    pub direction: Option<Direction>,
    /// Mode to enter, if any.
    pub mode: Option<Mode>,
}

impl Command {
    /// Command with no effect.
    pub const NONE: Self = Self {
        direction: None,
        mode: None,
    };

    /// Drive in `direction`, leaving the mode alone.
    pub const fn drive(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            mode: None,
        }
    }

    /// Enter `mode`, leaving the direction alone.
    pub const fn mode(mode: Mode) -> Self {
        Self {
            direction: None,
            mode: Some(mode),
        }
    }

    /// Add a mode to this command.
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self {
            direction: self.direction,
            mode: Some(mode),
        }
    }

    /// Add a direction to this command.
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            mode: self.mode,
        }
    }

    /// Check whether the command does nothing.
    pub const fn is_empty(&self) -> bool {
        self.direction.is_none() && self.mode.is_none()
    }

    /// Encode back into the flag byte.
    pub fn mask(&self) -> CommandMask {
        let mut mask = CommandMask::NONE;
        if let Some(direction) = self.direction {
            mask |= direction.into();
        }
        if let Some(mode) = self.mode {
            mask |= mode.into();
        }
        mask
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::drive(direction)
    }
}

impl From<Mode> for Command {
    fn from(mode: Mode) -> Self {
        Self::mode(mode)
    }
}

impl From<Command> for CommandMask {
    fn from(command: Command) -> Self {
        command.mask()
    }
}
