//! Packed motor run state.

use super::command::{CommandMask, Direction, Mode};

/// Direction and mode sub-fields packed into one byte.
///
/// Uses the same bit values as [`CommandMask`]. The byte could hold a
/// conflicting pair, but the only writers are [`RunState::with_direction`]
/// and [`RunState::with_mode`], which replace a whole sub-field at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState(u8);

impl RunState {
    /// Both sub-fields unset.
    pub const IDLE: Self = Self(0);

    /// Get the packed byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Current direction sub-field.
    pub const fn direction(self) -> Option<Direction> {
        if self.0 & CommandMask::FORWARD.0 != 0 {
            Some(Direction::Forward)
        } else if self.0 & CommandMask::BACKWARD.0 != 0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Current mode sub-field.
    pub const fn mode(self) -> Option<Mode> {
        if self.0 & CommandMask::BRAKE.0 != 0 {
            Some(Mode::Brake)
        } else if self.0 & CommandMask::RELEASE.0 != 0 {
            Some(Mode::Release)
        } else {
            None
        }
    }

    /// Direction sub-field as raw bits (0, FORWARD or BACKWARD).
    #[inline]
    pub const fn direction_bits(self) -> u8 {
        self.0 & CommandMask::DIRECTION.0
    }

    /// Mode sub-field as raw bits (0, BRAKE or RELEASE).
    #[inline]
    pub const fn mode_bits(self) -> u8 {
        self.0 & CommandMask::MODE.0
    }

    /// Replace the direction sub-field, keeping the mode.
    #[inline]
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self(self.mode_bits() | direction.bits())
    }

    /// Replace the mode sub-field, keeping the direction.
    #[inline]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self(self.direction_bits() | mode.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_empty() {
        assert_eq!(RunState::IDLE.bits(), 0);
        assert_eq!(RunState::IDLE.direction(), None);
        assert_eq!(RunState::IDLE.mode(), None);
    }

    #[test]
    fn test_sub_fields_are_independent() {
        let state = RunState::IDLE
            .with_direction(Direction::Forward)
            .with_mode(Mode::Brake);
        assert_eq!(state.bits(), 0x05);

        let state = state.with_direction(Direction::Backward);
        assert_eq!(state.direction(), Some(Direction::Backward));
        assert_eq!(state.mode(), Some(Mode::Brake));

        let state = state.with_mode(Mode::Release);
        assert_eq!(state.bits(), 0x0a);
        assert_eq!(state.direction_bits(), 0x02);
        assert_eq!(state.mode_bits(), 0x08);
    }
}
