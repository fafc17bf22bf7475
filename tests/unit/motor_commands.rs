//! Property tests for motor command handling.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use proptest::prelude::*;

use l9110_motion::{CommandMask, Direction, L9110Motor, Mode, BACKWARD, BRAKE, FORWARD, RELEASE};

/// Output pin that remembers its level and counts writes.
#[derive(Debug, Default)]
struct RecordingPin {
    high: Option<bool>,
    writes: usize,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        self.writes += 1;
        Ok(())
    }
}

type TestMotor = L9110Motor<RecordingPin, RecordingPin>;

fn motor() -> TestMotor {
    L9110Motor::with_pins(RecordingPin::default(), RecordingPin::default())
}

/// (level A, level B, total writes)
fn snapshot(motor: &mut TestMotor) -> (Option<bool>, Option<bool>, usize) {
    let (a, b) = motor.release_pins().unwrap();
    let snap = (a.high, b.high, a.writes + b.writes);
    motor.initialize(a, b);
    snap
}

/// Any mask without a conflicting pair, upper bits included.
fn valid_mask() -> impl Strategy<Value = CommandMask> {
    (
        0u8..16,
        prop::sample::select(vec![0u8, 1, 2]),
        prop::sample::select(vec![0u8, 4, 8]),
    )
        .prop_map(|(upper, direction, mode)| CommandMask((upper << 4) | direction | mode))
}

fn conflicting_mask() -> impl Strategy<Value = CommandMask> {
    prop_oneof![
        (0u8..=0xff).prop_map(|b| CommandMask(b | 0x03)),
        (0u8..=0xff).prop_map(|b| CommandMask(b | 0x0c)),
    ]
}

#[test]
fn forward_preserves_mode() {
    let mut m = motor();
    m.run(BRAKE).unwrap();
    m.run(FORWARD).unwrap();

    assert_eq!(snapshot(&mut m).0, Some(true));
    assert_eq!(m.direction(), Some(Direction::Forward));
    assert_eq!(m.state(), Some(Mode::Brake));
}

#[test]
fn backward_preserves_mode() {
    let mut m = motor();
    m.run(RELEASE).unwrap();
    m.run(BACKWARD).unwrap();

    let (a, b, _) = snapshot(&mut m);
    assert_eq!((a, b), (Some(false), Some(true)));
    assert_eq!(m.state(), Some(Mode::Release));
}

#[test]
fn brake_preserves_direction() {
    let mut m = motor();
    m.run(BACKWARD).unwrap();
    m.run(BRAKE).unwrap();

    let (a, b, _) = snapshot(&mut m);
    assert_eq!((a, b), (Some(false), Some(false)));
    assert_eq!(m.direction(), Some(Direction::Backward));
    assert_eq!(m.state(), Some(Mode::Brake));
}

#[test]
fn empty_mask_is_noop() {
    let mut m = motor();
    m.run(CommandMask::NONE).unwrap();

    assert_eq!(snapshot(&mut m), (None, None, 0));
    assert_eq!(m.run_state().bits(), 0);
}

#[test]
fn direction_with_brake_ends_braked() {
    let mut m = motor();
    m.run(FORWARD | BRAKE).unwrap();

    let (a, b, writes) = snapshot(&mut m);
    assert_eq!((a, b), (Some(false), Some(false)));
    assert_eq!(writes, 4);
    assert_eq!(m.run_state().bits(), 0x05);
}

#[test]
fn typed_helpers_match_masks() {
    let mut by_mask = motor();
    let mut by_helper = motor();

    by_mask.run(BACKWARD).unwrap();
    by_mask.run(RELEASE).unwrap();
    by_helper.backward().unwrap();
    by_helper.release().unwrap();

    assert_eq!(by_mask.run_state(), by_helper.run_state());
    assert_eq!(snapshot(&mut by_mask), snapshot(&mut by_helper));
}

proptest! {
    #[test]
    fn conflicting_masks_change_nothing(
        history in proptest::collection::vec(valid_mask(), 0..8),
        bad in conflicting_mask(),
    ) {
        let mut m = motor();
        for mask in history {
            m.run(mask).unwrap();
        }
        let before_state = m.run_state();
        let before_pins = snapshot(&mut m);

        prop_assert!(m.run(bad).is_err());
        prop_assert_eq!(m.run_state(), before_state);
        prop_assert_eq!(snapshot(&mut m), before_pins);
    }

    #[test]
    fn sub_fields_stay_in_range(history in proptest::collection::vec(valid_mask(), 0..16)) {
        let mut m = motor();
        for mask in history {
            m.run(mask).unwrap();
            let state = m.run_state();
            prop_assert!(matches!(state.direction_bits(), 0 | 1 | 2));
            prop_assert!(matches!(state.mode_bits(), 0 | 4 | 8));
        }
    }

    #[test]
    fn last_direction_wins(history in proptest::collection::vec(valid_mask(), 1..16)) {
        let mut m = motor();
        let mut expected = None;
        for mask in history {
            m.run(mask).unwrap();
            if let Some(direction) = mask.decode().unwrap().direction {
                expected = Some(direction);
            }
        }
        prop_assert_eq!(m.direction(), expected);
    }
}
