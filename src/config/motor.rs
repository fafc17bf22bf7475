//! Motor channel configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// One L9110 channel as wired on the board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Board pin number wired to input A.
    pub pin_a: u8,

    /// Board pin number wired to input B.
    pub pin_b: u8,

    /// Swap inputs A and B for both directions.
    #[serde(default)]
    pub invert_direction: bool,
}

impl MotorConfig {
    /// Both board pins used by this channel.
    pub fn pins(&self) -> [u8; 2] {
        [self.pin_a, self.pin_b]
    }
}
