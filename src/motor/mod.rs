//! Motor module for l9110-motion.
//!
//! Provides the L9110 channel driver, its command vocabulary and packed run state.

mod builder;
mod command;
mod driver;
mod state;

pub use builder::L9110MotorBuilder;
pub use command::{Command, CommandMask, Direction, Mode};
pub use driver::L9110Motor;
pub use state::RunState;
