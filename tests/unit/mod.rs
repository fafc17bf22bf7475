//! Unit test harness for l9110-motion.
//!
//! This module organizes tests for each component of the library.

mod config_parsing;
mod debounce;
mod motor_commands;
