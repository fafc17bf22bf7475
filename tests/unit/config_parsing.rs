//! Tests for TOML configuration parsing and validation.

use l9110_motion::config::SystemConfig;
use l9110_motion::error::ConfigError;
use l9110_motion::{parse_config, validate_config, Error};

/// Test parsing several motor channels.
#[test]
fn test_parse_motor_configs() {
    let toml_str = r#"
[motors.left]
name = "left"
pin_a = 2
pin_b = 3

[motors.right]
name = "right"
pin_a = 6
pin_b = 7
invert_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, ["left", "right"]);

    let right = config.motor("right").expect("Motor not found");
    assert_eq!(right.pin_a, 6);
    assert_eq!(right.pin_b, 7);
    assert!(right.invert_direction);
    assert!(config.motor("middle").is_none());
}

/// Test that a pin reused across motors is rejected.
#[test]
fn test_shared_pin_rejected() {
    let toml_str = r#"
[motors.left]
name = "left"
pin_a = 2
pin_b = 3

[motors.right]
name = "right"
pin_a = 3
pin_b = 4
"#;

    let config: SystemConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::PinInUse(3)))
    );
}

/// Test that zero sampler settings are rejected.
#[test]
fn test_zero_sampler_values_rejected() {
    let threshold = "[sampler]\nthreshold_us = 0\n";
    assert!(matches!(
        parse_config(threshold),
        Err(Error::Config(ConfigError::InvalidThreshold(0)))
    ));

    let stale = "[sampler]\nstale_limit = 0\n";
    assert!(matches!(
        parse_config(stale),
        Err(Error::Config(ConfigError::InvalidStaleLimit(0)))
    ));
}

/// Test that a malformed document surfaces a parse error.
#[test]
fn test_malformed_toml() {
    let result = parse_config("[motors.left]\nname = \"left\"\npin_a = \"two\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an empty document yields defaults.
#[test]
fn test_empty_config_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.motor_names().count(), 0);
    assert_eq!(config.sampler.threshold_us, 1000);
    assert_eq!(config.sampler.poll_interval_ms, 100);
}
