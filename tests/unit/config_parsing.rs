//! Unit tests for TOML configuration parsing.
#![cfg(feature = "std")]

use stepper_pool::config::{parse_config, SystemConfig};
use stepper_pool::error::{ConfigError, Error};
use stepper_pool::Line;

const PAN: &str = r#"
[motors.pan]
speed = 5

[motors.pan.pins]
dir = { port = "B", bit = 0 }
enable = { port = "B", bit = 1 }
step = { port = "B", bit = 2 }
ms1 = { port = "C", bit = 0 }
ms2 = { port = "C", bit = 1 }
ms3 = { port = "C", bit = 2 }
"#;

/// Test parsing a complete motor entry.
#[test]
fn test_parse_motor_config() {
    let config: SystemConfig = toml::from_str(PAN).expect("Failed to parse TOML");
    let motor = config.motor("pan").expect("Motor not found");

    assert_eq!(motor.speed, 5);
    assert_eq!(motor.pins.dir.port.as_str(), "B");
    assert_eq!(motor.pins.line(Line::Ms3).bit, 2);
    assert_eq!(motor.pins.iter().count(), 6);
}

/// Test that speed falls back to zero when omitted.
#[test]
fn test_speed_defaults_to_zero() {
    let config = parse_config(&PAN.replace("speed = 5\n", "")).expect("valid config");
    assert_eq!(config.motor("pan").unwrap().speed, 0);
}

/// Test that an empty document is an empty system.
#[test]
fn test_parse_empty() {
    let config = parse_config("").expect("empty config");
    assert_eq!(config.motor_names().count(), 0);
}

/// Test that a missing line is a parse error.
#[test]
fn test_missing_line_rejected() {
    let toml_str = PAN.replace("ms3 = { port = \"C\", bit = 2 }\n", "");
    assert!(matches!(
        parse_config(&toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that a bit outside the byte fails validation after parsing.
#[test]
fn test_bit_out_of_range_rejected() {
    let toml_str = PAN.replace("step = { port = \"B\", bit = 2 }", "step = { port = \"B\", bit = 9 }");
    assert!(matches!(
        parse_config(&toml_str),
        Err(Error::Config(ConfigError::InvalidBit {
            line: Line::Step,
            bit: 9
        }))
    ));
}

/// Test that a speed above 255 does not fit.
#[test]
fn test_speed_overflow_rejected() {
    let toml_str = PAN.replace("speed = 5", "speed = 300");
    assert!(parse_config(&toml_str).is_err());
}

/// Test that loading a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    let result = stepper_pool::load_config("/nonexistent/steppers.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::IoError(_)))
    ));
}
