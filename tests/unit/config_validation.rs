//! Unit tests for configuration validation and port binding.
#![cfg(feature = "std")]

use stepper_pool::config::{validate_config, PortTable, SystemConfig};
use stepper_pool::error::{ConfigError, Error};
use stepper_pool::SimRegister;

fn two_motors(tilt_dir: &str) -> String {
    format!(
        r#"
[motors.pan.pins]
dir = {{ port = "B", bit = 0 }}
enable = {{ port = "B", bit = 1 }}
step = {{ port = "B", bit = 2 }}
ms1 = {{ port = "C", bit = 0 }}
ms2 = {{ port = "C", bit = 1 }}
ms3 = {{ port = "C", bit = 2 }}

[motors.tilt.pins]
dir = {tilt_dir}
enable = {{ port = "B", bit = 5 }}
step = {{ port = "B", bit = 6 }}
ms1 = {{ port = "C", bit = 4 }}
ms2 = {{ port = "C", bit = 5 }}
ms3 = {{ port = "C", bit = 6 }}
"#
    )
}

fn raw(toml_str: &str) -> SystemConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = raw(&two_motors(r#"{ port = "B", bit = 4 }"#));
    assert!(validate_config(&config).is_ok());
}

/// Test that two motors cannot share a port bit.
#[test]
fn test_line_conflict_across_motors() {
    let config = raw(&two_motors(r#"{ port = "B", bit = 1 }"#));
    match validate_config(&config) {
        Err(Error::Config(ConfigError::LineConflict { port, bit })) => {
            assert_eq!(port.as_str(), "B");
            assert_eq!(bit, 1);
        }
        other => panic!("expected line conflict, got {:?}", other),
    }
}

/// Test that the same bit index on different ports is fine.
#[test]
fn test_same_bit_different_port() {
    let config = raw(&two_motors(r#"{ port = "D", bit = 0 }"#));
    assert!(validate_config(&config).is_ok());
}

/// Test that binding resolves port names only at bind time.
#[test]
fn test_bind_unknown_port() {
    let config = raw(&two_motors(r#"{ port = "D", bit = 4 }"#));
    let (b, b_ddr, c, c_ddr) = (
        SimRegister::default(),
        SimRegister::default(),
        SimRegister::default(),
        SimRegister::default(),
    );
    let ports = PortTable::new()
        .with("B", &b, &b_ddr)
        .and_then(|t| t.with("C", &c, &c_ddr))
        .unwrap();

    assert!(config.motor("pan").unwrap().bind(&ports).is_ok());
    let err = config.motor("tilt").unwrap().bind(&ports).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: Port 'D' not found");
}

/// Test that binding writes nothing.
#[test]
fn test_bind_is_side_effect_free() {
    let config = raw(&two_motors(r#"{ port = "B", bit = 4 }"#));
    let (b, b_ddr) = (SimRegister::new(0xAA), SimRegister::default());
    let ports = PortTable::new().with("B", &b, &b_ddr).unwrap();
    let ports = ports.with("C", &b, &b_ddr).unwrap();

    let attr = config.motor("pan").unwrap().bind(&ports).unwrap();
    assert_eq!(attr.pins.step.mask(), 0b0000_0100);
    assert_eq!(b.value(), 0xAA);
    assert_eq!(b.write_count(), 0);
}
