use crate::{Config, ServerConfig};
use crate::tests::{EnvGuard, required_settings, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _required = required_settings();
    let _port = EnvGuard::set("OCTO_SERVER_PORT", "80");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_1024_when_validate_then_ok() {
    // Given
    let _dir = setup_config_dir();
    let _required = required_settings();
    let _port = EnvGuard::set("OCTO_SERVER_PORT", "1024");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given - port 0 means OS auto-assign
    let _dir = setup_config_dir();
    let _required = required_settings();
    let _port = EnvGuard::set("OCTO_SERVER_PORT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_joined() {
    // Given
    let _dir = setup_config_dir();
    let _port = EnvGuard::set("OCTO_SERVER_PORT", "9100");

    // When
    let addr = Config::load().unwrap().bind_addr();

    // Then
    assert_that!(addr.as_str(), eq("127.0.0.1:9100"));
}

#[test]
#[serial]
fn given_host_with_scheme_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _required = required_settings();
    let _host = EnvGuard::set("OCTO_SERVER_HOST", "http://localhost");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_ipv6_host_when_bind_addr_then_bracketed() {
    let server = ServerConfig {
        host: "::1".to_string(),
        port: 8000,
    };

    assert_that!(server.bind_addr().as_str(), eq("[::1]:8000"));
}
