use crate::{AuthConfig, DatabaseConfig, ServerConfig};

use googletest::prelude::*;

#[test]
fn test_default_sections_validate() {
    assert_that!(ServerConfig::default().validate(), ok(anything()));
    assert_that!(DatabaseConfig::default().validate(), ok(anything()));
    assert_that!(AuthConfig::default().validate(), ok(anything()));
}

#[test]
fn test_port_zero_means_auto_assign() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn test_privileged_port_is_rejected() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_absolute_database_path_is_rejected() {
    let config = DatabaseConfig {
        path: "/var/lib/shop.db".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_database_path_escaping_config_dir_is_rejected() {
    let config = DatabaseConfig {
        path: "../shop.db".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_zero_pool_size_is_rejected() {
    let config = DatabaseConfig {
        max_connections: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_out_of_range_bcrypt_cost_is_rejected() {
    let too_low = AuthConfig { bcrypt_cost: 3 };
    let too_high = AuthConfig { bcrypt_cost: 32 };

    assert_that!(too_low.validate(), err(anything()));
    assert_that!(too_high.validate(), err(anything()));
}
