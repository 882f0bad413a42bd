//! YAML Connection File Tests (requires `yaml` feature)

mod common;

use common::test_connection;
use schemadump::{ConnectionParams, Error};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_yaml_connection_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.yaml");
    fs::write(
        &path,
        "host: \"127.0.0.1\"\nport: \"3306\"\nusername: root\npassword: s3cret\ndatabase: shop\n",
    )
    .unwrap();

    let params = ConnectionParams::from_file(&path).unwrap();

    assert_eq!(params, test_connection());
}

#[test]
fn test_yml_extension_and_aliases() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.yml");
    fs::write(&path, "user: deploy\ndatabase_name: shop\n").unwrap();

    let params = ConnectionParams::from_file(&path).unwrap();

    assert_eq!(params.username, "deploy");
    assert_eq!(params.database, "shop");
    assert_eq!(params.host, "");
}

#[test]
fn test_invalid_yaml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.yaml");
    fs::write(&path, "host: [unclosed\n").unwrap();

    let err = ConnectionParams::from_file(&path).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_debug_output_hides_password() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.yaml");
    fs::write(&path, "password: s3cret\n").unwrap();

    let params = ConnectionParams::from_file(&path).unwrap();

    assert!(!format!("{params:?}").contains("s3cret"));
}
