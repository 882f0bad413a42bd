//! TOML Connection File Tests (requires `toml` feature)

mod common;

use common::test_connection;
use schemadump::{ConnectionParams, Error, SchemaManager};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_toml_connection_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.toml");
    fs::write(
        &path,
        r#"
host = "127.0.0.1"
port = "3306"
username = "root"
password = "s3cret"
database = "shop"
"#,
    )
    .unwrap();

    let params = ConnectionParams::from_file(&path).unwrap();

    assert_eq!(params, test_connection());
    assert!(params.missing_fields().is_empty());
}

#[test]
fn test_toml_aliases_and_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.toml");
    fs::write(&path, "user = \"deploy\"\ndatabase_name = \"shop\"\n").unwrap();

    let params = ConnectionParams::from_file(&path).unwrap();

    assert_eq!(params.username, "deploy");
    assert_eq!(params.database, "shop");
    assert_eq!(params.missing_fields(), vec!["DB_HOST", "DB_PORT", "DB_PASSWORD"]);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.toml");
    fs::write(&path, "host = \n").unwrap();

    let err = ConnectionParams::from_file(&path).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_manager_from_toml_connection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.toml");
    fs::write(&path, "host = \"db\"\nport = \"3307\"\ndatabase = \"shop\"\n").unwrap();

    let manager = SchemaManager::builder()
        .schema_dir(dir.path().join("database"))
        .connection(ConnectionParams::from_file(&path).unwrap())
        .build()
        .unwrap();

    let command = manager
        .command_builder("mysql")
        .unwrap()
        .bookkeeping_data_dump(manager.connection());
    assert_eq!(command.flag_value("--host"), Some("db"));
    assert_eq!(command.flag_value("--port"), Some("3307"));
}
