use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use webworker::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.identity, "webworker");
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
}

#[test]
fn test_config_empty_yaml_uses_defaults() {
    let cfg = Config::from_yaml_str("").unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_partial_yaml_keeps_other_defaults() {
    let cfg = Config::from_yaml_str("server:\n  identity: \"Jon's very own server\"\n").unwrap();
    assert_eq!(cfg.server.identity, "Jon's very own server");
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
}

#[test]
fn test_config_full_yaml() {
    let raw = r#"
server:
  listen_addr: "0.0.0.0:3000"
  identity: "test-server"
static_files:
  root: "/srv/www"
"#;
    let cfg = Config::from_yaml_str(raw).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.identity, "test-server");
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml_str("server: [1, 2").is_err());
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "static_files:\n  root: \"/var/www\"").unwrap();

    let cfg = Config::load_from(Some(file.path())).unwrap();
    assert_eq!(cfg.static_files.root, PathBuf::from("/var/www"));
}

#[test]
fn test_config_load_from_missing_file_fails() {
    let err = Config::load_from(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}

#[test]
fn test_config_load_from_none_is_default() {
    let cfg = Config::load_from(None).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_env_overrides() {
    let env: HashMap<&str, &str> = [("LISTEN", "0.0.0.0:5000"), ("DOC_ROOT", "/tmp/site")]
        .into_iter()
        .collect();

    let mut cfg = Config::default();
    cfg.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");
    assert_eq!(cfg.static_files.root, PathBuf::from("/tmp/site"));
}

#[test]
fn test_config_env_overrides_absent_keep_values() {
    let mut cfg = Config::from_yaml_str("server:\n  listen_addr: \"127.0.0.1:9000\"\n").unwrap();
    cfg.apply_env_overrides(|_| None);
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
}
