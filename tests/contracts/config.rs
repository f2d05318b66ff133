//! Configuration contracts
//!
//! Priority: environment variables > cutover.toml > defaults

use std::collections::HashMap;
use std::fs;

use cutover::config::{apply_env_overrides, load_with_warnings};
use cutover::{CutoverError, RawConfig};

#[test]
fn contract_required_fields_are_reported_together() {
    let err = RawConfig::default().resolve().unwrap_err();
    match err {
        CutoverError::Config(message) => {
            assert!(message.contains("username"));
            assert!(message.contains("releases_path"));
            assert!(message.contains("host"));
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn contract_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cutover.toml");
    fs::write(
        &path,
        r#"
        username = "deploy"
        host = "staging.example.com"
        releases_path = "/srv/app/releases"
        port = 2200
        "#,
    )
    .unwrap();

    let (raw, warnings) = load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());

    let env: HashMap<&str, &str> = [("CUTOVER_HOST", "prod.example.com")].into_iter().collect();
    let raw = apply_env_overrides(raw, |key| env.get(key).map(|v| v.to_string())).unwrap();
    let resolved = raw.resolve().unwrap();

    assert_eq!(resolved.host(), "prod.example.com");
    assert_eq!(resolved.port(), 2200);
    assert_eq!(resolved.user_at_host(), "deploy@prod.example.com");
}

#[test]
fn contract_defaults_apply() {
    let raw = RawConfig {
        username: Some("deploy".to_string()),
        host: Some("example.com".to_string()),
        releases_path: Some("/srv/app/releases/".to_string()),
        ..RawConfig::default()
    };
    let resolved = raw.resolve().unwrap();

    assert_eq!(resolved.port(), 22);
    assert_eq!(resolved.source_path(), "tmp/deploy-dist");
    assert_eq!(resolved.current_link(), "/srv/app/releases/current");
    assert_eq!(resolved.revisions_file(), "/srv/app/releases/revisions.json");
    assert_eq!(resolved.deployer_format(), "{user}");
    assert_eq!(resolved.payload_options().flags.as_str(), "rtu");
}

#[test]
fn contract_unknown_keys_warn_but_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cutover.toml");
    fs::write(&path, "username = \"deploy\"\nhots = \"typo\"\n").unwrap();

    let (raw, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(raw.username.as_deref(), Some("deploy"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "hots");
}
