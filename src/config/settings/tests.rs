use super::*;
use std::collections::HashMap;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(
        settings.compose_root,
        "https://kojipkgs.fedoraproject.org/compose/rawhide/"
    );
    assert_eq!(settings.arch, "x86_64");
    assert_eq!(settings.timeout_secs, 300);
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.color, ColorMode::Auto);
    assert!(!settings.allow_insecure_http);
}

#[test]
fn test_apply_kdl() {
    let mut settings = Settings::default();
    settings
        .apply_kdl(
            r#"
// local mirror
settings {
    compose-root "/srv/mirror/rawhide"
    arch "aarch64"
    timeout 120
    format "json"
    color "never"
    allow-insecure-http #true
}
"#,
        )
        .unwrap();

    assert_eq!(settings.compose_root, "/srv/mirror/rawhide");
    assert_eq!(settings.arch, "aarch64");
    assert_eq!(settings.timeout_secs, 120);
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.color, ColorMode::Never);
    assert!(settings.allow_insecure_http);
}

#[test]
fn test_partial_kdl_keeps_defaults() {
    let mut settings = Settings::default();
    settings.apply_kdl("settings {\n    arch \"aarch64\"\n}\n").unwrap();

    assert_eq!(settings.arch, "aarch64");
    assert_eq!(settings.timeout_secs, 300);
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut settings = Settings::default();
    let err = settings
        .apply_kdl("settings {\n    mirror \"x\"\n}\n")
        .unwrap_err();
    assert!(err.to_string().contains("Unknown setting: 'mirror'"));
}

#[test]
fn test_unexpected_top_level_node() {
    let mut settings = Settings::default();
    assert!(settings.apply_kdl("arch \"aarch64\"\n").is_err());
}

#[test]
fn test_invalid_kdl_syntax() {
    let mut settings = Settings::default();
    let err = settings.apply_kdl("settings {").unwrap_err();
    assert!(matches!(err, ComposeDiffError::Kdl(_)));
}

#[test]
fn test_validate_values() {
    let mut settings = Settings::default();

    assert!(settings.set("timeout", "0").is_err());
    assert!(settings.set("timeout", "soon").is_err());
    assert!(settings.set("format", "table").is_err());
    assert!(settings.set("color", "sometimes").is_err());
    assert!(settings.set("arch", "x86 64").is_err());
    assert!(settings.set("compose-root", " ").is_err());
    assert!(settings.set("allow-insecure-http", "maybe").is_err());

    assert!(settings.set("format", "yaml").is_ok());
    assert_eq!(settings.format, OutputFormat::Yaml);
    assert!(settings.set("allow-insecure-http", "1").is_ok());
    assert!(settings.allow_insecure_http);
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [
        ("COMPOSE_ROOT", "https://mirror.example.org/rawhide/"),
        ("TIMEOUT", "45"),
    ]
    .into_iter()
    .collect();

    let mut settings = Settings::default();
    settings
        .apply_env(|suffix| env.get(suffix).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(settings.compose_root, "https://mirror.example.org/rawhide/");
    assert_eq!(settings.timeout_secs, 45);
    assert_eq!(settings.arch, "x86_64");
}

#[test]
fn test_env_error_names_the_variable() {
    let mut settings = Settings::default();
    let err = settings
        .apply_env(|suffix| (suffix == "FORMAT").then(|| "html".to_string()))
        .unwrap_err();

    assert!(err.to_string().contains("COMPOSE_DIFF_FORMAT"));
}

#[test]
fn test_apply_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.kdl");
    fs::write(&path, "settings {\n    color \"always\"\n}\n").unwrap();

    let mut settings = Settings::default();
    settings.apply_file(&path).unwrap();

    assert_eq!(settings.color, ColorMode::Always);
}
