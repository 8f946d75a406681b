use super::render;
use crate::config::settings::OutputFormat;
use crate::core::diff::{ChangedPackage, Package, PackageDiff};

fn sample_diff() -> PackageDiff {
    PackageDiff {
        removed: vec![Package::new("nano", "0:8.4-1")],
        added: vec![],
        changed: vec![ChangedPackage {
            name: "bash".to_string(),
            version_from: "0:5.2.37-1".to_string(),
            version_to: "0:5.2.37-2".to_string(),
        }],
    }
}

#[test]
fn json_uses_four_space_indent() {
    let out = render(&sample_diff(), OutputFormat::Json)
        .expect("serialize")
        .expect("json output");

    assert!(out.starts_with("{\n    \"removed\": [\n        {\n"));
    assert!(out.contains("\"added\": []"));

    let back: PackageDiff = serde_json::from_str(&out).expect("parse back");
    assert_eq!(back, sample_diff());
}

#[test]
fn yaml_carries_the_same_fields() {
    let out = render(&sample_diff(), OutputFormat::Yaml)
        .expect("serialize")
        .expect("yaml output");

    assert!(out.contains("removed:"));
    assert!(out.contains("version_from:"));
    assert!(out.contains("0:5.2.37-1"));
}

#[test]
fn text_format_is_not_machine_output() {
    assert!(render(&sample_diff(), OutputFormat::Text).unwrap().is_none());
}
