//! Overrides file round-trip and resolution across choice values.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use tempfile::TempDir;

use pybake_core::{BakeContext, CliFramework, ContextOverrides, LicenseKind};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
}

#[test]
fn overrides_survive_a_yaml_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("context.yaml");

    let original = ContextOverrides::from([
        ("project_name", "Round Trip"),
        ("full_name", "O'connor \"the author\""),
        ("use_ci_deployment", "n"),
    ]);
    let yaml = serde_yaml::to_string(&original).expect("serialize overrides");
    std::fs::write(&path, yaml).expect("write overrides");

    let loaded = ContextOverrides::load(&path).expect("load overrides");
    assert_eq!(loaded, original);

    let ctx = BakeContext::resolve_at(&loaded, fixed_now()).expect("resolve");
    assert_eq!(ctx.project_slug.as_str(), "round_trip");
    assert_eq!(ctx.full_name, "O'connor \"the author\"");
    assert!(!ctx.use_ci_deployment);
}

#[rstest]
#[case("MIT", LicenseKind::Mit)]
#[case("BSD-4-Clause", LicenseKind::Bsd4Clause)]
#[case("Apache-2.0", LicenseKind::Apache2)]
#[case("GPL-3.0-or-later", LicenseKind::Gpl3OrLater)]
#[case("Not open source", LicenseKind::NotOpenSource)]
fn every_license_choice_resolves(#[case] value: &str, #[case] expected: LicenseKind) {
    let overrides = ContextOverrides::from([("open_source_license", value)]);
    let ctx = BakeContext::resolve_at(&overrides, fixed_now()).expect("resolve");
    assert_eq!(ctx.open_source_license, expected);
}

#[rstest]
#[case("click", CliFramework::Click)]
#[case("argparse", CliFramework::Argparse)]
#[case("No command-line interface", CliFramework::None)]
fn every_cli_choice_resolves(#[case] value: &str, #[case] expected: CliFramework) {
    let overrides = ContextOverrides::from([("command_line_interface", value)]);
    let ctx = BakeContext::resolve_at(&overrides, fixed_now()).expect("resolve");
    assert_eq!(ctx.command_line_interface, expected);
}
