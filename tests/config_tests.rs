//! Integration tests for configuration management

use credit_bridge::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.session_file.is_empty(),
        "Default session_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );

    // Program defaults match the calculator defaults
    assert_eq!(config.program.requirement, 120);
    assert!((config.program.cost_per_credit - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.program.max_semester_credits, 15);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[program]
requirement = 90
cost_per_credit = 250.0
max_semester_credits = 12

[paths]
session_file = "./session.json"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.program.requirement, 90);
    assert!((config.program.cost_per_credit - 250.0).abs() < f64::EPSILON);
    assert_eq!(config.program.max_semester_credits, 12);
    assert_eq!(config.paths.session_file, "./session.json");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[program]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false

    // Numeric program fields fall back to calculator defaults
    assert_eq!(config.program.requirement, 120);
    assert!((config.program.cost_per_credit - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.program.max_semester_credits, 15);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CREDIT_BRIDGE/test.log"

[program]

[paths]
session_file = "$CREDIT_BRIDGE/session.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("creditbridge"));
    assert!(!config.logging.file.contains("$CREDIT_BRIDGE"));
    assert!(config.paths.session_file.contains("creditbridge"));
    assert!(!config.paths.session_file.contains("$CREDIT_BRIDGE"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    let level = config.get("level");
    assert!(level.is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("requirement", "132")
        .expect("Failed to set requirement");
    assert_eq!(config.program.requirement, 132);

    config
        .set("cost-per-credit", "175.5")
        .expect("Failed to set cost per credit");
    assert!((config.program.cost_per_credit - 175.5).abs() < f64::EPSILON);
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("requirement", "lots").is_err());
    assert!(config.set("cost_per_credit", "free").is_err());
    assert!(config.set("max_semester_credits", "0").is_err());
    assert!(config.set("no_such_key", "value").is_err());
}

#[test]
fn test_config_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("requirement", "60").unwrap();
    assert_eq!(config.program.requirement, 60);

    config.unset("requirement", &defaults).unwrap();
    assert_eq!(config.program.requirement, defaults.program.requirement);

    assert!(config.unset("no_such_key", &defaults).is_err());
}

#[test]
fn test_merge_defaults_fills_empty_strings() {
    let mut config = Config::from_toml(
        r#"
[logging]

[program]

[paths]
"#,
    )
    .unwrap();
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.session_file, defaults.paths.session_file);

    // A second merge changes nothing
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        requirement: Some(96),
        cost_per_credit: Some(300.0),
        max_semester_credits: Some(18),
        session_file: Some("/tmp/s.json".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.program.requirement, 96);
    assert!((config.program.cost_per_credit - 300.0).abs() < f64::EPSILON);
    assert_eq!(config.program.max_semester_credits, 18);
    assert_eq!(config.paths.session_file, "/tmp/s.json");

    // Empty overrides are a no-op
    let before = config.clone();
    config.apply_overrides(&ConfigOverrides::default());
    assert_eq!(config.logging.level, before.logging.level);
    assert_eq!(config.program.requirement, before.program.requirement);
}

#[test]
fn test_config_display_lists_all_sections() {
    let config = Config::from_defaults();
    let rendered = format!("{config}");

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[program]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("requirement"));
    assert!(rendered.contains("session_file"));
}
