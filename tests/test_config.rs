use std::io::Write;

use sunlight_hours::{City, SunlightConfig, SunlightError};

#[test]
fn test_default_config() {
    let c = SunlightConfig::default();
    assert_eq!(c.name, "Barcelona");
    assert_eq!(c.dawn, "08:14");
    assert_eq!(c.sunset, "17:25");
}

#[test]
fn test_toml_overrides() {
    let c = SunlightConfig::from_toml_str(
        r#"
        name = "Oslo"
        dawn = "09:10"
        sunset = "15:20"
        "#,
    )
    .unwrap();
    assert_eq!(c.name, "Oslo");
    assert_eq!(c.dawn, "09:10");
    assert_eq!(c.sunset, "15:20");
}

#[test]
fn test_toml_partial_keeps_defaults() {
    let c = SunlightConfig::from_toml_str("sunset = \"18:00\"").unwrap();
    assert_eq!(c.name, "Barcelona");
    assert_eq!(c.dawn, "08:14");
    assert_eq!(c.sunset, "18:00");
}

#[test]
fn test_toml_empty_is_default() {
    assert_eq!(SunlightConfig::from_toml_str("").unwrap(), SunlightConfig::default());
}

#[test]
fn test_toml_wrong_type() {
    assert!(matches!(
        SunlightConfig::from_toml_str("dawn = 8"),
        Err(SunlightError::Config(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        SunlightConfig::from_file("/nonexistent/sunlight.toml"),
        Err(SunlightError::Io(_))
    ));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("sunlight_config_{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "name = \"Lisbon\"").unwrap();
    drop(file);

    let c = SunlightConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(c.name, "Lisbon");
    assert_eq!(c.dawn, "08:14");
}

#[test]
fn test_invalid_config_window_rejected_by_city() {
    let c = SunlightConfig {
        dawn: "20:00".into(),
        ..SunlightConfig::default()
    };
    assert!(matches!(
        City::from_config(&c),
        Err(SunlightError::DawnNotBeforeSunset { .. })
    ));
}
