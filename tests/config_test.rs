use rstest::rstest;
use skillforge::config::{AppearanceParams, CanvasParams, Config};
use skillforge::decor::ThemePreference;
use skillforge::error::SkillForgeError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.canvas.guide_radius, 200.0);
    assert_eq!(config.canvas.label_radius, 260.0);
    assert_eq!(config.canvas.view_half_extent, 350.0);
    assert_eq!(config.appearance.theme, ThemePreference::System);
    assert_eq!(config.appearance.contrast, 1.0);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config(r#"{ "guide_radius": 150.0, "theme": "dark" }"#);
    let config = Config::load_from_file(file.path()).unwrap();

    assert_eq!(config.canvas.guide_radius, 150.0);
    assert_eq!(config.canvas.label_radius, 260.0);
    assert_eq!(config.appearance.theme, ThemePreference::Dark);
    assert_eq!(config.appearance.noise, 0.2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SkillForgeError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_config("{ guide_radius: ");
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SkillForgeError::Json(_)));
}

#[test]
fn test_invalid_values_in_file_are_rejected() {
    let file = write_config(r#"{ "contrast": 0.2 }"#);
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SkillForgeError::Config(_)));
    assert!(err.to_string().contains("contrast"));
}

#[rstest]
#[case(CanvasParams { guide_radius: 0.0, ..Default::default() })]
#[case(CanvasParams { guide_radius: f64::NAN, ..Default::default() })]
#[case(CanvasParams { label_radius: 180.0, ..Default::default() })]
#[case(CanvasParams { view_half_extent: 250.0, ..Default::default() })]
#[case(CanvasParams { label_offset_x: f64::INFINITY, ..Default::default() })]
fn test_bad_canvas(#[case] canvas: CanvasParams) {
    assert!(matches!(canvas.validate(), Err(SkillForgeError::Config(_))));
}

#[rstest]
#[case(0.39, 0.2)]
#[case(1.01, 0.2)]
#[case(0.7, -0.1)]
#[case(0.7, 1.5)]
fn test_bad_appearance(#[case] contrast: f64, #[case] noise: f64) {
    let appearance = AppearanceParams {
        contrast,
        noise,
        ..Default::default()
    };
    assert!(appearance.validate().is_err());
}

#[test]
fn test_config_serializes_flat() {
    let json = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(json["guide_radius"], 200.0);
    assert_eq!(json["theme"], "system");
}
