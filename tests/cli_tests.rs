use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    config_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("skillforge.json");

        let mut config = File::create(&config_path).unwrap();
        writeln!(
            config,
            r#"{{ "guide_radius": 100.0, "label_radius": 130.0, "view_half_extent": 200.0, "theme": "dark", "contrast": 0.7 }}"#
        )
        .unwrap();

        Self { dir, config_path }
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_render_defaults_to_stdout() {
    let output = run(&["render"]);
    assert!(output.status.success());

    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    for label in ["Mind", "Body", "Spirit"] {
        assert!(svg.contains(label), "missing {}", label);
    }

    let points = Regex::new(r#"<polygon points="([^"]+)""#).unwrap();
    let caps = points.captures(&svg).expect("polygon element");
    assert_eq!(caps[1].split(' ').count(), 3);
}

#[test]
fn test_render_to_file_with_config() {
    let ctx = TestContext::new();
    let out = ctx.dir.path().join("chart.svg");

    let output = run(&[
        "render",
        "--config",
        ctx.config_path.to_str().unwrap(),
        "--contrast",
        "0.5",
        "-s",
        "Rust:10",
        "-s",
        "Go:4",
        "-s",
        "Zig:7",
        "-s",
        "C:0",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).is_empty());

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("viewBox=\"-200 -200 400 400\""));
    assert!(svg.contains("r=\"100\""));
    // Explicit flag wins over the file.
    assert!(svg.contains("fill-opacity=\"0.5\""));

    let texts = Regex::new(r"<text ").unwrap();
    assert_eq!(texts.find_iter(&svg).count(), 4);
}

#[test]
fn test_inspect_csv() {
    let output = run(&["inspect", "--csv", "-s", "A:10", "-s", "B:10", "-s", "C:10", "-s", "D:10"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("index,id,label,value,angle_deg"));
    assert_eq!(lines.clone().count(), 4);

    let row = Regex::new(r"^1,2,B,10,0(\.0)?,200(\.0)?,").unwrap();
    assert!(lines.any(|l| row.is_match(l)), "{}", text);
}

#[test]
fn test_inspect_json() {
    let output = run(&["inspect", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["skills"].as_array().map(|s| s.len()), Some(3));
    assert_eq!(value["skills"][0]["label"], "Mind");
    assert_eq!(value["geometry"]["guide_radius"], 200.0);
    assert_eq!(value["geometry"]["labels"][0]["anchor"], "middle");
}

#[test]
fn test_inspect_table() {
    let output = run(&["inspect"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("SKILL POLYGON"));
    assert!(text.contains("Spirit"));
}

#[test]
fn test_too_few_skills_fails() {
    let output = run(&["render", "-s", "A:1", "-s", "B:2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("3 to 12"));
}

#[test]
fn test_malformed_skill_fails() {
    let output = run(&["render", "-s", "Mind=5"]);
    assert!(!output.status.success());
}

#[test]
fn test_bad_config_file_fails() {
    let ctx = TestContext::new();
    let bad = ctx.dir.path().join("bad.json");
    std::fs::write(&bad, r#"{ "label_radius": 50.0 }"#).unwrap();

    let output = run(&["render", "--config", bad.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_tone_conversion() {
    let output = run(&["tone", "--contrast", "0.7", "--noise", "0.35"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("50.0"));
    assert!(text.contains("35.0"));
    assert!(text.contains("#FF6B6B"));

    let bad = run(&["tone", "--accent", "#XYZ"]);
    assert!(!bad.status.success());
}

#[test]
fn test_season_for_date() {
    let output = run(&["season", "--date", "2025-03-19", "--theme", "dark"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("/spring-dark.svg"));

    let output = run(&["season", "--date", "2025-03-18", "--system-theme", "light"]);
    assert!(stdout(&output).contains("/winter-light.svg"));
}
