use std::fs;

use tempfile::TempDir;

use pagesetup_core::commands::{DetectCommand, DetectOptions, SetupError};
use pagesetup_core::context::AppContext;
use pagesetup_core::types::ProjectType;

fn command_for(temp: &TempDir) -> DetectCommand {
    DetectCommand::new(AppContext::new(
        temp.path().join("project"),
        temp.path().join("config"),
    ))
}

#[test]
fn detect_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("index.html"), "<p>x</p>").unwrap();
    fs::write(project.join("package.json"), r#"{"scripts":{"build":"b"}}"#).unwrap();

    let report = command_for(&temp).execute(&DetectOptions::new()).unwrap();

    assert_eq!(report.detection.project_type, ProjectType::Node);
    assert_eq!(report.index_html, project.join("index.html"));
    assert!(!project.join(".github").exists());
    assert!(!project.join(".nojekyll").exists());
}

#[test]
fn detect_respects_configured_ignore_list() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(project.join("dist")).unwrap();
    fs::write(project.join("dist/index.html"), "<p>built</p>").unwrap();
    fs::write(project.join("pagesetup.toml"), "ignore = [\"dist\"]\n").unwrap();

    let err = command_for(&temp)
        .execute(&DetectOptions::new())
        .unwrap_err();

    assert!(matches!(err, SetupError::IndexNotFound { .. }));
    assert!(err.to_string().contains("No index.html found"));
}

#[test]
fn detect_serializes_to_json() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("index.html"), "<p>x</p>").unwrap();

    let report = command_for(&temp)
        .execute(&DetectOptions::new().with_project_type(ProjectType::Static))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["detection"]["project_type"], "static");
    assert!(json["detection"]["build_script"].is_null());
}
