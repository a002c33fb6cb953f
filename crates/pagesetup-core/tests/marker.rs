use std::fs;

use tempfile::TempDir;

use pagesetup_core::fs::{MarkerOutcome, ensure_nojekyll};

#[test]
fn creates_empty_marker() {
    let temp = TempDir::new().unwrap();

    let outcome = ensure_nojekyll(temp.path(), false).unwrap();

    assert_eq!(outcome, MarkerOutcome::Created);
    let content = fs::read(temp.path().join(".nojekyll")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn existing_marker_is_left_alone() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".nojekyll"), "keep me").unwrap();

    let outcome = ensure_nojekyll(temp.path(), false).unwrap();

    assert_eq!(outcome, MarkerOutcome::AlreadyPresent);
    assert_eq!(
        fs::read_to_string(temp.path().join(".nojekyll")).unwrap(),
        "keep me"
    );
}

#[test]
fn dry_run_does_not_create() {
    let temp = TempDir::new().unwrap();

    let outcome = ensure_nojekyll(temp.path(), true).unwrap();

    assert_eq!(outcome, MarkerOutcome::Skipped);
    assert!(!temp.path().join(".nojekyll").exists());
}
