use std::fs;
use std::path::Path;

use tempfile::TempDir;

use pagesetup_core::fs::find_index_html;

fn default_ignore() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string()]
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "<html></html>").unwrap();
}

#[test]
fn finds_root_index() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("index.html"));

    let found = find_index_html(temp.path(), &default_ignore()).unwrap();

    assert_eq!(found, Some(temp.path().join("index.html")));
}

#[test]
fn root_index_beats_nested_index() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a/index.html"));
    touch(&temp.path().join("index.html"));

    let found = find_index_html(temp.path(), &default_ignore()).unwrap();

    assert_eq!(found, Some(temp.path().join("index.html")));
}

#[test]
fn shallowest_match_wins_over_sort_order() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a/b/c/index.html"));
    touch(&temp.path().join("z/index.html"));

    let found = find_index_html(temp.path(), &default_ignore()).unwrap();

    assert_eq!(found, Some(temp.path().join("z/index.html")));
}

#[test]
fn ties_resolve_by_name() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("public/index.html"));
    touch(&temp.path().join("docs/index.html"));

    let found = find_index_html(temp.path(), &default_ignore()).unwrap();

    assert_eq!(found, Some(temp.path().join("docs/index.html")));
}

#[test]
fn ignored_directories_are_skipped() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("node_modules/pkg/index.html"));

    assert_eq!(find_index_html(temp.path(), &default_ignore()).unwrap(), None);
    assert!(find_index_html(temp.path(), &[]).unwrap().is_some());
}

#[test]
fn directory_named_index_html_is_not_a_match() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("index.html")).unwrap();

    assert_eq!(find_index_html(temp.path(), &default_ignore()).unwrap(), None);
}

#[test]
fn name_match_is_exact() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("Index.html"));
    touch(&temp.path().join("index.htm"));

    assert_eq!(find_index_html(temp.path(), &default_ignore()).unwrap(), None);
}

#[test]
fn missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();

    let result = find_index_html(&temp.path().join("absent"), &default_ignore());

    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn symlinked_index_file_matches() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("src/page.html"));
    std::os::unix::fs::symlink("src/page.html", temp.path().join("index.html")).unwrap();

    let found = find_index_html(temp.path(), &default_ignore()).unwrap();

    assert_eq!(found, Some(temp.path().join("index.html")));
}

#[cfg(unix)]
#[test]
fn dangling_index_symlink_is_ignored() {
    let temp = TempDir::new().unwrap();
    std::os::unix::fs::symlink("missing.html", temp.path().join("index.html")).unwrap();

    assert_eq!(find_index_html(temp.path(), &default_ignore()).unwrap(), None);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_entered() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    touch(&outside.path().join("index.html"));
    std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

    assert_eq!(find_index_html(temp.path(), &default_ignore()).unwrap(), None);
}
