use crate::error::SidebarError;
use crate::tree::{NodeKind, TreeBuilder};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_empty_builder() {
    let tree = TreeBuilder::new().build();
    assert!(tree.is_empty());
    assert_eq!(tree.dir_count(), 0);
    assert_eq!(tree.file_count(), 0);
}

#[test]
fn test_add_file_creates_parents() {
    let mut builder = TreeBuilder::new();
    builder.add_file("api/intro.md").unwrap();

    let tree = builder.build();
    assert_eq!(tree.dir_count(), 1);
    assert_eq!(tree.file_count(), 1);

    let api = &tree.children()[0];
    assert_eq!(api.name, "api");
    assert_eq!(api.kind, NodeKind::Directory);
    assert_eq!(api.path, "api");
    assert_eq!(api.children[0].name, "intro.md");
    assert_eq!(api.children[0].path, "api/intro.md");
}

#[test]
fn test_insertion_order_preserved() {
    let mut builder = TreeBuilder::new();
    builder.add_file("guide.md").unwrap();
    builder.add_file("README.md").unwrap();
    builder.add_dir("api").unwrap();
    builder.add_file("api/intro.md").unwrap();

    let tree = builder.build();
    let names: Vec<&str> = tree.children().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["guide.md", "README.md", "api"]);
}

#[test]
fn test_add_dir_idempotent() {
    let mut builder = TreeBuilder::new();
    builder.add_dir("api").unwrap();
    builder.add_dir("api").unwrap();
    builder.add_file("api/a.md").unwrap();

    let tree = builder.build();
    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.dir_count(), 1);
    assert_eq!(tree.file_count(), 1);
}

#[test]
fn test_curdir_components_skipped() {
    let mut builder = TreeBuilder::new();
    builder.add_file("./api/./intro.md").unwrap();

    let tree = builder.build();
    assert_eq!(tree.children()[0].children[0].path, "api/intro.md");
}

#[test]
fn test_reject_parent_traversal() {
    let mut builder = TreeBuilder::new();
    let result = builder.add_file("../escape.md");
    assert!(matches!(result, Err(SidebarError::InvalidPath(_))));
}

#[test]
fn test_reject_absolute_path() {
    let mut builder = TreeBuilder::new();
    let result = builder.add_file("/etc/passwd");
    assert!(matches!(result, Err(SidebarError::InvalidPath(_))));
}

#[test]
fn test_reject_empty_path() {
    let mut builder = TreeBuilder::new();
    assert!(builder.add_file("").is_err());
    assert!(builder.add_dir(".").is_err());
}

#[test]
fn test_file_directory_conflict() {
    let mut builder = TreeBuilder::new();
    builder.add_file("notes").unwrap();
    let result = builder.add_file("notes/inner.md");
    assert!(matches!(result, Err(SidebarError::InvalidPath(_))));
}

fn write_fixture(root: &Path) {
    fs::write(root.join("guide.md"), "# guide").unwrap();
    fs::write(root.join("README.md"), "# readme").unwrap();
    fs::create_dir(root.join("api")).unwrap();
    fs::write(root.join("api").join("intro.md"), "# intro").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git").join("config.md"), "hidden").unwrap();
}

#[test]
fn test_ingest_dir_skips_hidden_directories() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let tree = TreeBuilder::new().ingest_dir(dir.path()).unwrap().build();

    assert_eq!(tree.dir_count(), 1);
    assert_eq!(tree.file_count(), 3);
    assert!(tree.children().iter().all(|n| n.name != ".git"));
}

#[test]
fn test_ingest_dir_keeps_hidden_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".hidden.md"), "x").unwrap();

    let tree = TreeBuilder::new().ingest_dir(dir.path()).unwrap().build();
    assert_eq!(tree.file_count(), 1);
    assert_eq!(tree.children()[0].name, ".hidden.md");
}

#[test]
fn test_ingest_dir_hidden_root_is_scanned() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join(".docs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.md"), "").unwrap();

    let tree = TreeBuilder::new().ingest_dir(&root).unwrap().build();
    assert_eq!(tree.file_count(), 1);
}

#[test]
fn test_ingest_dir_sorted_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.md"), "").unwrap();
    fs::write(dir.path().join("a.md"), "").unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();

    let tree = TreeBuilder::new()
        .sorted(true)
        .ingest_dir(dir.path())
        .unwrap()
        .build();

    let names: Vec<&str> = tree.children().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["a.md", "b.md", "c"]);
}

#[test]
fn test_ingest_dir_empty_root() {
    let dir = TempDir::new().unwrap();
    let tree = TreeBuilder::new().ingest_dir(dir.path()).unwrap().build();
    assert!(tree.is_empty());
}

#[test]
fn test_ingest_dir_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = TreeBuilder::new().ingest_dir(&missing);
    assert!(matches!(result, Err(SidebarError::Scan { .. })));
}

#[cfg(unix)]
#[test]
fn test_ingest_dir_skips_symlinks() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("real.md"), "").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real.md"), dir.path().join("link.md")).unwrap();

    let tree = TreeBuilder::new().ingest_dir(dir.path()).unwrap().build();
    assert_eq!(tree.file_count(), 1);
    assert_eq!(tree.children()[0].name, "real.md");
}

#[test]
fn test_node_serializes_to_json() {
    let mut builder = TreeBuilder::new();
    builder.add_file("api/intro.md").unwrap();
    let tree = builder.build();

    let json = serde_json::to_string(tree.children()).unwrap();
    assert!(json.contains("\"name\":\"api\""));
    assert!(json.contains("\"path\":\"api/intro.md\""));
    assert!(json.contains("\"Directory\""));
}
