//! Tests for system user/group database reads.

use std::fs;
use std::path::{Path, PathBuf};

use roster_ingest::{IngestError, SystemDbPaths, load_system_state, read_names_db};
use tempfile::TempDir;

fn write_db(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write db file");
    path
}

#[test]
fn keeps_first_field_of_each_line() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_db(
        &dir,
        "passwd",
        "root:x:0:0:root:/root:/bin/bash\n\
         daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n\
         smith.j:x:1001:1001::/home/smith.j:/bin/bash\n",
    );

    let load = read_names_db(&path).expect("db reads");

    assert_eq!(load.names.len(), 3);
    assert!(load.names.contains("root"));
    assert!(load.names.contains("daemon"));
    assert!(load.names.contains("smith.j"));
    assert!(load.skipped.is_empty());
}

#[test]
fn skips_lines_without_delimiter() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_db(&dir, "group", "wheel:x:10:\nnot a database line\nsales:x:1001:\n");

    let load = read_names_db(&path).expect("db reads");

    assert_eq!(load.names.len(), 2);
    assert!(load.names.contains("wheel"));
    assert!(load.names.contains("sales"));
    assert_eq!(load.skipped.len(), 1);
    assert_eq!(load.skipped[0].line, 2);
    assert_eq!(load.skipped[0].content, "not a database line");
}

#[test]
fn collapses_duplicate_names() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_db(&dir, "passwd", "root:x:0:0\nroot:x:0:0\n");

    let load = read_names_db(&path).expect("db reads");

    assert_eq!(load.names.len(), 1);
}

#[test]
fn fails_when_file_missing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent");

    let error = read_names_db(&path).expect_err("missing db is fatal");

    assert!(matches!(error, IngestError::Open { .. }));
}

#[test]
fn local_paths_name_working_directory_fixtures() {
    let paths = SystemDbPaths::local();

    assert_eq!(paths.passwd, Path::new("passwd"));
    assert_eq!(paths.group, Path::new("group"));
}

#[test]
fn loads_both_databases_into_state() {
    let dir = TempDir::new().expect("temp dir");
    let passwd = write_db(&dir, "passwd", "root:x:0:0\nsmith.j:x:1001:1001\n");
    let group = write_db(&dir, "group", "wheel:x:10:\nsales:x:1001:\n");

    let load = load_system_state(&SystemDbPaths { passwd, group }).expect("state loads");

    assert!(load.state.users.contains("root"));
    assert!(load.state.users.contains("smith.j"));
    assert!(load.state.groups.contains("sales"));
    assert!(load.skipped_users.is_empty());
    assert!(load.skipped_groups.is_empty());
}
