//! End-to-end tests for the provisioning pipeline.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use roster_cli::pipeline::{load_roster, read_system_state, resolve};
use roster_emit::write_script;
use roster_ingest::SystemDbPaths;
use roster_model::ProvisionPlan;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn render(plan: &ProvisionPlan) -> String {
    let mut buffer = Vec::new();
    write_script(&mut buffer, plan).expect("in-memory write");
    String::from_utf8(buffer).expect("script is UTF-8")
}

fn run(dir: &TempDir, roster: &str, passwd: &str, group: &str) -> String {
    let roster = write_file(dir, "roster.csv", roster);
    let passwd = write_file(dir, "passwd", passwd);
    let group = write_file(dir, "group", group);

    let load = load_roster(&roster).expect("roster loads");
    let system = read_system_state(&SystemDbPaths { passwd, group }).expect("state loads");
    let plan = resolve(&load.records, &system.state);
    render(&plan)
}

#[test]
fn single_record_produces_full_quadruplet() {
    let dir = TempDir::new().expect("temp dir");
    let script = run(
        &dir,
        "lastname,firstname,group,extension\nSmith,John,Sales,101\n",
        "",
        "",
    );

    assert!(script.starts_with("#!/bin/bash\n\n"));
    assert!(script.contains("groupadd sales\n"));
    assert!(script.contains("useradd smith.j -g sales -c \"John Smith - 101\"\n"));
    assert!(script.contains("echo \"John123\" | passwd --stdin smith.j\n"));
    assert!(script.contains("passwd -e smith.j\n"));
    assert!(script.contains("passwd -x 120 smith.j\n"));
}

#[test]
fn account_lines_match_parsed_record_count() {
    let dir = TempDir::new().expect("temp dir");
    let script = run(
        &dir,
        "lastname,firstname,group,extension\n\
         Smith,John,Sales,101\n\
         Broken,Line,Sales\n\
         Jones,Mary,Sales,102\n",
        "",
        "",
    );

    // The malformed line is skipped; the remaining two records each get a
    // creation line.
    assert_eq!(script.matches("useradd ").count(), 2);
    assert!(!script.contains("Broken"));
}

#[test]
fn existing_state_forces_suffixes_and_suppresses_groupadd() {
    let dir = TempDir::new().expect("temp dir");
    let script = run(
        &dir,
        "lastname,firstname,group,extension\nSmith,John,Sales,101\n",
        "smith.j:x:1001:1001::/home/smith.j:/bin/bash\n",
        "sales:x:1001:\n",
    );

    assert!(!script.contains("groupadd sales"));
    assert!(script.contains("useradd smith.j2 -g sales -c \"John Smith - 101\"\n"));
}

#[test]
fn shared_group_is_created_once() {
    let dir = TempDir::new().expect("temp dir");
    let script = run(
        &dir,
        "lastname,firstname,group,extension\n\
         Smith,John,Sales Team,101\n\
         Jones,Mary,sales team,102\n",
        "",
        "",
    );

    assert_eq!(script.matches("groupadd sales_team\n").count(), 1);
    assert_eq!(script.matches("-g sales_team -c").count(), 2);
}

#[test]
fn spaced_names_fold_into_usernames_and_passwords() {
    let dir = TempDir::new().expect("temp dir");
    let script = run(
        &dir,
        "lastname,firstname,group,extension\nVan Der Berg,Ann Marie,Sales,103\n",
        "",
        "",
    );

    assert!(script.contains("useradd van_der_berg.a -g sales -c \"Ann Marie Van Der Berg - 103\"\n"));
    assert!(script.contains("echo \"Ann_Marie123\" | passwd --stdin van_der_berg.a\n"));
}

#[test]
fn missing_roster_is_fatal_and_yields_no_script() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.csv");

    let error = load_roster(&missing).expect_err("missing roster aborts");

    // No plan, no script: the absence of stdout output is the failure
    // signal; the error narration lives on stderr.
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn header_mismatch_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let roster = write_file(&dir, "roster.csv", "name,group\nSmith,Sales\n");

    assert!(load_roster(&roster).is_err());
}
