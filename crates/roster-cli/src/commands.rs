//! Orchestration for the provisioning run.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use roster_ingest::SystemDbPaths;

use crate::cli::Cli;
use crate::pipeline::{emit, load_roster, read_system_state, resolve};
use crate::types::RunResult;

/// Environment flag that redirects the database reads to files named
/// `passwd` and `group` in the working directory. Any non-empty value
/// activates it; the explicit `--passwd-file`/`--group-file` flags still
/// take precedence.
pub const LOCAL_DBS_ENV: &str = "ROSTERIZE_LOCAL_DBS";

/// Runs the whole pipeline for one roster.
pub fn run_generate(cli: &Cli) -> Result<RunResult> {
    let started = Instant::now();
    let span = info_span!("generate", roster = %cli.roster.display());
    let _guard = span.enter();

    let roster = load_roster(&cli.roster)?;
    let db_paths = resolve_db_paths(cli);
    let system = read_system_state(&db_paths)?;
    let plan = resolve(&roster.records, &system.state);

    if cli.dry_run {
        info!("dry run, skipping script emission");
    } else {
        emit(&plan, cli.output.as_deref())?;
    }
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );

    Ok(RunResult {
        roster_path: cli.roster.clone(),
        records: roster.records.len(),
        skipped_roster: roster.skipped,
        existing_users: system.state.users.len(),
        existing_groups: system.state.groups.len(),
        plan,
        output: cli.output.clone(),
        dry_run: cli.dry_run,
    })
}

/// Database paths, in precedence order: explicit flags, the local-fixture
/// environment flag, then the real system paths.
fn resolve_db_paths(cli: &Cli) -> SystemDbPaths {
    let mut paths = if local_dbs_requested() {
        info!("{LOCAL_DBS_ENV} is set, reading local passwd and group files");
        SystemDbPaths::local()
    } else {
        SystemDbPaths::system()
    };
    if let Some(passwd) = &cli.passwd_file {
        paths.passwd = passwd.clone();
    }
    if let Some(group) = &cli.group_file {
        paths.group = group.clone();
    }
    paths
}

fn local_dbs_requested() -> bool {
    std::env::var(LOCAL_DBS_ENV).is_ok_and(|value| !value.is_empty())
}
