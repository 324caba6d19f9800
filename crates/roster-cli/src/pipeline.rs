//! Provisioning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Roster**: load and validate the roster CSV
//! 2. **System state**: read the user and group databases
//! 3. **Resolve**: derive usernames and build the provisioning plan
//! 4. **Emit**: write the script to stdout or a file
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Every external file is opened, fully consumed, and closed
//! before the next stage begins.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use roster_core::build_plan;
use roster_emit::write_script;
use roster_ingest::{RosterLoad, SystemDbPaths, SystemStateLoad, load_system_state, read_roster};
use roster_model::{ProvisionPlan, RosterRecord, SystemState};

// ============================================================================
// Stage 1: Roster
// ============================================================================

/// Loads the roster CSV.
///
/// A missing file or a wrong header is fatal; malformed data lines have
/// already been reported and skipped inside the reader.
pub fn load_roster(path: &Path) -> Result<RosterLoad> {
    let load = read_roster(path).context("load roster")?;
    debug!(records = load.records.len(), "roster stage complete");
    Ok(load)
}

// ============================================================================
// Stage 2: System state
// ============================================================================

/// Reads the user and group databases into name sets.
pub fn read_system_state(paths: &SystemDbPaths) -> Result<SystemStateLoad> {
    let load = load_system_state(paths).context("read system databases")?;
    debug!(
        users = load.state.users.len(),
        groups = load.state.groups.len(),
        "system state stage complete"
    );
    Ok(load)
}

// ============================================================================
// Stage 3: Resolve
// ============================================================================

/// Builds the provisioning plan from the parsed records and system state.
pub fn resolve(records: &[RosterRecord], state: &SystemState) -> ProvisionPlan {
    build_plan(records, state)
}

// ============================================================================
// Stage 4: Emit
// ============================================================================

/// Writes the script to the output target.
///
/// Stdout carries only script content; diagnostics stay on stderr so the
/// captured stream is directly executable.
pub fn emit(plan: &ProvisionPlan, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_script(&mut writer, plan)
                .with_context(|| format!("write script to {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush {}", path.display()))?;
            info!("wrote script to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_script(&mut lock, plan).context("write script to stdout")?;
            lock.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
