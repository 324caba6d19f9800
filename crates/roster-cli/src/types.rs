use std::path::PathBuf;

use roster_ingest::SkippedLine;
use roster_model::ProvisionPlan;

/// Outcome of one provisioning run, consumed by the stderr summary.
#[derive(Debug)]
pub struct RunResult {
    pub roster_path: PathBuf,
    pub records: usize,
    pub skipped_roster: Vec<SkippedLine>,
    pub existing_users: usize,
    pub existing_groups: usize,
    pub plan: ProvisionPlan,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}
