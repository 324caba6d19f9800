//! Provisioning plan construction.

use std::collections::BTreeSet;

use tracing::info;

use roster_model::{Assignment, ProvisionPlan, RosterRecord, SystemState};

use crate::resolver::UsernameRegistry;
use crate::text::{fold_identifier, fold_spaces};

/// Literal suffix appended to the first name to form the initial password.
const PASSWORD_SUFFIX: &str = "123";

/// Derives the clear-text initial password for a first name.
///
/// The suffix is appended before the space fold, so `"Ann Marie"` becomes
/// `Ann_Marie123`.
pub fn derive_password(first_name: &str) -> String {
    fold_spaces(&format!("{first_name}{PASSWORD_SUFFIX}"))
}

/// Derives the account comment, used verbatim inside quotes.
pub fn derive_comment(record: &RosterRecord) -> String {
    format!(
        "{} {} - {}",
        record.first_name, record.last_name, record.extension
    )
}

/// Builds the provisioning plan for a parsed roster.
///
/// Usernames resolve in roster order against a taken set seeded from the
/// system users, so each assignment is visible to every later record.
/// Missing groups are the normalized roster groups absent from the system
/// group set; the existing names are compared as read, un-normalized.
pub fn build_plan(records: &[RosterRecord], state: &SystemState) -> ProvisionPlan {
    let new_groups: BTreeSet<String> = records
        .iter()
        .map(|record| fold_identifier(&record.group))
        .filter(|group| !state.groups.contains(group))
        .collect();

    let mut registry = UsernameRegistry::new(state.users.clone());
    let mut accounts = Vec::with_capacity(records.len());
    for record in records {
        let username = registry.claim(&record.last_name, &record.first_name);
        accounts.push(Assignment {
            username,
            group: fold_identifier(&record.group),
            password: derive_password(&record.first_name),
            comment: derive_comment(record),
        });
    }

    info!(
        accounts = accounts.len(),
        new_groups = new_groups.len(),
        "provisioning plan built"
    );
    ProvisionPlan {
        new_groups,
        accounts,
    }
}
