use std::collections::BTreeSet;

/// The resolved provisioning output for one roster record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Unique system username, disjoint from every pre-existing account
    /// name and from every other assignment in the same run.
    pub username: String,
    /// Normalized group name (lower-case, spaces replaced by underscores).
    pub group: String,
    /// Clear-text initial password; rotated on first login via `passwd -e`.
    pub password: String,
    /// Account comment field, quoted verbatim in the generated script.
    pub comment: String,
}

/// Everything the script emitter needs: groups that must be created and
/// the account assignments in roster order.
#[derive(Debug, Clone, Default)]
pub struct ProvisionPlan {
    pub new_groups: BTreeSet<String>,
    pub accounts: Vec<Assignment>,
}

impl ProvisionPlan {
    /// True when there is nothing to emit beyond the script preamble.
    pub fn is_empty(&self) -> bool {
        self.new_groups.is_empty() && self.accounts.is_empty()
    }
}
