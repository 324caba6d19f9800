use std::collections::BTreeSet;

/// Names already present in the operating-system databases.
///
/// `users` seeds the username resolver's taken set. `groups` is read once
/// and never mutated; group names are stored exactly as they appear in the
/// database file.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub users: BTreeSet<String>,
    pub groups: BTreeSet<String>,
}

impl SystemState {
    pub fn new(users: BTreeSet<String>, groups: BTreeSet<String>) -> Self {
        Self { users, groups }
    }
}
