//! Collision-free username resolution.

use std::collections::BTreeSet;

use tracing::debug;

use crate::text::fold_identifier;

/// Tracks every username that is unavailable: names read from the system
/// user database plus names assigned earlier in the same run.
///
/// Resolution is append-only; there is no removal or undo path.
#[derive(Debug, Clone, Default)]
pub struct UsernameRegistry {
    taken: BTreeSet<String>,
}

impl UsernameRegistry {
    /// Seeds the registry with the pre-existing system account names.
    pub fn new(existing: BTreeSet<String>) -> Self {
        Self { taken: existing }
    }

    /// Derives the base candidate for a person: lower-cased last name,
    /// a dot, the lower-cased first initial, with spaces in the joined
    /// result replaced by underscores.
    pub fn base_candidate(last_name: &str, first_name: &str) -> String {
        let initial: String = first_name.chars().take(1).collect();
        fold_identifier(&format!("{last_name}.{initial}"))
    }

    /// Resolves a unique username and marks it taken.
    ///
    /// The bare base candidate is tried first. On collision the candidate
    /// gains a decimal suffix probed from 2 upward: the counter starts at
    /// 1 and is pre-incremented before the first suffixed candidate, so a
    /// base that collides once becomes `base2`, never `base1`.
    pub fn claim(&mut self, last_name: &str, first_name: &str) -> String {
        let base = Self::base_candidate(last_name, first_name);
        let mut candidate = base.clone();
        let mut n: u64 = 1;
        while self.taken.contains(&candidate) {
            n += 1;
            candidate = format!("{base}{n}");
        }
        if candidate != base {
            debug!(base, username = %candidate, "username collision resolved");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// True when the name is already unavailable.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
