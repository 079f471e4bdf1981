//! Tracking of domain names already submitted for lookup.

use std::collections::HashSet;

/// Names claimed for lookup during one run.
///
/// Membership only, never results. Names are compared exactly as supplied
/// (no case folding, no trailing-dot handling). The set only grows, which is
/// what stops alias and mail-exchanger cycles from being followed twice.
///
/// `try_claim` takes `&mut self`, so check and insert happen under one
/// exclusive borrow. Sharing a tracker across tasks requires wrapping it in a
/// mutex and calling `try_claim` while holding the lock.
#[derive(Debug, Default)]
pub struct SeenSet {
    names: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name` for lookup.
    ///
    /// Returns `true` the first time a name is claimed and `false` on every
    /// later call, leaving the set untouched.
    pub fn try_claim(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
