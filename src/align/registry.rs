//! Alignment registry
//!
//! Tracks, per named group of text fragments, the maximum length among the
//! group's live members. Every column of a rendered listing pads against one
//! of these maxima, so same-role columns line up no matter in which order
//! their texts were created.

use crate::types::MemberId;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// State of one alignment group
#[derive(Debug, Default)]
struct Group {
    max_length: usize,
    members: HashSet<MemberId>,
}

#[derive(Debug, Default)]
struct RegistryState {
    groups: HashMap<String, Group>,
    next_member: u64,
}

/// Thread-safe registry of per-group maximum text lengths
///
/// All mutations are serialized behind a single mutex. The lock is never
/// held while calling out of this module, so releasing a member from any
/// scope cannot deadlock against another registry operation.
#[derive(Debug, Default)]
pub struct AlignmentRegistry {
    state: Mutex<RegistryState>,
}

impl AlignmentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new live member of `group` with the given text length
    ///
    /// The group's maximum becomes `max(current, length)`; a group seen for
    /// the first time starts at `length`.
    pub fn register(&self, group: &str, length: usize) -> MemberId {
        let mut state = self.state.lock();
        let member = MemberId(state.next_member);
        state.next_member += 1;

        let entry = state.groups.entry(group.to_string()).or_default();
        entry.max_length = entry.max_length.max(length);
        entry.members.insert(member);
        member
    }

    /// Raise the group's maximum after a member's text changed
    ///
    /// Maxima never shrink while the group has live members. Lengths from
    /// members that are no longer registered are ignored.
    pub fn observe(&self, group: &str, member: MemberId, length: usize) {
        let mut state = self.state.lock();
        if let Some(entry) = state.groups.get_mut(group) {
            if entry.members.contains(&member) {
                entry.max_length = entry.max_length.max(length);
            }
        }
    }

    /// Maximum length of the group, or `None` when it has no live members
    pub fn max_length(&self, group: &str) -> Option<usize> {
        let state = self.state.lock();
        state.groups.get(group).map(|g| g.max_length)
    }

    /// Assign the largest maximum among `groups` to all of them
    ///
    /// Groups without live members are skipped: they neither contribute to
    /// the shared width nor receive it.
    pub fn unify_groups(&self, groups: &[&str]) {
        let mut state = self.state.lock();
        let shared = groups
            .iter()
            .filter_map(|g| state.groups.get(*g).map(|entry| entry.max_length))
            .max();

        if let Some(shared) = shared {
            for group in groups {
                if let Some(entry) = state.groups.get_mut(*group) {
                    entry.max_length = shared;
                }
            }
        }
    }

    /// Drop a member from its group
    ///
    /// When the last member leaves, the group and its maximum are forgotten;
    /// a later registration starts a fresh maximum.
    pub fn release(&self, group: &str, member: MemberId) {
        let mut state = self.state.lock();
        let now_empty = match state.groups.get_mut(group) {
            Some(entry) => {
                entry.members.remove(&member);
                entry.members.is_empty()
            }
            None => false,
        };
        if now_empty {
            state.groups.remove(group);
        }
    }

    /// Number of live members in a group
    pub fn member_count(&self, group: &str) -> usize {
        let state = self.state.lock();
        state.groups.get(group).map_or(0, |g| g.members.len())
    }

    /// Number of groups that currently have live members
    pub fn group_count(&self) -> usize {
        self.state.lock().groups.len()
    }
}
