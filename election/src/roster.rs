//! The voter roster — insertion-ordered registry of eligible voters.

use std::collections::{HashMap, HashSet};

use agora_types::VoterAddress;
use serde::{Deserialize, Serialize};

use crate::proposal::ProposalId;

/// Per-voter ballot state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    /// Always true for records created through the roster; kept explicit so
    /// a record read in isolation still shows eligibility.
    pub registered: bool,
    /// Monotonic: flips false → true when the ballot is cast, never back.
    pub has_voted: bool,
    /// The chosen proposal. Set exactly once, together with `has_voted`.
    pub chosen_proposal: Option<ProposalId>,
}

impl VoterRecord {
    /// A freshly registered voter that has not voted.
    pub fn fresh() -> Self {
        Self {
            registered: true,
            has_voted: false,
            chosen_proposal: None,
        }
    }

    pub(crate) fn record_ballot(&mut self, proposal: ProposalId) {
        self.has_voted = true;
        self.chosen_proposal = Some(proposal);
    }
}

/// Insertion-ordered voter registry.
///
/// Enumeration order (used by the tally) and membership lookup live behind
/// a single mutation path, so the two can never drift apart: an address is
/// on the roster if and only if it has a record, and every record was
/// created as [`VoterRecord::fresh`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoterRoster {
    order: Vec<VoterAddress>,
    records: HashMap<VoterAddress, VoterRecord>,
}

impl VoterRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every existing record and seed the roster from `voters`.
    ///
    /// A duplicate address in the input keeps its first position and ends
    /// up with a single fresh record.
    pub fn replace(&mut self, voters: &[VoterAddress]) {
        self.order.clear();
        self.records.clear();
        self.merge(voters);
    }

    /// Insert or reset the listed voters, keeping everyone else.
    ///
    /// Re-listing an already registered address resets its ballot state but
    /// keeps its original roster position.
    pub fn merge(&mut self, voters: &[VoterAddress]) {
        for voter in voters {
            if !self.records.contains_key(voter) {
                self.order.push(voter.clone());
            }
            self.records.insert(voter.clone(), VoterRecord::fresh());
        }
    }

    /// Roster size after a hypothetical [`VoterRoster::replace`] with `voters`.
    pub fn replacement_len(voters: &[VoterAddress]) -> usize {
        voters.iter().collect::<HashSet<_>>().len()
    }

    /// Roster size after a hypothetical [`VoterRoster::merge`] with `voters`.
    pub fn merged_len(&self, voters: &[VoterAddress]) -> usize {
        let new: HashSet<_> = voters
            .iter()
            .filter(|voter| !self.records.contains_key(*voter))
            .collect();
        self.order.len() + new.len()
    }

    pub fn get(&self, voter: &VoterAddress) -> Option<&VoterRecord> {
        self.records.get(voter)
    }

    pub(crate) fn get_mut(&mut self, voter: &VoterAddress) -> Option<&mut VoterRecord> {
        self.records.get_mut(voter)
    }

    pub fn is_registered(&self, voter: &VoterAddress) -> bool {
        self.records.contains_key(voter)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The registered addresses in registration order.
    pub fn addresses(&self) -> &[VoterAddress] {
        &self.order
    }

    /// Iterate `(address, record)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&VoterAddress, &VoterRecord)> {
        self.order
            .iter()
            .filter_map(move |addr| self.records.get(addr).map(|record| (addr, record)))
    }
}
