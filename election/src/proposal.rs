//! Proposals and the append-only proposal book.

use serde::{Deserialize, Serialize};

/// A proposal's identity: its 0-based position in the book.
pub type ProposalId = usize;

/// A submitted ballot option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Free-form ballot text. Duplicates and the empty string are accepted.
    pub text: String,
    /// Number of ballots recorded for this proposal. Zero until the tally
    /// pass runs.
    pub vote_count: u32,
}

/// Append-only, insertion-ordered collection of proposals.
///
/// Once appended, a proposal's index and text never change; only the tally
/// pass touches vote counts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalBook {
    proposals: Vec<Proposal>,
}

impl ProposalBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a proposal with zero votes and return its id.
    pub fn submit(&mut self, text: impl Into<String>) -> ProposalId {
        let id = self.proposals.len();
        self.proposals.push(Proposal {
            text: text.into(),
            vote_count: 0,
        });
        id
    }

    /// Whether `id` names an existing proposal.
    ///
    /// The comparison is `id < len`, which also holds on an empty book; the
    /// `len - 1` form would underflow there.
    pub fn contains(&self, id: ProposalId) -> bool {
        id < self.proposals.len()
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(id)
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }

    pub(crate) fn reset_counts(&mut self) {
        for proposal in &mut self.proposals {
            proposal.vote_count = 0;
        }
    }

    pub(crate) fn add_vote(&mut self, id: ProposalId) {
        if let Some(proposal) = self.proposals.get_mut(id) {
            proposal.vote_count = proposal.vote_count.saturating_add(1);
        }
    }
}
