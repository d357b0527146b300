//! The fixed lifecycle of a single election.

use serde::{Deserialize, Serialize};

/// The stage an election is currently in.
///
/// Phases only ever move forward, one step at a time, in the order listed
/// here. [`Phase::Tallied`] is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The administrator is seeding the voter roster.
    RegisteringVoters,
    /// Registered voters may submit proposals.
    ProposalsOpen,
    /// The submission window has closed; voting has not begun.
    ProposalsClosed,
    /// Registered voters may cast ballots.
    VotingOpen,
    /// The ballot window has closed; the tally has not run.
    VotingClosed,
    /// Ballots have been tallied; results are final.
    Tallied,
}

impl Phase {
    /// The next phase in the fixed order, or `None` from [`Phase::Tallied`].
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::RegisteringVoters => Some(Phase::ProposalsOpen),
            Phase::ProposalsOpen => Some(Phase::ProposalsClosed),
            Phase::ProposalsClosed => Some(Phase::VotingOpen),
            Phase::VotingOpen => Some(Phase::VotingClosed),
            Phase::VotingClosed => Some(Phase::Tallied),
            Phase::Tallied => None,
        }
    }

    /// Whether the workflow has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Tallied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_fixed_order() {
        let expected = [
            Phase::RegisteringVoters,
            Phase::ProposalsOpen,
            Phase::ProposalsClosed,
            Phase::VotingOpen,
            Phase::VotingClosed,
            Phase::Tallied,
        ];
        let mut phase = Phase::RegisteringVoters;
        for window in expected.windows(2) {
            assert_eq!(phase, window[0]);
            phase = phase.next().expect("non-terminal phase must advance");
            assert_eq!(phase, window[1]);
        }
    }

    #[test]
    fn tallied_is_terminal() {
        assert!(Phase::Tallied.is_terminal());
        assert!(Phase::Tallied.next().is_none());
    }

    #[test]
    fn only_tallied_is_terminal() {
        for phase in [
            Phase::RegisteringVoters,
            Phase::ProposalsOpen,
            Phase::ProposalsClosed,
            Phase::VotingOpen,
            Phase::VotingClosed,
        ] {
            assert!(!phase.is_terminal());
            assert!(phase.next().is_some());
        }
    }
}
