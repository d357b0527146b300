//! One-shot ballot tally and winner resolution.

use crate::error::ElectionError;
use crate::proposal::{Proposal, ProposalBook};
use crate::roster::VoterRoster;

/// Convert recorded ballots into per-proposal vote counts.
///
/// Counts are zeroed before accumulation, so running the pass again on
/// unchanged ballot state produces identical counts. The engine invokes
/// this exclusively on the `VotingClosed → Tallied` transition, which can
/// happen at most once per election.
///
/// Cost is linear in roster size.
pub(crate) fn run(roster: &VoterRoster, proposals: &mut ProposalBook) {
    proposals.reset_counts();
    for (_voter, record) in roster.iter() {
        if !record.has_voted {
            continue;
        }
        if let Some(id) = record.chosen_proposal {
            proposals.add_vote(id);
        }
    }
}

/// Find the proposal with the strictly highest vote count.
///
/// Scans in index order with a running best initialized to a zero-vote
/// sentinel and a tie counter: a strictly greater count replaces the best
/// and resets the counter, an equal count increments it. A nonzero counter
/// after the scan is a tie.
///
/// The sentinel start means an election where every proposal received zero
/// votes reports [`ElectionError::NoUniqueWinner`] rather than picking one
/// arbitrarily; with no proposals at all the sentinel itself is returned.
pub(crate) fn winning_proposal(proposals: &ProposalBook) -> Result<Proposal, ElectionError> {
    let mut best = Proposal {
        text: String::new(),
        vote_count: 0,
    };
    let mut ties = 0usize;

    for proposal in proposals.iter() {
        if proposal.vote_count > best.vote_count {
            best = proposal.clone();
            ties = 0;
        } else if proposal.vote_count == best.vote_count {
            ties += 1;
        }
    }

    if ties != 0 {
        return Err(ElectionError::NoUniqueWinner);
    }
    Ok(best)
}
