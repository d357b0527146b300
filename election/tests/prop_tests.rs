use proptest::prelude::*;

use agora_election::{Election, ElectionError, Phase};
use agora_types::{ElectionParams, VoterAddress};

const PHASE_ORDER: [Phase; 6] = [
    Phase::RegisteringVoters,
    Phase::ProposalsOpen,
    Phase::ProposalsClosed,
    Phase::VotingOpen,
    Phase::VotingClosed,
    Phase::Tallied,
];

fn admin() -> VoterAddress {
    VoterAddress::new("chair")
}

fn voter_names(count: usize) -> Vec<VoterAddress> {
    (0..count).map(|i| VoterAddress::new(format!("v{i}"))).collect()
}

/// Run a whole election: `proposal_count` proposals, one ballot per entry in
/// `ballots` (`None` = abstain, `Some(c)` votes for proposal `c % proposal_count`).
/// Returns the engine at `Tallied`.
fn run_election(proposal_count: usize, ballots: &[Option<usize>]) -> Election {
    let mut e = Election::with_params(admin(), ElectionParams::unlimited());
    let voters = voter_names(ballots.len());
    e.register_voters(&admin(), &voters).unwrap();
    e.advance(&admin()).unwrap(); // ProposalsOpen

    for i in 0..proposal_count {
        e.submit_proposal(&voters[0], format!("proposal {i}")).unwrap();
    }
    e.advance(&admin()).unwrap(); // ProposalsClosed
    e.advance(&admin()).unwrap(); // VotingOpen

    for (voter, ballot) in voters.iter().zip(ballots) {
        if let Some(choice) = ballot {
            e.cast_vote(voter, choice % proposal_count).unwrap();
        }
    }
    e.advance(&admin()).unwrap(); // VotingClosed
    e.advance(&admin()).unwrap(); // Tallied
    e
}

proptest! {
    /// `advance` only ever moves forward one step in the fixed order, and
    /// every attempt past the terminal phase fails with `WorkflowComplete`.
    #[test]
    fn advance_moves_forward_one_step_at_a_time(steps in 0usize..12) {
        let mut e = Election::new(admin());
        for step in 0..steps {
            if step < PHASE_ORDER.len() - 1 {
                let next = e.advance(&admin()).unwrap();
                prop_assert_eq!(next, PHASE_ORDER[step + 1]);
                prop_assert_eq!(e.phase(), next);
            } else {
                let err = e.advance(&admin()).unwrap_err();
                prop_assert!(matches!(err, ElectionError::WorkflowComplete));
                prop_assert_eq!(e.phase(), Phase::Tallied);
            }
        }
    }

    /// The tally conserves ballots: every cast ballot is counted exactly
    /// once, and abstentions are not counted at all.
    #[test]
    fn tally_conserves_cast_ballots(
        proposal_count in 1usize..5,
        ballots in proptest::collection::vec(proptest::option::of(0usize..16), 1..20),
    ) {
        let e = run_election(proposal_count, &ballots);

        let cast = ballots.iter().filter(|b| b.is_some()).count() as u32;
        let counted: u32 = e.proposals().iter().map(|p| p.vote_count).sum();
        prop_assert_eq!(counted, cast);

        // per-proposal counts match a straightforward recount of the ballots
        for (id, proposal) in e.proposals().iter().enumerate() {
            let expected = ballots
                .iter()
                .flatten()
                .filter(|choice| **choice % proposal_count == id)
                .count() as u32;
            prop_assert_eq!(proposal.vote_count, expected);
        }
    }

    /// The winner, when one exists, holds the strict maximum; a tie error is
    /// only ever reported when the maximum is actually shared or zero.
    #[test]
    fn winner_agrees_with_the_maximum(
        proposal_count in 1usize..5,
        ballots in proptest::collection::vec(proptest::option::of(0usize..16), 1..20),
    ) {
        let e = run_election(proposal_count, &ballots);

        let max = e.proposals().iter().map(|p| p.vote_count).max().unwrap_or(0);
        let at_max = e
            .proposals()
            .iter()
            .filter(|p| p.vote_count == max)
            .count();

        match e.winning_proposal() {
            Ok(winner) => {
                prop_assert_eq!(winner.vote_count, max);
                prop_assert!(max > 0, "a zero-vote maximum ties with the sentinel");
                prop_assert_eq!(at_max, 1);
            }
            Err(ElectionError::NoUniqueWinner) => {
                prop_assert!(max == 0 || at_max > 1);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Ballot state is monotonic: once a voter has voted, their recorded
    /// choice never changes, no matter how often a re-vote is attempted.
    #[test]
    fn recorded_ballots_are_immutable(
        first in 0usize..3,
        retries in proptest::collection::vec(0usize..3, 1..5),
    ) {
        let mut e = Election::with_params(admin(), ElectionParams::unlimited());
        let voters = voter_names(1);
        e.register_voters(&admin(), &voters).unwrap();
        e.advance(&admin()).unwrap();
        for i in 0..3 {
            e.submit_proposal(&voters[0], format!("p{i}")).unwrap();
        }
        e.advance(&admin()).unwrap();
        e.advance(&admin()).unwrap(); // VotingOpen

        e.cast_vote(&voters[0], first).unwrap();
        for retry in retries {
            let err = e.cast_vote(&voters[0], retry).unwrap_err();
            prop_assert!(matches!(err, ElectionError::AlreadyVoted(_)));
            prop_assert_eq!(e.voter(&voters[0]).unwrap().chosen_proposal, Some(first));
        }
    }

    /// An address that was never registered can not submit or vote in any
    /// phase of the workflow.
    #[test]
    fn unregistered_addresses_never_participate(advances in 0usize..6) {
        let mut e = Election::new(admin());
        e.register_voters(&admin(), &voter_names(2)).unwrap();
        for _ in 0..advances {
            e.advance(&admin()).unwrap();
        }

        let outsider = VoterAddress::new("outsider");
        prop_assert!(matches!(
            e.submit_proposal(&outsider, "nope"),
            Err(ElectionError::Unauthorized)
        ));
        prop_assert!(matches!(
            e.cast_vote(&outsider, 0),
            Err(ElectionError::Unauthorized)
        ));
    }
}
