//! The election engine — one state object owning the whole workflow.

use agora_types::{ElectionParams, VoterAddress};
use tracing::{debug, info};

use crate::access::{AccessControl, SingleAdmin};
use crate::error::ElectionError;
use crate::event::{ElectionEvent, EventBus};
use crate::phase::Phase;
use crate::proposal::{Proposal, ProposalBook, ProposalId};
use crate::roster::{VoterRecord, VoterRoster};
use crate::tally;

/// The role an operation requires of its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The administrative identity.
    Admin,
    /// Any address currently on the voter roster.
    Registered,
    /// A registered address that has not yet cast a ballot.
    EligibleVoter,
}

/// A single election: phase, roster, proposals, and the public log.
///
/// Every mutating call runs to completion on `&mut self`; the surrounding
/// substrate is assumed to serialize calls, so each method validates all of
/// its preconditions before touching any state and a failure commits
/// nothing.
pub struct Election {
    access: Box<dyn AccessControl>,
    params: ElectionParams,
    phase: Phase,
    roster: VoterRoster,
    proposals: ProposalBook,
    events: EventBus,
}

impl Election {
    /// An election administered by `admin`, with default size limits.
    pub fn new(admin: VoterAddress) -> Self {
        Self::with_params(admin, ElectionParams::default())
    }

    /// An election administered by `admin`, with explicit size limits.
    pub fn with_params(admin: VoterAddress, params: ElectionParams) -> Self {
        Self::with_access(Box::new(SingleAdmin::new(admin)), params)
    }

    /// An election with a caller-supplied access-control capability.
    pub fn with_access(access: Box<dyn AccessControl>, params: ElectionParams) -> Self {
        Self {
            access,
            params,
            phase: Phase::RegisteringVoters,
            roster: VoterRoster::new(),
            proposals: ProposalBook::new(),
            events: EventBus::new(),
        }
    }

    /// Subscribe an observer to the public event log.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&ElectionEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    /// The single precondition check shared by every phase-gated operation:
    /// role first, then phase.
    fn guard(
        &self,
        caller: &VoterAddress,
        role: Role,
        required: Phase,
    ) -> Result<(), ElectionError> {
        match role {
            Role::Admin => {
                if !self.access.is_admin(caller) {
                    return Err(ElectionError::Unauthorized);
                }
            }
            Role::Registered => {
                if !self.roster.is_registered(caller) {
                    return Err(ElectionError::Unauthorized);
                }
            }
            Role::EligibleVoter => {
                let record = self
                    .roster
                    .get(caller)
                    .ok_or(ElectionError::Unauthorized)?;
                if record.has_voted {
                    return Err(ElectionError::AlreadyVoted(caller.clone()));
                }
            }
        }
        if self.phase != required {
            return Err(ElectionError::WrongPhase {
                required,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn check_roster_limit(&self, prospective: usize) -> Result<(), ElectionError> {
        let max = self.params.max_voters;
        if max != 0 && prospective > max {
            return Err(ElectionError::RosterLimitExceeded {
                len: prospective,
                max,
            });
        }
        Ok(())
    }

    /// Replace the entire voter roster with `voters`.
    ///
    /// Admin only, [`Phase::RegisteringVoters`] only. Every listed address
    /// gets a fresh record; addresses absent from the input are dropped,
    /// and any prior ballot state is discarded.
    pub fn register_voters(
        &mut self,
        caller: &VoterAddress,
        voters: &[VoterAddress],
    ) -> Result<(), ElectionError> {
        self.guard(caller, Role::Admin, Phase::RegisteringVoters)?;
        self.check_roster_limit(VoterRoster::replacement_len(voters))?;

        self.roster.replace(voters);
        info!(count = self.roster.len(), "voter roster replaced");
        for voter in voters {
            self.events.emit(&ElectionEvent::VoterRegistered {
                voter: voter.clone(),
            });
        }
        Ok(())
    }

    /// Merge `voters` into the roster, keeping voters not listed.
    ///
    /// Admin only, [`Phase::RegisteringVoters`] only. Re-listing an already
    /// registered address resets its ballot state.
    pub fn merge_voters(
        &mut self,
        caller: &VoterAddress,
        voters: &[VoterAddress],
    ) -> Result<(), ElectionError> {
        self.guard(caller, Role::Admin, Phase::RegisteringVoters)?;
        self.check_roster_limit(self.roster.merged_len(voters))?;

        self.roster.merge(voters);
        info!(count = self.roster.len(), "voter roster merged");
        for voter in voters {
            self.events.emit(&ElectionEvent::VoterRegistered {
                voter: voter.clone(),
            });
        }
        Ok(())
    }

    /// Append a proposal and return its id.
    ///
    /// Registered voters only, [`Phase::ProposalsOpen`] only. Any text is
    /// accepted, including empty or duplicate strings.
    pub fn submit_proposal(
        &mut self,
        caller: &VoterAddress,
        text: impl Into<String>,
    ) -> Result<ProposalId, ElectionError> {
        self.guard(caller, Role::Registered, Phase::ProposalsOpen)?;
        let max = self.params.max_proposals;
        if max != 0 && self.proposals.len() >= max {
            return Err(ElectionError::ProposalLimitExceeded {
                len: self.proposals.len(),
                max,
            });
        }

        let id = self.proposals.submit(text);
        debug!(id, "proposal submitted");
        self.events.emit(&ElectionEvent::ProposalSubmitted { id });
        Ok(id)
    }

    /// Record the caller's single ballot for `proposal`.
    ///
    /// Registered, not-yet-voted voters only, [`Phase::VotingOpen`] only.
    /// The choice is recorded on the voter's record; vote counts are not
    /// touched until the tally pass.
    pub fn cast_vote(
        &mut self,
        caller: &VoterAddress,
        proposal: ProposalId,
    ) -> Result<(), ElectionError> {
        self.guard(caller, Role::EligibleVoter, Phase::VotingOpen)?;
        if !self.proposals.contains(proposal) {
            return Err(ElectionError::ProposalNotFound {
                id: proposal,
                len: self.proposals.len(),
            });
        }

        // guard proved the caller is registered and has not voted
        if let Some(record) = self.roster.get_mut(caller) {
            record.record_ballot(proposal);
        }
        debug!(voter = %caller, proposal, "ballot cast");
        self.events.emit(&ElectionEvent::VoteCast {
            voter: caller.clone(),
            proposal,
        });
        Ok(())
    }

    /// Move the workflow to the next phase.
    ///
    /// Admin only; fails with [`ElectionError::WorkflowComplete`] once the
    /// terminal phase is reached. The `VotingClosed → Tallied` transition
    /// runs the tally pass before the phase change commits, which is the
    /// only way the tally can ever run.
    pub fn advance(&mut self, caller: &VoterAddress) -> Result<Phase, ElectionError> {
        if !self.access.is_admin(caller) {
            return Err(ElectionError::Unauthorized);
        }
        let previous = self.phase;
        let next = previous.next().ok_or(ElectionError::WorkflowComplete)?;

        if next == Phase::Tallied {
            tally::run(&self.roster, &mut self.proposals);
            info!(voters = self.roster.len(), "ballots tallied");
        }
        self.phase = next;
        info!(?previous, ?next, "workflow advanced");
        self.events.emit(&ElectionEvent::PhaseChanged { previous, next });
        Ok(next)
    }

    /// The proposal with the strictly highest vote count.
    ///
    /// Anyone may call this, but only once the workflow has reached
    /// [`Phase::Tallied`]. Fails with [`ElectionError::NoUniqueWinner`]
    /// when the maximum is shared.
    pub fn winning_proposal(&self) -> Result<Proposal, ElectionError> {
        if self.phase != Phase::Tallied {
            return Err(ElectionError::WrongPhase {
                required: Phase::Tallied,
                actual: self.phase,
            });
        }
        tally::winning_proposal(&self.proposals)
    }

    // ── Readable state ─────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The full record for `voter`, if registered.
    pub fn voter(&self, voter: &VoterAddress) -> Option<&VoterRecord> {
        self.roster.get(voter)
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(id)
    }

    pub fn proposals(&self) -> &[Proposal] {
        self.proposals.as_slice()
    }

    /// Registered addresses in registration order.
    pub fn roster(&self) -> &[VoterAddress] {
        self.roster.addresses()
    }

    pub fn voter_count(&self) -> usize {
        self.roster.len()
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn params(&self) -> &ElectionParams {
        &self.params
    }
}
