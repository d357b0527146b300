use agora_types::VoterAddress;
use thiserror::Error;

use crate::phase::Phase;

#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("operation requires phase {required:?}, current phase is {actual:?}")]
    WrongPhase { required: Phase, actual: Phase },

    #[error("voter {0} has already cast a ballot")]
    AlreadyVoted(VoterAddress),

    #[error("proposal {id} not found ({len} proposals exist)")]
    ProposalNotFound { id: usize, len: usize },

    #[error("no unique winner: two or more proposals are tied for the most votes")]
    NoUniqueWinner,

    #[error("the workflow is complete; no further transitions are possible")]
    WorkflowComplete,

    #[error("voter roster limit exceeded: {len}/{max}")]
    RosterLimitExceeded { len: usize, max: usize },

    #[error("proposal limit exceeded: {len}/{max}")]
    ProposalLimitExceeded { len: usize, max: usize },
}
