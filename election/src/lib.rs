//! Single-election ballot core.
//!
//! One administrator seeds a roster of eligible voters, registered voters
//! submit proposals and cast one ballot each, and a one-way phased workflow
//! gates every step. The `VotingClosed → Tallied` transition converts
//! recorded ballots into per-proposal counts exactly once; after that,
//! anyone may query the winner.
//!
//! Design:
//! - The transition table in [`Phase::next`] is the single source of truth
//!   for which operations are legal when; every other guard compares the
//!   current phase against one required value.
//! - Casting a ballot records the choice without touching vote counts; the
//!   tally is a single linear pass bound to the closing transition, so no
//!   caller can run it twice.
//! - Admin identity is an external capability injected through the
//!   [`AccessControl`] seam.

pub mod access;
pub mod engine;
pub mod error;
pub mod event;
pub mod phase;
pub mod proposal;
pub mod roster;
mod tally;

pub use access::{AccessControl, SingleAdmin};
pub use engine::{Election, Role};
pub use error::ElectionError;
pub use event::{ElectionEvent, EventBus};
pub use phase::Phase;
pub use proposal::{Proposal, ProposalBook, ProposalId};
pub use roster::{VoterRecord, VoterRoster};
