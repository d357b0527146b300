//! Fundamental types for the agora election core.
//!
//! This crate defines the types shared across the workspace: voter
//! addresses and election sizing parameters.

pub mod address;
pub mod params;

pub use address::VoterAddress;
pub use params::ElectionParams;
