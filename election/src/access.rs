//! Access control seam — who counts as the administrator.

use agora_types::VoterAddress;

/// Answers "is this caller the administrator?".
///
/// Admin identity is a capability of the surrounding substrate, not of the
/// election core; this trait is the seam it is injected through.
pub trait AccessControl: Send + Sync {
    fn is_admin(&self, caller: &VoterAddress) -> bool;
}

/// The standard implementation: exactly one administrative identity, fixed
/// at construction.
pub struct SingleAdmin {
    admin: VoterAddress,
}

impl SingleAdmin {
    pub fn new(admin: VoterAddress) -> Self {
        Self { admin }
    }
}

impl AccessControl for SingleAdmin {
    fn is_admin(&self, caller: &VoterAddress) -> bool {
        *caller == self.admin
    }
}
