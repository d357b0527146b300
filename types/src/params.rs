//! Election sizing parameters.

use serde::{Deserialize, Serialize};

/// Size limits for a single election.
///
/// The tally and winner scans are linear in roster and proposal count, so
/// deployments on metered substrates bound both up front. A limit of `0`
/// disables enforcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionParams {
    /// Maximum number of addresses the roster may hold. `0` = unlimited.
    #[serde(default = "default_max_voters")]
    pub max_voters: usize,

    /// Maximum number of proposals that may be submitted. `0` = unlimited.
    #[serde(default = "default_max_proposals")]
    pub max_proposals: usize,
}

impl ElectionParams {
    /// Parameters with no size limits, for unmetered deployments and tests.
    pub fn unlimited() -> Self {
        Self {
            max_voters: 0,
            max_proposals: 0,
        }
    }
}

impl Default for ElectionParams {
    fn default() -> Self {
        Self {
            max_voters: default_max_voters(),
            max_proposals: default_max_proposals(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_voters() -> usize {
    10_000
}

fn default_max_proposals() -> usize {
    1_000
}
