use serde::Serialize;

use basket_core::{ItemId, Purchase};

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Per-run context passed to every prefilter stage.
#[derive(Clone, Debug)]
pub struct PrefilterRequest {
    /// Correlates the log lines of one run.
    pub request_id: String,
}

impl PrefilterRequest {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl Default for PrefilterRequest {
    fn default() -> Self {
        Self::new("prefilter")
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// How many rows one stage kept and removed (or relabeled).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub kept: usize,
    pub removed: usize,
}

/// Result of a prefilter run.
#[derive(Clone, Debug, Serialize)]
pub struct PrefilterOutput {
    /// Surviving rows in input order; long-tail items relabeled to `Other`.
    pub purchases: Vec<Purchase>,
    /// The retained top-N items, best seller first.
    pub retained_items: Vec<ItemId>,
    /// Rows whose item was relabeled to `Other`.
    pub relabeled: usize,
    pub stages: Vec<StageReport>,
}
