//! Conformance runs across list backings

use tracing::{info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::conformance::{self, ConformanceError, Report};
use crate::list::ListKind;

/// Result of running the script against one backing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformOutcome {
    pub kind: ListKind,
    pub result: Result<Report, ConformanceError>,
}

impl ConformOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> ApplicationResult<Report> {
        let kind = self.kind;
        self.result.map_err(|source| ApplicationError::Conformance {
            kind: kind.to_string(),
            source,
        })
    }
}

/// Run the script against each backing in `kinds`, in order.
#[instrument(level = "debug")]
pub fn check_kinds(kinds: &[ListKind]) -> Vec<ConformOutcome> {
    kinds
        .iter()
        .map(|&kind| {
            let result = conformance::run_kind(kind);
            info!("{}: {}", kind, if result.is_ok() { "ok" } else { "FAILED" });
            ConformOutcome { kind, result }
        })
        .collect()
}
