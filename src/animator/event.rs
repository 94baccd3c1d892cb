use std::fmt;

use crate::sort::Algorithm;

/// Identifies one sort run; events from any other run are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortEvent {
    Step {
        run_id: RunId,
        /// Zero-based index of this step within the run.
        step: usize,
        total: usize,
        sizes: Vec<u8>,
    },
    Completed {
        run_id: RunId,
        algorithm: Algorithm,
        steps: usize,
    },
}

impl SortEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            SortEvent::Step { run_id, .. } | SortEvent::Completed { run_id, .. } => *run_id,
        }
    }
}
