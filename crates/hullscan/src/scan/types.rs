//! Configuration and errors for the scan.

use std::fmt;

use crate::sort::SortStrategy;
use crate::stack::StackError;

/// Default stack capacity, and therefore the largest accepted input.
pub const DEFAULT_CAPACITY: usize = 32_768;

/// Scan configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    pub sort: SortStrategy,
    /// Stack capacity. Inputs with more points than this are rejected.
    pub capacity: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            sort: SortStrategy::Heap,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_sort(self, sort: SortStrategy) -> Self {
        Self { sort, ..self }
    }

    #[inline]
    pub fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }
}

/// Errors surfaced by the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Input has more points than the configured stack capacity.
    TooManyPoints { count: usize, capacity: usize },
    /// A stack precondition failed mid-scan.
    Stack(StackError),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::TooManyPoints { count, capacity } => write!(
                f,
                "too many points: {count} given, stack capacity is {capacity}"
            ),
            HullError::Stack(e) => write!(f, "scan aborted: {e}"),
        }
    }
}

impl std::error::Error for HullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HullError::Stack(e) => Some(e),
            HullError::TooManyPoints { .. } => None,
        }
    }
}

impl From<StackError> for HullError {
    fn from(e: StackError) -> Self {
        HullError::Stack(e)
    }
}
