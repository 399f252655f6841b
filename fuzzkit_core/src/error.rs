use thiserror::Error;

/// Errors surfaced by the dispatcher, the reference host and the catalog registry.
///
/// Generator misuse (zero counts, zero limits) is deliberately absent: those
/// calls return empty sets instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The test context has no native sub-test handle, so no element was run.
    #[error("cannot run without the builtin test runner")]
    HostUnavailable,

    /// One or more sub-tests failed. `names` holds their display names.
    #[error("{failed} of {total} sub-tests failed: {}", .names.join(", "))]
    SubTestsFailed {
        failed: usize,
        total: usize,
        names: Vec<String>,
    },

    /// Errors reported on the parent context itself rather than on a sub-test.
    #[error("test reported errors: {}", .0.join("; "))]
    Reported(Vec<String>),

    /// A set name that matches no catalog entry.
    #[error("unknown test set '{0}'")]
    UnknownSet(String),
}
