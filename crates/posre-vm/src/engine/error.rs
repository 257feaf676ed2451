//! Errors that can occur during match execution.
//!
//! Failing to match is not an error: the VM reports it as `Ok(None)`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Execution fuel exhausted (too many interpreter steps).
    #[error("match execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    /// Backtracking recursion nested too deeply.
    #[error("match recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),

    /// The program violates an invariant the VM relies on.
    #[error("malformed program: {0}")]
    MalformedProgram(String),
}
