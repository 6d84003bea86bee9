use thiserror::Error;

/// Failures of the parse-search-mark pipeline. Either the fully marked text
/// is produced or one of these is returned; no partially marked output
/// exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The map text contains no `S` marker.
    #[error("map has no start marker 'S'")]
    MissingStart,
    /// The map text contains no `X` marker.
    #[error("map has no goal marker 'X'")]
    MissingGoal,
    /// The goal is not reachable from the start.
    #[error("no path from start to goal")]
    NoPath,
}
