//! Errors raised by lineage operations on the arena

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the lineage structure.
/// A well-formed tree never produces one; they all stem from bad handles or wiring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown node: {0:?}")]
    UnknownNode(Index),

    #[error("vampire already has a creator: {name}")]
    AlreadyAttached { name: String },

    #[error("vampire cannot be its own offspring: {name}")]
    SelfAttachment { name: String },

    #[error("no common ancestor between {first} and {second}")]
    NoCommonAncestor { first: String, second: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
