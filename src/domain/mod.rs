//! Domain layer: lineage entities, arena storage and tree queries
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod ancestry;
pub mod arena;
pub mod entities;
pub mod error;

pub use ancestry::Ancestors;
pub use arena::{Bloodline, LineageNode, SubtreeIterator};
pub use entities::Vampire;
pub use error::{DomainError, TreeResult};
