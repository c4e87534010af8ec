//! Upward queries: generations, seniority and closest common ancestors.
//!
//! Everything here walks `creator` links only, so each query is O(depth)
//! and needs no extra memory beyond a couple of cursors.

use generational_arena::Index;
use tracing::{instrument, trace, warn};

use crate::domain::arena::Bloodline;
use crate::domain::error::{DomainError, TreeResult};

/// Walks the creator chain upwards, starting at the creator of the initial node
/// and ending at the original.
pub struct Ancestors<'a> {
    bloodline: &'a Bloodline,
    next: Option<Index>,
}

impl Iterator for Ancestors<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self
            .bloodline
            .get_node(current)
            .and_then(|node| node.creator());
        Some(current)
    }
}

impl Bloodline {
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, idx: Index) -> TreeResult<Ancestors<'_>> {
        Ok(Ancestors {
            bloodline: self,
            next: self.node(idx)?.creator(),
        })
    }

    /// Number of creator hops between `idx` and its original (0 for the original).
    #[instrument(level = "trace", skip(self))]
    pub fn generations_from_original(&self, idx: Index) -> TreeResult<usize> {
        Ok(self.ancestors(idx)?.count())
    }

    /// The parentless vampire at the top of the chain containing `idx`.
    pub fn original(&self, idx: Index) -> TreeResult<Index> {
        Ok(self.ancestors(idx)?.last().unwrap_or(idx))
    }

    /// True if `idx` is strictly closer to its original than `other` is to its own.
    /// Equal generations are never more senior, so this is irreflexive.
    #[instrument(level = "trace", skip(self))]
    pub fn is_more_senior_than(&self, idx: Index, other: Index) -> TreeResult<bool> {
        Ok(self.generations_from_original(idx)? < self.generations_from_original(other)?)
    }

    /// Deepest vampire that is an ancestor of, or equal to, both `first` and `second`.
    ///
    /// If one is a direct ancestor of the other, the ancestor is returned.
    /// Fails with [`DomainError::NoCommonAncestor`] when the two belong to
    /// different trees.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(&self, first: Index, second: Index) -> TreeResult<Index> {
        let first_depth = self.generations_from_original(first)?;
        let second_depth = self.generations_from_original(second)?;

        // Bring the deeper cursor up to the same generation as the shallower one.
        let mut first_cursor = self.climb(first, first_depth.saturating_sub(second_depth))?;
        let mut second_cursor = self.climb(second, second_depth.saturating_sub(first_depth))?;
        trace!(
            "Equalized at generation {}: {:?} / {:?}",
            first_depth.min(second_depth),
            first_cursor,
            second_cursor
        );

        while first_cursor != second_cursor {
            match (self.creator(first_cursor)?, self.creator(second_cursor)?) {
                (Some(next_first), Some(next_second)) => {
                    first_cursor = next_first;
                    second_cursor = next_second;
                }
                _ => {
                    let first_name = self.vampire(first)?.name.clone();
                    let second_name = self.vampire(second)?.name.clone();
                    warn!("{} and {} share no ancestor", first_name, second_name);
                    return Err(DomainError::NoCommonAncestor {
                        first: first_name,
                        second: second_name,
                    });
                }
            }
        }

        Ok(first_cursor)
    }

    /// Moves `hops` creators up from `idx`; `hops` must not exceed the depth of `idx`.
    fn climb(&self, idx: Index, hops: usize) -> TreeResult<Index> {
        if hops == 0 {
            return Ok(idx);
        }
        self.ancestors(idx)?
            .nth(hops - 1)
            .ok_or(DomainError::UnknownNode(idx))
    }
}
