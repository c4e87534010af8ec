use generational_arena::{Arena, Index};
use tracing::{debug, instrument, warn};

use crate::domain::entities::Vampire;
use crate::domain::error::{DomainError, TreeResult};

/// Tree node in the arena-based lineage.
#[derive(Debug)]
pub struct LineageNode {
    /// Vampire represented by this node
    pub data: Vampire,
    /// Index of the creator in the arena, None for originals and unattached nodes
    creator: Option<Index>,
    /// Indices of offspring in the arena, in creation order
    offspring: Vec<Index>,
}

impl LineageNode {
    pub fn creator(&self) -> Option<Index> {
        self.creator
    }

    pub fn offspring(&self) -> &[Index] {
        &self.offspring
    }
}

/// Arena-based lineage store.
///
/// The arena owns every node; `offspring` lists are the ownership edges and
/// `creator` is a plain index used only to walk upwards. A node enters a tree
/// solely through [`Bloodline::add_offspring`], which refuses to overwrite an
/// existing creator, so each node keeps exactly one creator once attached.
///
/// The arena may hold several trees at once: every node without a creator is
/// the original of its own tree.
#[derive(Debug)]
pub struct Bloodline {
    arena: Arena<LineageNode>,
}

impl Default for Bloodline {
    fn default() -> Self {
        Self::new()
    }
}

impl Bloodline {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Adds a standalone vampire (no creator, no offspring).
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, data: Vampire) -> Index {
        self.arena.insert(LineageNode {
            data,
            creator: None,
            offspring: Vec::new(),
        })
    }

    /// Appends `offspring` to the offspring of `creator` and links it back.
    ///
    /// Fails with [`DomainError::AlreadyAttached`] if `offspring` already has a
    /// creator; the existing link is left untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn add_offspring(&mut self, creator: Index, offspring: Index) -> TreeResult<()> {
        let child = self.node(offspring)?;
        if creator == offspring {
            warn!("Rejected self attachment of {}", child.data.name);
            return Err(DomainError::SelfAttachment {
                name: child.data.name.clone(),
            });
        }
        if child.creator.is_some() {
            warn!("Rejected attachment of {}: already has a creator", child.data.name);
            return Err(DomainError::AlreadyAttached {
                name: child.data.name.clone(),
            });
        }

        let parent = self
            .arena
            .get_mut(creator)
            .ok_or(DomainError::UnknownNode(creator))?;
        parent.offspring.push(offspring);
        debug!("{} created offspring {:?}", parent.data.name, offspring);

        if let Some(child) = self.arena.get_mut(offspring) {
            child.creator = Some(creator);
        }
        Ok(())
    }

    pub fn get_node(&self, idx: Index) -> Option<&LineageNode> {
        self.arena.get(idx)
    }

    pub(crate) fn node(&self, idx: Index) -> TreeResult<&LineageNode> {
        self.arena.get(idx).ok_or(DomainError::UnknownNode(idx))
    }

    pub fn vampire(&self, idx: Index) -> TreeResult<&Vampire> {
        Ok(&self.node(idx)?.data)
    }

    pub fn creator(&self, idx: Index) -> TreeResult<Option<Index>> {
        Ok(self.node(idx)?.creator)
    }

    pub fn offspring(&self, idx: Index) -> TreeResult<&[Index]> {
        Ok(&self.node(idx)?.offspring)
    }

    /// Number of vampires directly created by this vampire.
    pub fn offspring_count(&self, idx: Index) -> TreeResult<usize> {
        Ok(self.node(idx)?.offspring.len())
    }

    /// Pre-order, left-to-right iterator over the subtree rooted at `root`,
    /// `root` included.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, root: Index) -> TreeResult<SubtreeIterator<'_>> {
        self.node(root)?;
        Ok(SubtreeIterator {
            bloodline: self,
            stack: vec![root],
        })
    }

    /// First vampire named `name` in pre-order below (and including) `root`.
    #[instrument(level = "debug", skip(self))]
    pub fn vampire_with_name(&self, root: Index, name: &str) -> TreeResult<Option<Index>> {
        Ok(self
            .iter_from(root)?
            .find(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx))
    }

    /// Number of vampires strictly below `idx`.
    #[instrument(level = "debug", skip(self))]
    pub fn total_descendants(&self, idx: Index) -> TreeResult<usize> {
        // the iterator yields `idx` itself first
        Ok(self.iter_from(idx)?.count() - 1)
    }

    /// Members of the subtree (root included) whose conversion year satisfies
    /// `predicate`, in pre-order.
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn collect_by_year<P>(&self, root: Index, predicate: P) -> TreeResult<Vec<Index>>
    where
        P: Fn(i32) -> bool,
    {
        Ok(self
            .iter_from(root)?
            .filter(|(_, node)| predicate(node.data.year_converted))
            .map(|(idx, _)| idx)
            .collect())
    }

    /// Members of the subtree converted strictly after `threshold`.
    pub fn millennials(&self, root: Index, threshold: i32) -> TreeResult<Vec<Index>> {
        self.collect_by_year(root, |year| year > threshold)
    }
}

pub struct SubtreeIterator<'a> {
    bloodline: &'a Bloodline,
    stack: Vec<Index>,
}

impl<'a> Iterator for SubtreeIterator<'a> {
    type Item = (Index, &'a LineageNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.bloodline.get_node(current_idx) {
                // Push offspring in reverse order for left-to-right traversal
                self.stack.extend(node.offspring.iter().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}
