//! Printable views of a lineage for trace output and test diagnostics.

use std::collections::HashMap;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Bloodline, DomainError, TreeResult};

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: Index) -> TreeResult<Tree<String>>;
}

impl TreeNodeConvert for Bloodline {
    /// Renders the subtree at `root`, one `name (year)` line per vampire.
    ///
    /// Built bottom-up from the reversed pre-order so deep lineages do not recurse.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: Index) -> TreeResult<Tree<String>> {
        let order: Vec<Index> = self.iter_from(root)?.map(|(idx, _)| idx).collect();
        let mut built: HashMap<Index, Tree<String>> = HashMap::with_capacity(order.len());

        for &idx in order.iter().rev() {
            let node = self.node(idx)?;
            let leaves: Vec<Tree<String>> = node
                .offspring()
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, Tree::new(node.data.to_string()).with_leaves(leaves));
        }

        built.remove(&root).ok_or(DomainError::UnknownNode(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vampire;

    #[test]
    fn given_small_lineage_when_rendered_then_lists_every_vampire_once() {
        let mut bloodline = Bloodline::new();
        let root = bloodline.insert(Vampire::new("Ansel", 1580));
        let sarah = bloodline.insert(Vampire::new("Sarah", 1700));
        let andrew = bloodline.insert(Vampire::new("Andrew", 1850));
        let elgort = bloodline.insert(Vampire::new("Elgort", 1910));
        bloodline.add_offspring(root, sarah).unwrap();
        bloodline.add_offspring(sarah, andrew).unwrap();
        bloodline.add_offspring(root, elgort).unwrap();

        let rendered = bloodline.to_tree_string(root).unwrap().to_string();
        println!("{}", rendered);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Ansel (1580)");
        assert!(lines[1].ends_with("Sarah (1700)"));
        assert!(lines[2].ends_with("Andrew (1850)"));
        assert!(lines[3].ends_with("Elgort (1910)"));
    }

    #[test]
    fn given_subtree_root_when_rendered_then_excludes_creator() {
        let mut bloodline = Bloodline::new();
        let root = bloodline.insert(Vampire::new("Ansel", 1580));
        let sarah = bloodline.insert(Vampire::new("Sarah", 1700));
        bloodline.add_offspring(root, sarah).unwrap();

        let rendered = bloodline.to_tree_string(sarah).unwrap().to_string();

        assert!(!rendered.contains("Ansel"));
        assert_eq!(rendered.lines().count(), 1);
    }
}
