//! Mind-map tree assembly.
//!
//! DESIGN
//! ======
//! Map nodes are stored flat with an optional `parent_id`. `MapTree::build`
//! sorts them once by `(created_at, id)` and keeps them in a single arena
//! indexed by position; child lists hold arena indices. Sorting first means
//! every child list comes out in sibling order without a second pass, and no
//! operation (build, walk, depth, drop) recurses per tree level, so parent
//! chains of any length are safe. Nodes that never become reachable from a
//! root sit on a parent cycle and are reported instead of being dropped.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::domain::MapNode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapTreeError {
    #[error("duplicate map node id: {0}")]
    DuplicateId(Uuid),
    #[error("map node {id} references unknown parent {parent_id}")]
    UnknownParent { id: Uuid, parent_id: Uuid },
    #[error("map node {0} is part of a parent cycle")]
    Cycle(Uuid),
}

/// Forest of map nodes rooted at the nodes without a parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTree {
    nodes: Vec<MapNode>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    index: HashMap<Uuid, usize>,
}

/// Borrowed view of one node and its position in the tree.
#[derive(Clone, Copy)]
pub struct MapTreeNode<'a> {
    tree: &'a MapTree,
    at: usize,
}

impl<'a> MapTreeNode<'a> {
    #[must_use]
    pub fn node(self) -> &'a MapNode {
        &self.tree.nodes[self.at]
    }

    /// Direct children in sibling order.
    pub fn children(self) -> impl ExactSizeIterator<Item = MapTreeNode<'a>> + 'a {
        let tree = self.tree;
        tree.children[self.at].iter().map(move |&at| MapTreeNode { tree, at })
    }
}

impl fmt::Debug for MapTreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapTreeNode")
            .field("node", self.node())
            .field("children", &self.tree.children[self.at].len())
            .finish()
    }
}

impl MapTree {
    /// Assemble a forest from flat nodes.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, parents missing from `nodes`, or
    /// parent cycles (including a node naming itself as parent).
    pub fn build(mut nodes: Vec<MapNode>) -> Result<Self, MapTreeError> {
        nodes.sort_by_key(|n| (n.created_at, n.id));

        let mut index: HashMap<Uuid, usize> = HashMap::with_capacity(nodes.len());
        for (at, node) in nodes.iter().enumerate() {
            if index.insert(node.id, at).is_some() {
                return Err(MapTreeError::DuplicateId(node.id));
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (at, node) in nodes.iter().enumerate() {
            match node.parent_id {
                None => roots.push(at),
                Some(parent_id) => match index.get(&parent_id) {
                    Some(&parent) => children[parent].push(at),
                    None => return Err(MapTreeError::UnknownParent { id: node.id, parent_id }),
                },
            }
        }

        let mut reachable = vec![false; nodes.len()];
        let mut stack = roots.clone();
        while let Some(at) = stack.pop() {
            reachable[at] = true;
            stack.extend(children[at].iter().copied());
        }
        if let Some(stuck) = reachable.iter().position(|seen| !seen) {
            return Err(MapTreeError::Cycle(nodes[stuck].id));
        }

        Ok(Self { nodes, children, roots, index })
    }

    pub fn roots(&self) -> impl ExactSizeIterator<Item = MapTreeNode<'_>> {
        self.roots.iter().map(move |&at| MapTreeNode { tree: self, at })
    }

    /// Roots belonging to one curriculum week.
    pub fn roots_for_week(&self, week: i32) -> impl Iterator<Item = MapTreeNode<'_>> {
        self.roots().filter(move |root| root.node().week == week)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path, counted in nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<MapTreeNode<'_>> {
        self.index.get(&id).map(|&at| MapTreeNode { tree: self, at })
    }

    /// Pre-order traversal yielding `(depth, node)`, roots at depth 0.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { tree: self, stack: self.roots.iter().rev().map(|&at| (0, at)).collect() }
    }
}

/// Iterator returned by [`MapTree::walk`].
pub struct Walk<'a> {
    tree: &'a MapTree,
    stack: Vec<(usize, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a MapNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, at) = self.stack.pop()?;
        self.stack
            .extend(self.tree.children[at].iter().rev().map(|&child| (depth + 1, child)));
        Some((depth, &self.tree.nodes[at]))
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
