use std::collections::btree_map;
use std::fmt;

use super::DirectoryNode;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    name: &'a str,
    depth: usize,
}

impl<'a> ListEntry<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Distance from the root; top-level directories are at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl fmt::Display for ListEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", INDENT.repeat(self.depth), self.name)
    }
}

/// Pre-order walk over a directory's descendants.
///
/// Keeps one sibling iterator per open level instead of recursing, so arbitrarily
/// deep trees are listed without growing the call stack.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    levels: Vec<btree_map::Values<'a, String, DirectoryNode>>,
}

impl<'a> Listing<'a> {
    pub(super) fn new(root: &'a DirectoryNode) -> Self {
        Self {
            levels: vec![root.children()],
        }
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = ListEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.levels.len().checked_sub(1)?;
            match self.levels.last_mut()?.next() {
                Some(node) => {
                    self.levels.push(node.children());
                    return Some(ListEntry {
                        name: node.name(),
                        depth,
                    });
                }
                None => {
                    self.levels.pop();
                }
            }
        }
    }
}
