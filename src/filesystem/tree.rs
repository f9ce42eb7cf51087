use std::collections::{BTreeMap, btree_map};

use snafu::{OptionExt, ensure};
use tracing::debug;

use super::{
    Listing, NodePath, RootOperationRefusedSnafu, SegmentNotFoundSnafu, SelfContainmentSnafu,
    TreeError,
};

/// One named directory and the subtree it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    children: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in ascending name order.
    pub fn children(&self) -> btree_map::Values<'_, String, DirectoryNode> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.get(name)
    }

    /// Returns true when `other` is this very node or sits anywhere below it.
    ///
    /// Comparison is by identity, not by name, so two distinct directories that
    /// happen to share a name are never confused.
    pub fn contains_node(&self, other: &DirectoryNode) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if std::ptr::eq(node, other) {
                return true;
            }
            pending.extend(node.children.values());
        }
        false
    }

    fn descend(&self, segments: &[&str]) -> Result<&DirectoryNode, TreeError> {
        segments.iter().try_fold(self, |current, segment| {
            current
                .children
                .get(*segment)
                .context(SegmentNotFoundSnafu { segment: *segment })
        })
    }

    fn descend_mut(&mut self, segments: &[&str]) -> Result<&mut DirectoryNode, TreeError> {
        segments.iter().try_fold(self, |current, segment| {
            current
                .children
                .get_mut(*segment)
                .context(SegmentNotFoundSnafu { segment: *segment })
        })
    }
}

// Tears the subtree down level by level so deep chains never recurse through drop glue.
impl Drop for DirectoryNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children)
            .into_values()
            .collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// A resolved node together with the directory that owns it.
///
/// `parent` is `None` only for the root.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub parent: Option<&'a DirectoryNode>,
    pub node: &'a DirectoryNode,
}

/// Rooted directory namespace. The root has an empty name and is never listed,
/// moved or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTree {
    root: DirectoryNode,
}

impl Default for DirectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self {
            root: DirectoryNode::new(String::new()),
        }
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> Result<&DirectoryNode, TreeError> {
        let path = NodePath::parse(path)?;
        self.root.descend(path.segments())
    }

    pub fn resolve_with_parent(&self, path: &str) -> Result<Resolved<'_>, TreeError> {
        let path = NodePath::parse(path)?;
        let Some((parent_segments, name)) = path.split_last() else {
            return Ok(Resolved {
                parent: None,
                node: &self.root,
            });
        };

        let parent = self.root.descend(parent_segments)?;
        let node = parent
            .child(name)
            .context(SegmentNotFoundSnafu { segment: name })?;
        Ok(Resolved {
            parent: Some(parent),
            node,
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    /// Creates every missing directory along `path`. Existing directories are
    /// reused, so creating a path twice is a no-op.
    pub fn create(&mut self, path: &str) -> Result<(), TreeError> {
        let parsed = NodePath::parse(path)?;

        let mut created = 0usize;
        let mut current = &mut self.root;
        for segment in parsed.segments() {
            current = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| {
                    created += 1;
                    DirectoryNode::new(*segment)
                });
        }

        debug!("Created {} new directories for '{}'", created, path);
        Ok(())
    }

    /// Moves the subtree at `source` under the directory at `destination`,
    /// keeping its name. A same-named child already at the destination is replaced.
    pub fn move_node(&mut self, source: &str, destination: &str) -> Result<(), TreeError> {
        let source_path = NodePath::parse(source)?;
        let (parent_segments, name) = source_path
            .split_last()
            .context(RootOperationRefusedSnafu { path: source })?;

        let source_node = self
            .root
            .descend(parent_segments)?
            .child(name)
            .context(SegmentNotFoundSnafu { segment: name })?;

        let destination_path = NodePath::parse(destination)?;
        let target = self.root.descend(destination_path.segments())?;
        ensure!(!source_node.contains_node(target), SelfContainmentSnafu);

        // The destination lies outside the detached subtree and still resolves.
        let detached = self
            .root
            .descend_mut(parent_segments)?
            .children
            .remove(name)
            .context(SegmentNotFoundSnafu { segment: name })?;
        let target = self.root.descend_mut(destination_path.segments())?;
        if let Some(replaced) = target.children.insert(detached.name.clone(), detached) {
            debug!(
                "Moving '{}' into '{}' replaced existing directory '{}'",
                source, destination, replaced.name
            );
        }

        debug!("Moved '{}' into '{}'", source, destination);
        Ok(())
    }

    /// Removes the directory at `path` together with everything below it.
    pub fn delete(&mut self, path: &str) -> Result<(), TreeError> {
        let parsed = NodePath::parse(path)?;
        let (parent_segments, name) = parsed
            .split_last()
            .context(RootOperationRefusedSnafu { path })?;

        self.root
            .descend_mut(parent_segments)?
            .children
            .remove(name)
            .context(SegmentNotFoundSnafu { segment: name })?;

        debug!("Deleted '{}'", path);
        Ok(())
    }

    /// Depth-first, pre-order walk of every directory below the root, siblings in
    /// ascending name order.
    pub fn list(&self) -> Listing<'_> {
        Listing::new(&self.root)
    }
}
