//! In-memory directory namespace.
//!
//! The tree is a map-of-maps: every directory structurally owns its children,
//! keyed and ordered by name. Nodes carry no parent links, so the only way a
//! cycle could appear is a MOVE into the moved subtree, which is rejected
//! before anything is detached.

mod listing;
mod path;
mod tree;

pub use listing::{ListEntry, Listing};
pub use path::NodePath;
pub use tree::{DirectoryNode, DirectoryTree, Resolved};

use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("path cannot be empty"))]
    EmptyPath,
    #[snafu(display("{path} contains an empty directory name"))]
    InvalidSegment { path: String },
    #[snafu(display("{segment} does not exist"))]
    SegmentNotFound { segment: String },
    #[snafu(display("cannot move a directory inside itself"))]
    SelfContainment,
    #[snafu(display("{path} does not exist"))]
    RootOperationRefused { path: String },
}
