use snafu::ensure;

use super::{EmptyPathSnafu, InvalidSegmentSnafu, TreeError};

const SEPARATOR: char = '/';

/// A validated, `/`-separated path relative to the tree root.
///
/// Leading and trailing slashes are dropped, so `a/b`, `/a/b` and `a/b/` name the
/// same node. A path made only of slashes names the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> NodePath<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, TreeError> {
        ensure!(!raw.is_empty(), EmptyPathSnafu);

        let trimmed = raw.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Ok(Self {
                raw,
                segments: Vec::new(),
            });
        }

        let segments = trimmed.split(SEPARATOR).collect::<Vec<_>>();
        ensure!(
            segments.iter().all(|segment| !segment.is_empty()),
            InvalidSegmentSnafu { path: raw }
        );

        Ok(Self { raw, segments })
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the last segment, returning the parent's segments and the node name.
    pub fn split_last(&self) -> Option<(&[&'a str], &'a str)> {
        self.segments
            .split_last()
            .map(|(name, parent)| (parent, *name))
    }
}
