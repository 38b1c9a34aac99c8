//! Normalized hierarchical addresses

use std::fmt;
use std::str::FromStr;

use super::errors::{PathError, PathResult};

/// Segment separator used in raw paths
pub const SEPARATOR: char = '/';

/// A normalized collection or document address.
///
/// Addresses are immutable. Navigation (`parent`, `child`, ...) always
/// returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Address {
    segments: Vec<String>,
}

impl Address {
    /// The root address (no segments)
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a raw path.
    ///
    /// Leading and trailing separators are stripped and repeated separators
    /// collapse, so every resulting segment is non-empty.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: split_segments(raw).collect(),
        }
    }

    /// Path segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root address
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Same as [`Address::is_root`]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// True iff the segment count is odd
    pub fn is_collection(&self) -> bool {
        self.segments.len() % 2 == 1
    }

    /// True iff the address is a non-root address with an even segment count
    pub fn is_document(&self) -> bool {
        !self.is_root() && !self.is_collection()
    }

    /// The last segment, or `""` for the root
    pub fn id(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Address with the last segment removed
    pub fn parent(&self) -> PathResult<Self> {
        if self.is_root() {
            return Err(PathError::NoParentOfRoot);
        }
        Ok(self.truncated(self.segments.len() - 1))
    }

    /// The collection that contains this address.
    ///
    /// For a collection this skips the owning document: `a/b/c` → `a`, and a
    /// top-level collection yields the root. For a document it is the same
    /// as [`Address::parent`].
    pub fn parent_collection(&self) -> PathResult<Self> {
        if self.is_root() {
            return Err(PathError::NoParentOfRoot);
        }
        if self.is_collection() {
            return Ok(self.truncated(self.segments.len().saturating_sub(2)));
        }
        self.parent()
    }

    /// Address of a child path below this one.
    ///
    /// `segment` is normalized the same way as [`Address::parse`], so it may
    /// itself contain separators (`child("posts/p1")`).
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(split_segments(segment));
        Self { segments }
    }

    fn truncated(&self, len: usize) -> Self {
        Self {
            segments: self.segments[..len].to_vec(),
        }
    }
}

fn split_segments(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.trim_matches(SEPARATOR)
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
