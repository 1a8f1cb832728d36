//! Hop-count distances.
//!
//! Every edge in a [`Graph`](crate::Graph) has an implicit weight of 1, so a distance
//! is simply the number of edges on a shortest path, or [`Distance::Unreachable`] when
//! no path exists.

use std::{cmp::Ordering, fmt};

/// Minimum number of edges from a start node, or unreachable.
///
/// `Distance` orders every finite distance before [`Distance::Unreachable`], so the
/// "infinity" sentinel compares the same way it would as a floating point value.
///
/// # Examples
///
/// ```rust
/// use dsgraph::Distance;
///
/// assert!(Distance::Reachable(3) < Distance::Unreachable);
/// assert_eq!(Distance::Reachable(2).hops(), Some(2));
/// assert_eq!(Distance::Unreachable.to_string(), "inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// The node is reachable using this many edges.
    Reachable(usize),
    /// No path leads to the node.
    Unreachable,
}

impl Distance {
    /// Returns the hop count, or `None` if unreachable.
    #[must_use]
    pub const fn hops(self) -> Option<usize> {
        match self {
            Distance::Reachable(hops) => Some(hops),
            Distance::Unreachable => None,
        }
    }

    /// Returns `true` if a path exists.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Reachable(a), Distance::Reachable(b)) => a.cmp(b),
            (Distance::Reachable(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Reachable(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Option<usize>> for Distance {
    fn from(hops: Option<usize>) -> Self {
        hops.map_or(Distance::Unreachable, Distance::Reachable)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(hops) => write!(f, "{hops}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}
