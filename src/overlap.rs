//! Pairwise overlap classification over half-open span ranges.
//!
//! The resolver's discard policy is driven entirely by this relation: equal
//! ranges compete on score, contained spans yield to their container, partial
//! overlaps are left for the downstream transformer to concatenate.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Relation between two span ranges, from the first argument's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlap {
    /// No shared characters (adjacency counts as disjoint).
    Disjoint,
    /// Identical start and end.
    Equal,
    /// The first span covers the second, strictly wider on at least one bound.
    Contains,
    /// The second span covers the first, strictly wider on at least one bound.
    Within,
    /// Ranges intersect but neither covers the other.
    Partial,
}

impl Overlap {
    /// The classification seen from the other span's point of view.
    pub fn invert(self) -> Overlap {
        match self {
            Overlap::Contains => Overlap::Within,
            Overlap::Within => Overlap::Contains,
            other => other,
        }
    }
}

/// Classify the relation between two spans' ranges.
///
/// Total over all valid span pairs; `classify(a, b)` and `classify(b, a)` are
/// mirror images (see [`Overlap::invert`]).
pub fn classify(a: &Span, b: &Span) -> Overlap {
    if a.same_range(b) {
        Overlap::Equal
    } else if a.contains(b) {
        Overlap::Contains
    } else if b.contains(a) {
        Overlap::Within
    } else if a.intersection(b) > 0 {
        Overlap::Partial
    } else {
        Overlap::Disjoint
    }
}
