//! Conflict resolution over a collection of detected spans.
//!
//! [`SpanSet`] wraps one detector run's spans and exposes the two operations
//! the downstream transformer needs: [`SpanSet::resolve`] discards dominated
//! spans, [`SpanSet::finalize`] emits survivors in the traversal order the
//! transformer must follow when mutating text positions.
//!
//! Discard policy, per span pair:
//! - equal ranges: only the comparator-preferred span of the group survives
//!   (higher score first, entity type as the deterministic tiebreaker, and
//!   earliest input occurrence for fully identical duplicates),
//! - strict containment: the contained span always yields to the larger one,
//!   regardless of score,
//! - partial overlap: both survive; the transformer concatenates them,
//! - disjoint: no constraint.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::order::span_order;
use crate::overlap::{classify, Overlap};
use crate::span::Span;

/// An immutable collection of spans from one detection pass.
///
/// # Example
/// ```
/// use redact_spans::{Span, SpanSet};
///
/// let set = SpanSet::new(vec![
///     Span::new("NAME", 0, 10, 0.5).unwrap(),
///     Span::new("PHONE", 2, 4, 0.99).unwrap(),
/// ]);
/// let survivors = set.resolve().finalize(false);
/// // The contained PHONE span yields to its container regardless of score.
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].entity_type(), "NAME");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanSet {
    spans: Vec<Span>,
}

impl SpanSet {
    /// Wrap an already-validated span collection. Input order is preserved
    /// and only matters as the tiebreak for fully identical duplicates.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Build a set from raw detector tuples `(entity_type, start, end, score)`,
    /// validating every element before any resolution can begin.
    ///
    /// Fails fast on the first malformed element; no partial set is produced.
    pub fn from_raw<T, I>(raw: I) -> Result<Self, ResolveError>
    where
        T: Into<String>,
        I: IntoIterator<Item = (T, usize, usize, f64)>,
    {
        let spans = raw
            .into_iter()
            .map(|(entity_type, start, end, score)| Span::new(entity_type, start, end, score))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(spans))
    }

    /// Number of spans in the set.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the set holds no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The wrapped spans, in their current order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Discard dominated spans and return the survivors as a new set.
    ///
    /// Pure with respect to `self`; O(n²) pairwise classification over `i < j`
    /// index pairs, acceptable because per-document span counts are small.
    /// The survivor set is independent of input order.
    pub fn resolve(&self) -> SpanSet {
        let n = self.spans.len();
        let mut dominated = vec![false; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&self.spans[i], &self.spans[j]);
                match classify(a, b) {
                    Overlap::Equal => match span_order(a, b) {
                        Ordering::Greater => {
                            trace!(loser = i, winner = j, "equal range, lower preference");
                            dominated[i] = true;
                        }
                        // Less, or fully identical: the earlier occurrence wins
                        _ => {
                            trace!(loser = j, winner = i, "equal range, lower preference");
                            dominated[j] = true;
                        }
                    },
                    Overlap::Contains => {
                        trace!(loser = j, winner = i, "contained span yields");
                        dominated[j] = true;
                    }
                    Overlap::Within => {
                        trace!(loser = i, winner = j, "contained span yields");
                        dominated[i] = true;
                    }
                    Overlap::Partial | Overlap::Disjoint => {}
                }
            }
        }

        let survivors: Vec<Span> = self
            .spans
            .iter()
            .zip(&dominated)
            .filter(|(_, dominated)| !**dominated)
            .map(|(span, _)| span.clone())
            .collect();

        debug!(
            input = n,
            survivors = survivors.len(),
            discarded = n - survivors.len(),
            "resolved span conflicts"
        );
        SpanSet::new(survivors)
    }

    /// Emit the spans ordered by [`span_order`], ascending by default,
    /// descending when `reverse` is set.
    ///
    /// The emitted order is a hard contract for the text transformer: it is
    /// the traversal order that keeps offsets valid while replacements are
    /// applied (descending-start traversal when replacement lengths differ).
    pub fn finalize(&self, reverse: bool) -> Vec<Span> {
        let mut ordered = self.spans.clone();
        ordered.sort_by(span_order);
        if reverse {
            ordered.reverse();
        }
        ordered
    }
}

impl From<Vec<Span>> for SpanSet {
    fn from(spans: Vec<Span>) -> Self {
        Self::new(spans)
    }
}

impl FromIterator<Span> for SpanSet {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Convenience entry point: resolve conflicts and emit the final ordering in
/// one call.
pub fn resolve_spans(spans: Vec<Span>, reverse: bool) -> Vec<Span> {
    SpanSet::new(spans).resolve().finalize(reverse)
}
