// WHY: Parse-don't-validate boundary type for detector output
// A Span can only be built through validation, so every downstream consumer
// relies on start < end and a bounded score without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// A detected sensitive entity occurrence: a half-open character range
/// `[start, end)` with a confidence score and a type label.
///
/// Spans are produced by an external detector and are immutable once built.
/// The resolver only selects and reorders them.
///
/// # Example
/// ```
/// use redact_spans::Span;
/// let span = Span::new("PHONE", 10, 22, 0.85).unwrap();
/// assert_eq!(span.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct Span {
    entity_type: String,
    start: usize,
    end: usize,
    score: f64,
}

/// Unvalidated wire shape; deserialization funnels through `Span::new`
/// so serde input cannot smuggle in a malformed span.
#[derive(Deserialize)]
struct RawSpan {
    entity_type: String,
    start: usize,
    end: usize,
    score: f64,
}

impl TryFrom<RawSpan> for Span {
    type Error = ResolveError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Span::new(raw.entity_type, raw.start, raw.end, raw.score)
    }
}

impl Span {
    /// Create a validated span.
    ///
    /// Fails with [`ResolveError::InvalidRange`] when `end <= start` and with
    /// [`ResolveError::InvalidScore`] when the score is outside `[0, 1]` or NaN.
    pub fn new(
        entity_type: impl Into<String>,
        start: usize,
        end: usize,
        score: f64,
    ) -> Result<Self, ResolveError> {
        if end <= start {
            return Err(ResolveError::InvalidRange { start, end });
        }
        if !(0.0..=1.0).contains(&score) || score.is_nan() {
            return Err(ResolveError::InvalidScore { score });
        }
        Ok(Self {
            entity_type: entity_type.into(),
            start,
            end,
            score,
        })
    }

    /// Start of the range (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the range (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Detector confidence in `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Entity type label, e.g. `"PHONE"` or `"PERSON"`.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Character length of the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: ranges are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of characters shared with `other`, 0 when disjoint.
    pub fn intersection(&self, other: &Span) -> usize {
        let lo = self.start.max(other.start);
        let hi = self.end.min(other.end);
        hi.saturating_sub(lo)
    }

    /// Whether this range covers `other` entirely (non-strict: equal ranges
    /// contain each other).
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Whether both spans cover exactly the same indices.
    pub fn same_range(&self, other: &Span) -> bool {
        self.start == other.start && self.end == other.end
    }
}
