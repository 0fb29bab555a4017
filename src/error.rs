use thiserror::Error;

/// Contract violations detected when constructing spans.
///
/// These are caller errors, not runtime conditions: a detector handing us a
/// malformed span has breached the boundary contract, so the failure surfaces
/// immediately and nothing is retried at this layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// Span ranges are half-open `[start, end)` and must be non-empty.
    #[error("invalid span range [{start}, {end}): start must be less than end")]
    InvalidRange { start: usize, end: usize },

    /// Confidence scores live in `[0.0, 1.0]`; NaN is rejected outright.
    #[error("invalid confidence score {score}: must be within [0.0, 1.0]")]
    InvalidScore { score: f64 },
}
