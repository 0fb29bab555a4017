// WHY: Explicit comparator with enumerated key fields instead of an Ord impl
// Downstream text mutation depends on positional ordering, so the key
// precedence is part of the public contract rather than operator overloading.

use std::cmp::Ordering;

use crate::span::Span;

/// Strict total order over spans, used both to break ties among conflicting
/// spans and to produce the final emitted order.
///
/// Keys, in precedence order:
/// 1. `start` ascending — callers rely on positional ordering for safe text
///    mutation,
/// 2. `score` descending (`f64::total_cmp`, so the relation stays total),
/// 3. length descending,
/// 4. `entity_type` lexical ascending.
///
/// Two spans compare `Equal` only when every field is equal; for such fully
/// identical duplicates the resolver keeps the earliest input occurrence.
pub fn span_order(a: &Span, b: &Span) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| b.score().total_cmp(&a.score()))
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.entity_type().cmp(b.entity_type()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(entity_type: &str, start: usize, end: usize, score: f64) -> Span {
        Span::new(entity_type, start, end, score).unwrap()
    }

    #[test]
    fn test_start_position_dominates_all_other_keys() {
        let early = span("Z", 0, 2, 0.1);
        let late = span("A", 5, 50, 1.0);
        assert_eq!(span_order(&early, &late), Ordering::Less);
        assert_eq!(span_order(&late, &early), Ordering::Greater);
    }

    #[test]
    fn test_higher_score_sorts_first_at_same_start() {
        let weak = span("A", 3, 9, 0.4);
        let strong = span("A", 3, 9, 0.9);
        assert_eq!(span_order(&strong, &weak), Ordering::Less);
    }

    #[test]
    fn test_longer_span_sorts_first_at_same_start_and_score() {
        let short = span("A", 3, 6, 0.5);
        let long = span("A", 3, 12, 0.5);
        assert_eq!(span_order(&long, &short), Ordering::Less);
    }

    #[test]
    fn test_entity_type_is_the_final_tiebreaker() {
        let email = span("EMAIL", 3, 9, 0.5);
        let phone = span("PHONE", 3, 9, 0.5);
        assert_eq!(span_order(&email, &phone), Ordering::Less);
        assert_eq!(span_order(&phone, &email), Ordering::Greater);
    }

    #[test]
    fn test_only_identical_spans_compare_equal() {
        let a = span("PHONE", 3, 9, 0.5);
        assert_eq!(span_order(&a, &a.clone()), Ordering::Equal);

        let differs_in_score = span("PHONE", 3, 9, 0.6);
        assert_ne!(span_order(&a, &differs_in_score), Ordering::Equal);
    }
}
