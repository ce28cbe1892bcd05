//! The span-relation algebra: pure predicates over two half-open intervals.
//!
//! Boundary-touching zero-width spans are classified *inclusively*: a point
//! sitting exactly at an interval's start is simultaneously preceding,
//! overlapping, covered, and beginning-with that interval; a point at the end
//! is simultaneously following, overlapping, covered, and ending-with it.
//! Two coincident points stand in every relation except the partial overlaps.
//! This non-exclusivity is what lets adjacency queries retrieve a zero-width
//! marker sitting exactly on a boundary while containment queries still see
//! it as contained.

use crate::span::Span;

/// `a` and `b` share both begin and end.
pub fn colocated(a: Span, b: Span) -> bool {
    a.begin == b.begin && a.end == b.end
}

/// `a` lies entirely at or before the start of `b`. Touching counts.
pub fn precedes(a: Span, b: Span) -> bool {
    a.end <= b.begin
}

/// `a` lies entirely at or after the end of `b`. Touching counts.
pub fn follows(a: Span, b: Span) -> bool {
    precedes(b, a)
}

/// `a`'s interval contains `b`'s, inclusive of equality.
pub fn covers(a: Span, b: Span) -> bool {
    a.begin <= b.begin && b.end <= a.end
}

/// `b`'s interval contains `a`'s, inclusive of equality.
pub fn covered_by(a: Span, b: Span) -> bool {
    covers(b, a)
}

/// The two spans occupy common ground: either one covers the other or their
/// interiors properly intersect. The covers clauses are what give boundary
/// zero-width spans their inclusive classification.
pub fn overlaps(a: Span, b: Span) -> bool {
    covers(a, b) || covers(b, a) || (a.begin < b.end && b.begin < a.end)
}

/// `a` starts before `b` and ends inside it (overlapping-at-begin).
pub fn overlaps_left(a: Span, b: Span) -> bool {
    a.begin < b.begin && b.begin < a.end && a.end < b.end
}

/// `a` starts inside `b` and ends after it (overlapping-at-end).
pub fn overlaps_right(a: Span, b: Span) -> bool {
    b.begin < a.begin && a.begin < b.end && b.end < a.end
}

/// Shared start offset, any end.
pub fn beginning_with(a: Span, b: Span) -> bool {
    a.begin == b.begin
}

/// Shared end offset, any begin.
pub fn ending_with(a: Span, b: Span) -> bool {
    a.end == b.end
}

/// Synonym for [`precedes`], phrased from `a`'s perspective.
pub fn left_of(a: Span, b: Span) -> bool {
    precedes(a, b)
}

/// Synonym for [`follows`], phrased from `a`'s perspective.
pub fn right_of(a: Span, b: Span) -> bool {
    follows(a, b)
}
