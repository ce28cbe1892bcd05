//! The selection engine: relational queries over the sorted index.
//!
//! Every operation binary-searches a start cursor into the queried type's
//! sorted sequence and then runs a bounded scan, using the ordering policy
//! for its early exit: once an entry's `begin` passes the query's upper
//! bound, nothing further in the sequence can match. Contexts processed in
//! index order therefore cost an amortized single pass instead of a rescan
//! per context.
//!
//! Results come back in ordering-policy order (document order) unless noted
//! otherwise. Empty results are ordinary values, not errors.

use crate::annotation::Annotation;
use crate::error::{QueryError, QueryResult};
use crate::index::{AnnotationIndex, Entry};
use crate::types::{TypeHandle, TypeSystem};

fn check_range(begin: i64, end: i64) -> QueryResult<()> {
    if begin > end {
        Err(QueryError::InvalidRange { begin, end })
    } else {
        Ok(())
    }
}

/// Index of the first entry whose `begin` is at least `bound`.
fn first_beginning_at(seq: &[Entry], bound: i64) -> usize {
    seq.partition_point(|entry| entry.key.begin < bound)
}

/// Index just past the last entry whose `begin` is at most `bound`.
fn after_beginning_through(seq: &[Entry], bound: i64) -> usize {
    seq.partition_point(|entry| entry.key.begin <= bound)
}

impl<S: TypeSystem> AnnotationIndex<S> {
    /// All annotations assignable to `ty`, in index order.
    pub fn select(&self, ty: TypeHandle) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        Ok(seq.iter().map(|entry| entry.ann).collect())
    }

    /// All annotations of every type, in index order.
    pub fn select_all(&self) -> Vec<Annotation> {
        self.all_entries().iter().map(|entry| entry.ann).collect()
    }

    /// Annotations of `ty` colocated with `[begin, end)`.
    pub fn select_at(&self, ty: TypeHandle, begin: i64, end: i64) -> QueryResult<Vec<Annotation>> {
        check_range(begin, end)?;
        let seq = self.checked_seq(ty)?;
        let mut out = Vec::new();
        for entry in &seq[first_beginning_at(seq, begin)..] {
            if entry.key.begin != begin {
                break;
            }
            if entry.key.end == end {
                out.push(entry.ann);
            }
        }
        Ok(out)
    }

    /// Annotations of `ty` covered by `context`'s span, excluding `context`
    /// itself. A different annotation colocated with the context is
    /// included, whatever its type.
    pub fn select_covered(
        &self,
        ty: TypeHandle,
        context: &Annotation,
    ) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        Ok(covered_scan(seq, context.begin(), context.end(), Some(context)))
    }

    /// Annotations of `ty` covered by the explicit span `[begin, end)`.
    pub fn select_covered_at(
        &self,
        ty: TypeHandle,
        begin: i64,
        end: i64,
    ) -> QueryResult<Vec<Annotation>> {
        check_range(begin, end)?;
        let seq = self.checked_seq(ty)?;
        Ok(covered_scan(seq, begin, end, None))
    }

    /// Annotations of `ty` whose span covers `context`'s span, excluding
    /// `context` itself.
    pub fn select_covering(
        &self,
        ty: TypeHandle,
        context: &Annotation,
    ) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        Ok(covering_scan(seq, context.begin(), context.end(), Some(context)))
    }

    /// Annotations of `ty` whose span covers the explicit `[begin, end)`.
    pub fn select_covering_at(
        &self,
        ty: TypeHandle,
        begin: i64,
        end: i64,
    ) -> QueryResult<Vec<Annotation>> {
        check_range(begin, end)?;
        let seq = self.checked_seq(ty)?;
        Ok(covering_scan(seq, begin, end, None))
    }

    /// Annotations of `ty` overlapping the selection `[begin, end)`.
    ///
    /// Touching is not overlapping: a zero-width selection sitting exactly
    /// at a candidate's end is excluded, as is a zero-width candidate
    /// sitting exactly at the selection's end — unless candidate and
    /// selection share their begin, which always matches. These are the
    /// reference semantics the adjacency queries depend on; they diverge
    /// deliberately from [`relation::overlaps`](crate::relation::overlaps)
    /// on exactly those two boundary cases.
    pub fn select_overlapping(
        &self,
        ty: TypeHandle,
        begin: i64,
        end: i64,
    ) -> QueryResult<Vec<Annotation>> {
        check_range(begin, end)?;
        let seq = self.checked_seq(ty)?;
        let mut out = Vec::new();
        for entry in seq {
            // Candidate fully right of the selection: nothing further can
            // match.
            if begin != entry.key.begin && entry.key.begin >= end {
                break;
            }
            // Candidate fully left of the selection.
            if begin != entry.key.begin && entry.key.end <= begin {
                continue;
            }
            out.push(entry.ann);
        }
        Ok(out)
    }

    /// The `count` nearest annotations of `ty` preceding `anchor`, in
    /// document order (the nearest is last).
    ///
    /// A zero-width annotation sitting exactly at the anchor's begin is
    /// preceding, even though it sorts *after* wider annotations starting
    /// there — the scan window runs through the whole equal-begin group.
    pub fn select_preceding(
        &self,
        ty: TypeHandle,
        anchor: &Annotation,
        count: usize,
    ) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        let anchor_begin = anchor.begin();
        let window = &seq[..after_beginning_through(seq, anchor_begin)];
        let mut out = Vec::new();
        for entry in window.iter().rev() {
            if out.len() == count {
                break;
            }
            if entry.ann.id == anchor.id {
                continue;
            }
            if entry.key.end <= anchor_begin {
                out.push(entry.ann);
            }
        }
        out.reverse();
        Ok(out)
    }

    /// The `count` nearest annotations of `ty` following `anchor`, in
    /// document order (the nearest is first).
    ///
    /// For a zero-width anchor, wider annotations starting at the anchor
    /// position count as following even though they sort before it.
    pub fn select_following(
        &self,
        ty: TypeHandle,
        anchor: &Annotation,
        count: usize,
    ) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        let anchor_end = anchor.end();
        let mut out = Vec::new();
        for entry in &seq[first_beginning_at(seq, anchor_end)..] {
            if out.len() == count {
                break;
            }
            if entry.ann.id == anchor.id {
                continue;
            }
            out.push(entry.ann);
        }
        Ok(out)
    }

    /// Annotations of `ty` lying in the gap between two bounding
    /// annotations. Either argument may come first in the document; the
    /// bounds themselves are never returned, zero-width annotations sitting
    /// exactly on a gap boundary are, and overlapping bounds yield an empty
    /// result.
    pub fn select_between(
        &self,
        ty: TypeHandle,
        first: &Annotation,
        second: &Annotation,
    ) -> QueryResult<Vec<Annotation>> {
        let seq = self.checked_seq(ty)?;
        let (left, right) = if first.end() > second.begin() {
            (second, first)
        } else {
            (first, second)
        };
        let from = left.end();
        let to = right.begin();
        if from > to {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for entry in &seq[first_beginning_at(seq, from)..] {
            if entry.key.begin > to {
                break;
            }
            if entry.key.end > to {
                continue;
            }
            if entry.ann.id == left.id || entry.ann.id == right.id {
                continue;
            }
            out.push(entry.ann);
        }
        Ok(out)
    }

    /// Positional access into the sorted sequence for `ty`. Negative
    /// positions count from the end (`-1` is the last annotation).
    /// Out-of-range positions are absent, never an error.
    pub fn select_by_index(
        &self,
        ty: TypeHandle,
        position: isize,
    ) -> QueryResult<Option<Annotation>> {
        let seq = self.checked_seq(ty)?;
        let len = seq.len() as isize;
        let at = if position < 0 { position + len } else { position };
        if at < 0 || at >= len {
            return Ok(None);
        }
        Ok(Some(seq[at as usize].ann))
    }

    /// The one annotation assignable to `ty`, or `AmbiguousResult` if there
    /// is not exactly one.
    pub fn select_single(&self, ty: TypeHandle) -> QueryResult<Annotation> {
        let seq = self.checked_seq(ty)?;
        match seq {
            [only] => Ok(only.ann),
            _ => Err(QueryError::AmbiguousResult {
                type_name: self.display_name(ty),
                found: seq.len(),
            }),
        }
    }

    /// The one annotation of `ty` colocated with `[begin, end)`, or
    /// `AmbiguousResult` if there is not exactly one.
    pub fn select_single_at(
        &self,
        ty: TypeHandle,
        begin: i64,
        end: i64,
    ) -> QueryResult<Annotation> {
        let found = self.select_at(ty, begin, end)?;
        match found.as_slice() {
            [only] => Ok(*only),
            _ => Err(QueryError::AmbiguousResult {
                type_name: self.display_name(ty),
                found: found.len(),
            }),
        }
    }

    /// Relative positional access around an anchor: negative positions
    /// address the nth nearest preceding annotation, positive the nth
    /// nearest following one. Position 0 is the anchor itself when its
    /// type is assignable to `ty`; otherwise, and for positions out of
    /// range, the result is absent.
    pub fn select_single_relative(
        &self,
        ty: TypeHandle,
        anchor: &Annotation,
        position: isize,
    ) -> QueryResult<Option<Annotation>> {
        if position == 0 {
            self.require_known(ty)?;
            if self.type_system().is_subtype_of(anchor.ty, ty) {
                return Ok(Some(*anchor));
            }
            return Ok(None);
        }
        if position < 0 {
            let wanted = position.unsigned_abs();
            let found = self.select_preceding(ty, anchor, wanted)?;
            if found.len() < wanted {
                return Ok(None);
            }
            // Nearest-first means counting from the back.
            Ok(Some(found[found.len() - wanted]))
        } else {
            let found = self.select_following(ty, anchor, position as usize)?;
            Ok(found.get(position as usize - 1).copied())
        }
    }

    /// Cursor over the annotations of `ty` beginning at or after `begin`,
    /// in index order. The raw primitive the bounded scans are built from.
    pub fn range_from(
        &self,
        ty: TypeHandle,
        begin: i64,
    ) -> QueryResult<impl Iterator<Item = &Annotation>> {
        let seq = self.checked_seq(ty)?;
        Ok(seq[first_beginning_at(seq, begin)..]
            .iter()
            .map(|entry| &entry.ann))
    }

    /// Cursor over the annotations of `ty` beginning at or before `bound`,
    /// in index order.
    pub fn range_until(
        &self,
        ty: TypeHandle,
        bound: i64,
    ) -> QueryResult<impl Iterator<Item = &Annotation>> {
        let seq = self.checked_seq(ty)?;
        Ok(seq[..after_beginning_through(seq, bound)]
            .iter()
            .map(|entry| &entry.ann))
    }

    /// True iff at least one annotation is assignable to `ty`.
    pub fn exists(&self, ty: TypeHandle) -> QueryResult<bool> {
        Ok(!self.checked_seq(ty)?.is_empty())
    }

    /// True iff `container` covers at least one annotation of `ty` other
    /// than itself. Short-circuits without materializing the covered list.
    pub fn contains(&self, ty: TypeHandle, container: &Annotation) -> QueryResult<bool> {
        let seq = self.checked_seq(ty)?;
        let to = container.end();
        for entry in &seq[first_beginning_at(seq, container.begin())..] {
            if entry.key.begin > to {
                break;
            }
            if entry.key.end <= to && entry.ann.id != container.id {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The single forward scan behind every covered-style query: start at the
/// first entry with `begin >= from`, stop once `begin` passes `to` (a
/// zero-width entry sitting exactly at `to` still qualifies), and keep the
/// entries that end inside the window.
fn covered_scan(seq: &[Entry], from: i64, to: i64, exclude: Option<&Annotation>) -> Vec<Annotation> {
    let mut out = Vec::new();
    for entry in &seq[first_beginning_at(seq, from)..] {
        if entry.key.begin > to {
            break;
        }
        if entry.key.end > to {
            continue;
        }
        if let Some(context) = exclude {
            if entry.ann.id == context.id {
                continue;
            }
        }
        out.push(entry.ann);
    }
    out
}

/// Leftward window for covering-style queries: every candidate must begin at
/// or before `from`, so the window is the prefix up to the last equal-begin
/// entry; within it, keeping the entries that end at or past `to` is exact.
fn covering_scan(seq: &[Entry], from: i64, to: i64, exclude: Option<&Annotation>) -> Vec<Annotation> {
    let mut out = Vec::new();
    for entry in &seq[..after_beginning_through(seq, from)] {
        if entry.key.end < to {
            continue;
        }
        if let Some(context) = exclude {
            if entry.ann.id == context.id {
                continue;
            }
        }
        out.push(entry.ann);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationId;
    use crate::span::Span;
    use crate::types::TypeRegistry;
    use std::sync::Arc;

    struct Fixture {
        index: AnnotationIndex<TypeRegistry>,
        token: TypeHandle,
        word: TypeHandle,
        sentence: TypeHandle,
        marker: TypeHandle,
        next_id: u64,
    }

    impl Fixture {
        fn new() -> Self {
            let mut registry = TypeRegistry::new();
            let token = registry.register("Token");
            let word = registry.register_subtype("Word", token);
            let sentence = registry.register("Sentence");
            let marker = registry.register("Marker");
            registry.set_priorities(&[sentence, token]);
            Self {
                index: AnnotationIndex::new(Arc::new(registry)),
                token,
                word,
                sentence,
                marker,
                next_id: 0,
            }
        }

        fn add(&mut self, ty: TypeHandle, begin: i64, end: i64) -> Annotation {
            self.next_id += 1;
            let ann = Annotation::new(AnnotationId(self.next_id), ty, Span::new(begin, end));
            self.index.insert(ann).unwrap();
            ann
        }
    }

    fn ids(annotations: &[Annotation]) -> Vec<u64> {
        annotations.iter().map(|ann| ann.id.0).collect()
    }

    #[test]
    fn select_folds_subtypes_into_the_queried_type() {
        let mut fx = Fixture::new();
        let t = fx.add(fx.token, 0, 3);
        let w = fx.add(fx.word, 4, 8);
        fx.add(fx.sentence, 0, 8);

        assert_eq!(ids(&fx.index.select(fx.token).unwrap()), vec![t.id.0, w.id.0]);
        assert_eq!(ids(&fx.index.select(fx.word).unwrap()), vec![w.id.0]);
        assert_eq!(fx.index.select_all().len(), 3);
    }

    #[test]
    fn select_rejects_foreign_handles() {
        let fx = Fixture::new();
        assert!(matches!(
            fx.index.select(TypeHandle(99)),
            Err(QueryError::UnknownType(_))
        ));
    }

    #[test]
    fn select_at_matches_exact_offsets_only() {
        let mut fx = Fixture::new();
        let exact = fx.add(fx.token, 4, 8);
        let exact_dup = fx.add(fx.token, 4, 8);
        fx.add(fx.token, 4, 9);
        fx.add(fx.token, 3, 8);

        let found = fx.index.select_at(fx.token, 4, 8).unwrap();
        assert_eq!(ids(&found), vec![exact.id.0, exact_dup.id.0]);
        assert!(fx.index.select_at(fx.token, 4, 7).unwrap().is_empty());
        assert_eq!(
            fx.index.select_at(fx.token, 8, 4),
            Err(QueryError::InvalidRange { begin: 8, end: 4 })
        );
    }

    #[test]
    fn select_covered_excludes_the_context_but_not_colocated_peers() {
        let mut fx = Fixture::new();
        let sentence = fx.add(fx.sentence, 0, 10);
        let inside = fx.add(fx.token, 2, 5);
        let colocated = fx.add(fx.token, 0, 10);
        fx.add(fx.token, 8, 12); // sticks out
        fx.add(fx.token, 12, 15); // fully outside

        let covered = fx.index.select_covered(fx.token, &sentence).unwrap();
        assert_eq!(ids(&covered), vec![colocated.id.0, inside.id.0]);

        // The context never returns itself, even when queried by its own
        // type; a colocated duplicate of the same type does.
        let twin = fx.add(fx.sentence, 0, 10);
        let covered = fx.index.select_covered(fx.sentence, &sentence).unwrap();
        assert_eq!(ids(&covered), vec![twin.id.0]);
    }

    #[test]
    fn select_covered_includes_zero_width_on_both_boundaries() {
        let mut fx = Fixture::new();
        let sentence = fx.add(fx.sentence, 5, 10);
        let at_start = fx.add(fx.marker, 5, 5);
        let at_end = fx.add(fx.marker, 10, 10);
        fx.add(fx.marker, 4, 4);
        fx.add(fx.marker, 11, 11);

        let covered = fx.index.select_covered(fx.marker, &sentence).unwrap();
        assert_eq!(ids(&covered), vec![at_start.id.0, at_end.id.0]);
    }

    #[test]
    fn select_covering_walks_outward() {
        let mut fx = Fixture::new();
        let outer = fx.add(fx.sentence, 0, 20);
        let mid = fx.add(fx.sentence, 2, 12);
        fx.add(fx.sentence, 3, 6); // too short
        fx.add(fx.sentence, 5, 20); // starts too late
        let inner = fx.add(fx.token, 4, 9);

        let covering = fx.index.select_covering(fx.sentence, &inner).unwrap();
        assert_eq!(ids(&covering), vec![outer.id.0, mid.id.0]);

        // Colocated spans cover each other; self-identity is excluded.
        let twin = fx.add(fx.token, 4, 9);
        let covering = fx.index.select_covering(fx.token, &inner).unwrap();
        assert_eq!(ids(&covering), vec![twin.id.0]);
    }

    #[test]
    fn select_overlapping_touching_is_not_overlapping() {
        let mut fx = Fixture::new();
        let a = fx.add(fx.token, 0, 5);
        let b = fx.add(fx.token, 3, 8);
        let c = fx.add(fx.token, 8, 12);

        // [5,8) touches a at 5 and c at 8: only b overlaps.
        assert_eq!(
            ids(&fx.index.select_overlapping(fx.token, 5, 8).unwrap()),
            vec![b.id.0]
        );
        // Proper intersection on both sides.
        assert_eq!(
            ids(&fx.index.select_overlapping(fx.token, 4, 9).unwrap()),
            vec![a.id.0, b.id.0, c.id.0]
        );
    }

    #[test]
    fn select_overlapping_zero_width_boundary_rules() {
        let mut fx = Fixture::new();
        let wide = fx.add(fx.token, 5, 10);
        let point_at_end = fx.add(fx.marker, 10, 10);

        // Zero-width selection at a candidate's end touches, but one at its
        // begin overlaps.
        assert!(fx.index.select_overlapping(fx.token, 10, 10).unwrap().is_empty());
        assert_eq!(
            ids(&fx.index.select_overlapping(fx.token, 5, 5).unwrap()),
            vec![wide.id.0]
        );

        // A zero-width candidate at the selection's end touches...
        assert!(fx
            .index
            .select_overlapping(fx.marker, 7, 10)
            .unwrap()
            .is_empty());
        // ...but an equal-begin selection always matches, even zero-width
        // against zero-width.
        assert_eq!(
            ids(&fx.index.select_overlapping(fx.marker, 10, 12).unwrap()),
            vec![point_at_end.id.0]
        );
        assert_eq!(
            ids(&fx.index.select_overlapping(fx.marker, 10, 10).unwrap()),
            vec![point_at_end.id.0]
        );
    }

    #[test]
    fn select_preceding_returns_document_order() {
        let mut fx = Fixture::new();
        let first = fx.add(fx.token, 0, 3);
        let second = fx.add(fx.token, 4, 8);
        let third = fx.add(fx.token, 9, 12);
        let anchor = fx.add(fx.sentence, 12, 20);
        fx.add(fx.token, 10, 14); // overlaps the anchor: not preceding

        let preceding = fx.index.select_preceding(fx.token, &anchor, 2).unwrap();
        assert_eq!(ids(&preceding), vec![second.id.0, third.id.0]);

        let all = fx.index.select_preceding(fx.token, &anchor, 10).unwrap();
        assert_eq!(ids(&all), vec![first.id.0, second.id.0, third.id.0]);
    }

    #[test]
    fn select_preceding_sees_zero_width_at_anchor_begin() {
        let mut fx = Fixture::new();
        let anchor = fx.add(fx.sentence, 10, 20);
        let point = fx.add(fx.marker, 10, 10);
        fx.add(fx.marker, 10, 12); // starts with the anchor but extends in

        let preceding = fx.index.select_preceding(fx.marker, &anchor, 5).unwrap();
        assert_eq!(ids(&preceding), vec![point.id.0]);
    }

    #[test]
    fn select_following_from_a_zero_width_anchor() {
        let mut fx = Fixture::new();
        let anchor = fx.add(fx.marker, 10, 10);
        let wide_at_anchor = fx.add(fx.token, 10, 15);
        let later = fx.add(fx.token, 12, 16);
        fx.add(fx.token, 5, 10); // ends at the anchor: not following

        let following = fx.index.select_following(fx.token, &anchor, 5).unwrap();
        assert_eq!(ids(&following), vec![wide_at_anchor.id.0, later.id.0]);
    }

    #[test]
    fn select_following_caps_at_count() {
        let mut fx = Fixture::new();
        let anchor = fx.add(fx.sentence, 0, 4);
        let a = fx.add(fx.token, 4, 6);
        let b = fx.add(fx.token, 6, 9);
        fx.add(fx.token, 9, 12);
        fx.add(fx.token, 2, 7); // overlaps the anchor: not following

        let following = fx.index.select_following(fx.token, &anchor, 2).unwrap();
        assert_eq!(ids(&following), vec![a.id.0, b.id.0]);
    }

    #[test]
    fn select_between_works_in_either_argument_order() {
        let mut fx = Fixture::new();
        let left = fx.add(fx.sentence, 0, 4);
        let right = fx.add(fx.sentence, 10, 14);
        let inside = fx.add(fx.token, 5, 9);
        fx.add(fx.token, 3, 6); // overlaps the left bound
        fx.add(fx.token, 8, 12); // overlaps the right bound

        assert_eq!(
            ids(&fx.index.select_between(fx.token, &left, &right).unwrap()),
            vec![inside.id.0]
        );
        assert_eq!(
            ids(&fx.index.select_between(fx.token, &right, &left).unwrap()),
            vec![inside.id.0]
        );
    }

    #[test]
    fn select_between_gap_boundaries_and_overlap() {
        let mut fx = Fixture::new();
        let left = fx.add(fx.sentence, 1, 2);
        let right = fx.add(fx.sentence, 2, 3);
        let point = fx.add(fx.marker, 2, 2);

        // A zero-width annotation on the shared border is in the gap.
        assert_eq!(
            ids(&fx.index.select_between(fx.marker, &left, &right).unwrap()),
            vec![point.id.0]
        );

        // Overlapping bounds have no gap.
        let a = fx.add(fx.sentence, 0, 10);
        let b = fx.add(fx.sentence, 5, 15);
        assert!(fx.index.select_between(fx.token, &a, &b).unwrap().is_empty());
    }

    #[test]
    fn select_by_index_counts_from_either_end() {
        let mut fx = Fixture::new();
        let anns: Vec<_> = (0..4).map(|i| fx.add(fx.token, i * 10, i * 10 + 5)).collect();

        let by_pos = fx.index.select_by_index(fx.token, 3).unwrap();
        let by_neg = fx.index.select_by_index(fx.token, -1).unwrap();
        assert_eq!(by_pos, Some(anns[3]));
        assert_eq!(by_pos, by_neg);
        assert_eq!(fx.index.select_by_index(fx.token, 0).unwrap(), Some(anns[0]));
        assert_eq!(fx.index.select_by_index(fx.token, 4).unwrap(), None);
        assert_eq!(fx.index.select_by_index(fx.token, -5).unwrap(), None);
    }

    #[test]
    fn select_single_demands_exactly_one() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.index.select_single(fx.token),
            Err(QueryError::AmbiguousResult {
                type_name: "Token".to_string(),
                found: 0,
            })
        );

        let only = fx.add(fx.token, 0, 3);
        assert_eq!(fx.index.select_single(fx.token), Ok(only));

        fx.add(fx.token, 4, 8);
        assert_eq!(
            fx.index.select_single(fx.token),
            Err(QueryError::AmbiguousResult {
                type_name: "Token".to_string(),
                found: 2,
            })
        );
    }

    #[test]
    fn select_single_at_filters_before_counting() {
        let mut fx = Fixture::new();
        let at = fx.add(fx.token, 0, 3);
        fx.add(fx.token, 4, 8);
        assert_eq!(fx.index.select_single_at(fx.token, 0, 3), Ok(at));
        assert!(matches!(
            fx.index.select_single_at(fx.token, 9, 12),
            Err(QueryError::AmbiguousResult { found: 0, .. })
        ));
    }

    #[test]
    fn select_single_relative_addresses_both_directions() {
        let mut fx = Fixture::new();
        let before2 = fx.add(fx.token, 0, 2);
        let before1 = fx.add(fx.token, 3, 5);
        let anchor = fx.add(fx.word, 5, 9);
        let after1 = fx.add(fx.token, 9, 11);
        let after2 = fx.add(fx.token, 12, 14);

        let index = &fx.index;
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, -1).unwrap(),
            Some(before1)
        );
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, -2).unwrap(),
            Some(before2)
        );
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, 1).unwrap(),
            Some(after1)
        );
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, 2).unwrap(),
            Some(after2)
        );
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, 3).unwrap(),
            None
        );
        // Position 0 returns the anchor only under an assignable type.
        assert_eq!(
            index.select_single_relative(fx.token, &anchor, 0).unwrap(),
            Some(anchor)
        );
        assert_eq!(
            index.select_single_relative(fx.sentence, &anchor, 0).unwrap(),
            None
        );
    }

    #[test]
    fn range_cursors_bound_the_scan_window() {
        let mut fx = Fixture::new();
        fx.add(fx.token, 0, 3);
        let b = fx.add(fx.token, 4, 8);
        let c = fx.add(fx.token, 9, 12);

        let from: Vec<_> = fx.index.range_from(fx.token, 4).unwrap().copied().collect();
        assert_eq!(ids(&from), vec![b.id.0, c.id.0]);

        let until: Vec<_> = fx.index.range_until(fx.token, 4).unwrap().copied().collect();
        assert_eq!(ids(&until), vec![1, b.id.0]);
    }

    #[test]
    fn exists_and_contains_short_circuit() {
        let mut fx = Fixture::new();
        assert!(!fx.index.exists(fx.token).unwrap());

        let sentence = fx.add(fx.sentence, 0, 10);
        assert!(!fx.index.contains(fx.token, &sentence).unwrap());

        fx.add(fx.token, 2, 5);
        assert!(fx.index.exists(fx.token).unwrap());
        assert!(fx.index.contains(fx.token, &sentence).unwrap());
        // A container never contains just itself.
        assert!(!fx.index.contains(fx.sentence, &sentence).unwrap());
    }
}
