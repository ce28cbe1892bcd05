//! Precomputed containment snapshots between two annotation types.
//!
//! Answering "for every sentence, its tokens" through repeated
//! [`select_covered`](crate::AnnotationIndex::select_covered) calls costs a
//! scan per sentence. A [`ContainmentIndex`] instead merges the two sorted
//! sequences once: a single pass carries the set of still-open containers
//! alongside the contained cursor, so the whole bidirectional map costs one
//! linear sweep.
//!
//! Snapshots are immutable. Mutating the annotation index afterwards does
//! not update them, and staleness is not detected — rebuild after removal.
//! Being plain owned data, a snapshot can be shared and read from any
//! number of threads.

use std::collections::HashMap;

use crate::annotation::{Annotation, AnnotationId};
use crate::error::QueryResult;
use crate::index::{AnnotationIndex, Entry};
use crate::types::{TypeHandle, TypeSystem};

/// Which direction(s) of the containment relation a snapshot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Container -> covered annotations only.
    Covered,
    /// Contained -> covering annotations only.
    Covering,
    /// Both directions.
    Both,
}

/// A point-in-time bidirectional covered/covering map between a container
/// type and a contained type.
#[derive(Debug)]
pub struct ContainmentIndex {
    direction: Direction,
    covered: HashMap<AnnotationId, Vec<Annotation>>,
    covering: HashMap<AnnotationId, Vec<Annotation>>,
}

impl ContainmentIndex {
    /// Build a snapshot from the index's current state.
    ///
    /// Covers is inclusive of equal spans; an annotation never covers
    /// itself. Both map directions list their annotations in index order.
    pub fn build<S: TypeSystem>(
        index: &AnnotationIndex<S>,
        container_ty: TypeHandle,
        contained_ty: TypeHandle,
        direction: Direction,
    ) -> QueryResult<Self> {
        let containers = index.checked_seq(container_ty)?;
        let contained = index.checked_seq(contained_ty)?;

        let mut covered: HashMap<AnnotationId, Vec<Annotation>> = HashMap::new();
        let mut covering: HashMap<AnnotationId, Vec<Annotation>> = HashMap::new();
        merge(containers, contained, |container, inner| {
            if matches!(direction, Direction::Covered | Direction::Both) {
                covered.entry(container.id).or_default().push(inner);
            }
            if matches!(direction, Direction::Covering | Direction::Both) {
                covering.entry(inner.id).or_default().push(container);
            }
        });

        Ok(Self {
            direction,
            covered,
            covering,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The contained annotations covered by `container` at build time.
    /// Empty for containers that covered nothing (or for a snapshot built
    /// without the covered direction).
    pub fn covered(&self, container: &Annotation) -> &[Annotation] {
        self.covered
            .get(&container.id)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// The containers covering `contained` at build time.
    pub fn covering(&self, contained: &Annotation) -> &[Annotation] {
        self.covering
            .get(&contained.id)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// True iff the snapshot recorded `container` covering `contained`.
    pub fn is_covering(&self, container: &Annotation, contained: &Annotation) -> bool {
        match self.direction {
            Direction::Covered | Direction::Both => self
                .covered(container)
                .iter()
                .any(|ann| ann.id == contained.id),
            Direction::Covering => self
                .covering(contained)
                .iter()
                .any(|ann| ann.id == container.id),
        }
    }
}

/// Map every container annotation of `container_ty` to the `contained_ty`
/// annotations it covers, in one merge pass. Every container appears as a
/// key, with an empty list when it covers nothing.
pub fn index_covered<S: TypeSystem>(
    index: &AnnotationIndex<S>,
    container_ty: TypeHandle,
    contained_ty: TypeHandle,
) -> QueryResult<HashMap<Annotation, Vec<Annotation>>> {
    let containers = index.checked_seq(container_ty)?;
    let contained = index.checked_seq(contained_ty)?;

    let mut map: HashMap<Annotation, Vec<Annotation>> = containers
        .iter()
        .map(|entry| (entry.ann, Vec::new()))
        .collect();
    merge(containers, contained, |container, inner| {
        if let Some(list) = map.get_mut(&container) {
            list.push(inner);
        }
    });
    Ok(map)
}

/// Map every `contained_ty` annotation to the `container_ty` annotations
/// covering it, in one merge pass. Every contained annotation appears as a
/// key, with an empty list when nothing covers it.
pub fn index_covering<S: TypeSystem>(
    index: &AnnotationIndex<S>,
    contained_ty: TypeHandle,
    container_ty: TypeHandle,
) -> QueryResult<HashMap<Annotation, Vec<Annotation>>> {
    let containers = index.checked_seq(container_ty)?;
    let contained = index.checked_seq(contained_ty)?;

    let mut map: HashMap<Annotation, Vec<Annotation>> = contained
        .iter()
        .map(|entry| (entry.ann, Vec::new()))
        .collect();
    merge(containers, contained, |container, inner| {
        if let Some(list) = map.get_mut(&inner) {
            list.push(container);
        }
    });
    Ok(map)
}

/// Two-pointer merge of a container sequence and a contained sequence.
///
/// Walks the contained sequence once, pulling containers into an "open"
/// working set as their begins are reached and dropping them once their end
/// falls behind the contained cursor. `emit(container, contained)` fires
/// for every covering pair, container side in index order. Identity pairs
/// are skipped — an annotation listed under both types never covers itself.
fn merge<F: FnMut(Annotation, Annotation)>(containers: &[Entry], contained: &[Entry], mut emit: F) {
    let mut open: Vec<Entry> = Vec::new();
    let mut next_container = 0;
    for inner in contained {
        while next_container < containers.len()
            && containers[next_container].key.begin <= inner.key.begin
        {
            open.push(containers[next_container]);
            next_container += 1;
        }
        // A container that ends before this begin can never cover anything
        // later in the sequence either.
        open.retain(|container| container.key.end >= inner.key.begin);
        for container in &open {
            if inner.key.end <= container.key.end && container.ann.id != inner.ann.id {
                emit(container.ann, inner.ann);
            }
        }
    }
}
