//! In-memory indexing and relational querying over typed text spans.
//!
//! Annotations are immutable half-open intervals `[begin, end)` attached to
//! one document, each carrying a type resolved through an external
//! [`TypeSystem`]. The [`AnnotationIndex`] keeps them sorted under a total
//! ordering policy (begin ascending, end descending, type priority,
//! insertion sequence), which is what lets every selection operation
//! binary-search a start cursor and scan only a bounded neighborhood
//! instead of comparing pairwise.
//!
//! ## Core pieces
//!
//! - [`Span`] / [`relation`] — the interval value type and the pure
//!   relation algebra over pairs of spans, including the inclusive
//!   zero-width boundary rules.
//! - [`TypeSystem`] / [`TypeRegistry`] — the externally supplied type
//!   hierarchy and priority order.
//! - [`AnnotationIndex`] — per-type and all-types sorted sequences, with
//!   the full `select*` query family.
//! - [`ContainmentIndex`] / [`index_covered`] / [`index_covering`] —
//!   precomputed covered/covering snapshots for bulk containment queries.
//!
//! ## Example
//!
//! ```
//! use span_index::{Annotation, AnnotationId, AnnotationIndex, Span, TypeRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = TypeRegistry::new();
//! let sentence = registry.register("Sentence");
//! let token = registry.register("Token");
//! registry.set_priorities(&[sentence, token]);
//!
//! let mut index = AnnotationIndex::new(Arc::new(registry));
//! let s = Annotation::new(AnnotationId(1), sentence, Span::new(0, 8));
//! index.insert(s).unwrap();
//! index
//!     .insert(Annotation::new(AnnotationId(2), token, Span::new(0, 3)))
//!     .unwrap();
//! index
//!     .insert(Annotation::new(AnnotationId(3), token, Span::new(4, 8)))
//!     .unwrap();
//!
//! let covered = index.select_covered(token, &s).unwrap();
//! assert_eq!(covered.len(), 2);
//! ```
//!
//! Indexes are single-threaded per document; containment snapshots are
//! immutable and freely shareable.

mod annotation;
mod containment;
mod error;
mod index;
mod order;
pub mod relation;
mod select;
mod span;
mod types;

pub use annotation::{Annotation, AnnotationId};
pub use containment::{index_covered, index_covering, ContainmentIndex, Direction};
pub use error::{QueryError, QueryResult};
pub use index::AnnotationIndex;
pub use span::Span;
pub use types::{TypeHandle, TypeRegistry, TypeSystem};
