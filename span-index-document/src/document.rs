//! The document: text plus the annotation index over it.
//!
//! A [`Document`] owns the backing text and the index, mints annotation
//! identities, and runs the add-to-indexes / remove-from-indexes lifecycle.
//! Annotation offsets address *characters*, not bytes, so multi-byte text
//! behaves the same as ASCII.

use std::sync::Arc;

use span_index::{
    Annotation, AnnotationId, AnnotationIndex, QueryError, QueryResult, Span, TypeHandle,
    TypeRegistry,
};

/// One document (a single view): the text, its annotation index, and the
/// identity counter for annotations created against it.
///
/// Documents are single-threaded; process independent documents on
/// independent threads freely.
pub struct Document {
    text: String,
    registry: Arc<TypeRegistry>,
    index: AnnotationIndex<TypeRegistry>,
    next_id: u64,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("text_len", &self.text.len())
            .field("annotations", &self.index.len())
            .finish()
    }
}

impl Document {
    /// Create a document over `text` using an already-configured registry.
    ///
    /// Register types and declare priorities before wrapping the registry
    /// in an `Arc`; the index resolves priority ranks at insert time.
    pub fn new(text: impl Into<String>, registry: Arc<TypeRegistry>) -> Self {
        let index = AnnotationIndex::new(Arc::clone(&registry));
        Self {
            text: text.into(),
            registry,
            index,
            next_id: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters (the unit annotation offsets use).
    pub fn char_len(&self) -> i64 {
        self.text.chars().count() as i64
    }

    /// The index over this document, carrying the full selection API.
    pub fn index(&self) -> &AnnotationIndex<TypeRegistry> {
        &self.index
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Mint a new annotation without indexing it.
    pub fn create_annotation(
        &mut self,
        ty: TypeHandle,
        begin: i64,
        end: i64,
    ) -> QueryResult<Annotation> {
        if begin > end {
            return Err(QueryError::InvalidRange { begin, end });
        }
        self.next_id += 1;
        Ok(Annotation::new(
            AnnotationId(self.next_id),
            ty,
            Span::new(begin, end),
        ))
    }

    /// Add a previously created annotation to the index.
    pub fn add_to_indexes(&mut self, ann: Annotation) -> QueryResult<()> {
        self.index.insert(ann)
    }

    /// Remove an annotation from the index. Returns whether it was present.
    ///
    /// Removal invalidates any containment snapshot built earlier — those
    /// are point-in-time maps and must be rebuilt.
    pub fn remove_from_indexes(&mut self, ann: &Annotation) -> bool {
        self.index.remove(ann)
    }

    /// Create an annotation and index it in one step.
    pub fn annotate(&mut self, ty: TypeHandle, begin: i64, end: i64) -> QueryResult<Annotation> {
        let ann = self.create_annotation(ty, begin, end)?;
        self.add_to_indexes(ann)?;
        Ok(ann)
    }

    /// The text under an annotation's span. Offsets beyond the text clamp
    /// to its bounds; zero-width spans cover the empty string.
    pub fn covered_text(&self, ann: &Annotation) -> &str {
        let begin = self.byte_offset(ann.begin());
        let end = self.byte_offset(ann.end());
        if begin >= end {
            return "";
        }
        &self.text[begin..end]
    }

    /// The covered text of each annotation, in the given order.
    pub fn to_text(&self, annotations: &[Annotation]) -> Vec<String> {
        annotations
            .iter()
            .map(|ann| self.covered_text(ann).to_string())
            .collect()
    }

    fn byte_offset(&self, char_offset: i64) -> usize {
        if char_offset <= 0 {
            return 0;
        }
        self.text
            .char_indices()
            .nth(char_offset as usize)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
