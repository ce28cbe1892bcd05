//! Tokenizers: annotate a document's text with token spans.
//!
//! Both tokenizers index their annotations as they go and return them in
//! document order. Offsets are character offsets, matching the document's
//! addressing.

use span_index::{Annotation, QueryResult, TypeHandle};
use unicode_segmentation::UnicodeSegmentation;

use crate::document::Document;

/// Annotate maximal runs of non-whitespace characters.
///
/// Punctuation stays attached to its word (`"dew?"` is one token), which is
/// the splitting most whitespace-delimited corpora expect.
pub fn annotate_space_tokens(doc: &mut Document, ty: TypeHandle) -> QueryResult<Vec<Annotation>> {
    let text = doc.text().to_string();
    let mut tokens = Vec::new();
    let mut start: Option<i64> = None;
    let mut offset: i64 = 0;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(doc.annotate(ty, begin, offset)?);
            }
        } else if start.is_none() {
            start = Some(offset);
        }
        offset += 1;
    }
    if let Some(begin) = start {
        tokens.push(doc.annotate(ty, begin, offset)?);
    }
    Ok(tokens)
}

/// Annotate Unicode word boundaries (UAX #29), one annotation per
/// non-whitespace segment. Punctuation becomes its own token.
pub fn annotate_word_tokens(doc: &mut Document, ty: TypeHandle) -> QueryResult<Vec<Annotation>> {
    let text = doc.text().to_string();
    let mut tokens = Vec::new();
    let mut offset: i64 = 0;
    for segment in text.split_word_bounds() {
        let chars = segment.chars().count() as i64;
        if !segment.chars().all(char::is_whitespace) {
            tokens.push(doc.annotate(ty, offset, offset + chars)?);
        }
        offset += chars;
    }
    Ok(tokens)
}
