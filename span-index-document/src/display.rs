//! Terminal rendering of an annotated document.
//!
//! Draws the text with one marker row per annotation underneath, aligned on
//! display columns:
//!
//! ```text
//! Rot wood cheeses dew?
//! ╰─╯ Token
//!     ╰──╯ Token
//! ```
//!
//! Intended for single-line documents (each marker row aligns against the
//! text as one line). Zero-width annotations render as a lone `╰` pointing
//! at their boundary.

use std::fmt::Write as _;

use span_index::{TypeHandle, TypeSystem};
use unicode_width::UnicodeWidthChar;

use crate::document::Document;

/// Display adapter for a document and a chosen set of annotation types.
pub struct DocumentDisplay<'a> {
    doc: &'a Document,
    include: Vec<TypeHandle>,
}

impl<'a> DocumentDisplay<'a> {
    /// Start with no types included; an empty inclusion list shows every
    /// annotation.
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            include: Vec::new(),
        }
    }

    /// Include annotations assignable to `ty`.
    pub fn include(&mut self, ty: TypeHandle) {
        self.include.push(ty);
    }

    /// Takes self
    pub fn with(mut self, ty: TypeHandle) -> Self {
        self.include(ty);
        self
    }

    fn included(&self, ty: TypeHandle) -> bool {
        self.include.is_empty()
            || self
                .include
                .iter()
                .any(|&wanted| self.doc.registry().is_subtype_of(ty, wanted))
    }

    /// Display width of the first `chars` characters of the text.
    fn column(&self, chars: i64) -> usize {
        self.doc
            .text()
            .chars()
            .take(chars.max(0) as usize)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}

impl std::fmt::Display for DocumentDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.doc.text())?;

        for ann in self.doc.index().select_all() {
            if !self.included(ann.ty) {
                continue;
            }

            f.write_char('\n')?;
            let start_col = self.column(ann.begin());
            let end_col = self.column(ann.end());
            for _ in 0..start_col {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            let name = self
                .doc
                .registry()
                .type_name(ann.ty)
                .unwrap_or("?");
            write!(f, " {}", name)?;
        }

        Ok(())
    }
}
