//! Document-level layer for `span-index`.
//!
//! The core crate indexes and queries annotations but never touches text.
//! This crate supplies the document collaborator: a container owning the
//! text and the index, tokenizers that produce token annotations, and a
//! terminal rendering of annotated text.
//!
//! ## Example
//!
//! ```
//! use span_index_document::{annotate_space_tokens, Document};
//! use span_index::TypeRegistry;
//! use std::sync::Arc;
//!
//! let mut registry = TypeRegistry::new();
//! let token = registry.register("Token");
//!
//! let mut doc = Document::new("Rot wood cheeses dew?", Arc::new(registry));
//! let tokens = annotate_space_tokens(&mut doc, token).unwrap();
//! assert_eq!(doc.to_text(&tokens), vec!["Rot", "wood", "cheeses", "dew?"]);
//! ```

mod display;
mod document;
mod tokenize;

pub use display::DocumentDisplay;
pub use document::Document;
pub use tokenize::{annotate_space_tokens, annotate_word_tokens};
