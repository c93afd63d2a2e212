//! NLP boundary: tokenization and entity spans
//!
//! The extraction pipeline consumes a token sequence and labeled entity
//! spans. In the full system these come from an external NLP model; the
//! adapters here produce the same interface from plain text.

pub mod entities;
pub mod tokenizer;

pub use entities::{EntitySpan, RuleEntityTagger, EDUCATION_LABEL};
pub use tokenizer::Tokenizer;
