//! Motor de gramática
//!
//! Proporciona tokenización, segmentación y análisis gramatical basado en reglas.

pub mod analyzer;
pub mod diagnostic;
pub mod document;
pub mod rules;
pub mod tokenizer;

pub use analyzer::GrammarAnalyzer;
pub use diagnostic::{Diagnostic, Position, Report};
pub use document::Document;
pub use rules::{GrammarRule, RuleEngine};
pub use tokenizer::{Token, TokenType, Tokenizer};
