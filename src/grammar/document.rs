//! Segmentación del texto en párrafos y oraciones
//!
//! Cada oración es una secuencia de tokens hermanos: los índices que reciben
//! las reglas son posiciones dentro de esa secuencia.

use std::ops::Range;

use super::tokenizer::{Token, TokenType, Tokenizer};

/// Documento tokenizado y segmentado
#[derive(Debug, Clone)]
pub struct Document {
    tokens: Vec<Token>,
    paragraphs: Vec<Range<usize>>,
    sentences: Vec<Range<usize>>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self::from_tokens(Tokenizer::new().tokenize(text))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut paragraphs = Vec::new();
        let mut sentences = Vec::new();

        for paragraph in split_paragraphs(&tokens) {
            sentences.extend(split_sentences(&tokens, paragraph.clone()));
            paragraphs.push(paragraph);
        }

        Self {
            tokens,
            paragraphs,
            sentences,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Itera las oraciones en orden de lectura
    pub fn sentences(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.sentences.iter().map(|range| &self.tokens[range.clone()])
    }
}

/// Un blanco con dos o más saltos de línea separa párrafos
fn is_paragraph_break(token: &Token) -> bool {
    token.token_type == TokenType::Whitespace && token.text.matches('\n').count() >= 2
}

fn is_terminal(token: &Token) -> bool {
    token.token_type == TokenType::Punctuation
        && token.text.chars().all(|c| matches!(c, '.' | '!' | '?' | '\u{2026}'))
}

fn is_closing(token: &Token) -> bool {
    token.token_type == TokenType::Punctuation
        && matches!(
            token.text.as_str(),
            "\"" | "'" | ")" | "]" | "}" | "\u{201D}" | "\u{2019}" | "»"
        )
}

fn starts_lowercase(token: &Token) -> bool {
    token.is_word() && token.text.chars().next().is_some_and(char::is_lowercase)
}

/// Recorta los blancos de los extremos de un rango
fn trim(tokens: &[Token], mut range: Range<usize>) -> Range<usize> {
    while range.start < range.end && tokens[range.start].is_whitespace() {
        range.start += 1;
    }
    while range.end > range.start && tokens[range.end - 1].is_whitespace() {
        range.end -= 1;
    }
    range
}

fn split_paragraphs(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut paragraphs = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if is_paragraph_break(token) {
            paragraphs.push(start..i);
            start = i + 1;
        }
    }
    paragraphs.push(start..tokens.len());

    paragraphs
        .into_iter()
        .map(|range| trim(tokens, range))
        .filter(|range| !range.is_empty())
        .collect()
}

fn split_sentences(tokens: &[Token], paragraph: Range<usize>) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = paragraph.start;
    let mut i = paragraph.start;

    while i < paragraph.end {
        if !is_terminal(&tokens[i]) {
            i += 1;
            continue;
        }

        // Comillas y paréntesis de cierre pegados al signo final
        let mut end = i + 1;
        while end < paragraph.end && is_closing(&tokens[end]) {
            end += 1;
        }

        if end == paragraph.end {
            break;
        }
        if !tokens[end].is_whitespace() {
            i = end;
            continue;
        }

        // "e.g. a unicorn": una minúscula tras el punto no abre oración
        let next = tokens[end..paragraph.end]
            .iter()
            .find(|t| !t.is_whitespace());
        if next.is_some_and(starts_lowercase) {
            i = end;
            continue;
        }

        sentences.push(start..end);
        start = end;
        i = end;
    }
    sentences.push(start..paragraph.end);

    sentences
        .into_iter()
        .map(|range| trim(tokens, range))
        .filter(|range| !range.is_empty())
        .collect()
}
