//! Localización de la palabra que sigue al artículo

use crate::grammar::Token;

/// Puntuación que puede mediar entre el artículo y la palabra: "a 'unicorn'"
const IGNORED_PUNCTUATION: &[&str] = &[
    "\u{201C}", "\u{201D}", "\u{2018}", "\u{2019}", "'", "\"", "(", ")", "[", "]",
];

fn is_ignored_punctuation(token: &Token) -> bool {
    token.is_punctuation() && IGNORED_PUNCTUATION.contains(&token.text.as_str())
}

/// Devuelve la palabra que sigue a `siblings[index]`.
///
/// Solo cuenta el patrón blanco + palabra, con a lo sumo un signo ignorable
/// entre ambos. "a," o "a-" no tienen palabra siguiente.
pub fn following_word(siblings: &[Token], index: usize) -> Option<&Token> {
    let mut position = index + 1;

    if !siblings.get(position)?.is_whitespace() {
        return None;
    }
    position += 1;

    if siblings.get(position).is_some_and(is_ignored_punctuation) {
        position += 1;
    }

    siblings.get(position).filter(|token| token.is_word())
}
