//! Filtro de candidatura
//!
//! Decide si una aparición de "a"/"an" es realmente un artículo que deba
//! revisarse, antes de mirar la palabra siguiente.

use crate::grammar::Token;

use super::SkipReason;

/// Conjunciones que indican enumeración de letras: "a and b"
const JOINERS: &[&str] = &["and", "or", "nor"];

/// Artículo indefinido observado en el texto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article<'a> {
    pub text: &'a str,
    /// "an"/"An" en lugar de "a"/"A"
    pub is_an: bool,
    /// El texto no está en minúsculas ("A", "An")
    pub capitalized: bool,
}

impl<'a> Article<'a> {
    /// Devuelve `None` si `text` no es "a" ni "an" (sin distinguir mayúsculas)
    pub fn parse(text: &'a str) -> Option<Self> {
        let normal = text.to_lowercase();
        if normal != "a" && normal != "an" {
            return None;
        }
        Some(Self {
            text,
            is_an: text.chars().count() != 1,
            capitalized: normal != text,
        })
    }
}

/// ¿No hay ninguna palabra antes de `index` en la oración?
pub fn is_first_word(siblings: &[Token], index: usize) -> bool {
    !siblings[..index].iter().any(Token::is_word)
}

/// "Station A equals 10.": una "A" mayúscula fuera del inicio de oración
/// es una etiqueta, no un artículo
pub fn check_label(
    article: &Article<'_>,
    siblings: &[Token],
    index: usize,
) -> Result<(), SkipReason> {
    if article.capitalized && !article.is_an && !is_first_word(siblings, index) {
        return Err(SkipReason::LetterLabel);
    }
    Ok(())
}

/// "a and b": la letra "a" dentro de una enumeración
pub fn check_enumeration(article: &Article<'_>, following: &str) -> Result<(), SkipReason> {
    if !article.capitalized
        && !article.is_an
        && JOINERS.iter().any(|j| j.eq_ignore_ascii_case(following))
    {
        return Err(SkipReason::Enumeration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Tokenizer;

    #[test]
    fn test_parse_article() {
        let a = Article::parse("a").unwrap();
        assert!(!a.is_an);
        assert!(!a.capitalized);

        let an = Article::parse("An").unwrap();
        assert!(an.is_an);
        assert!(an.capitalized);

        assert!(Article::parse("AN").unwrap().capitalized);
        assert!(Article::parse("the").is_none());
        assert!(Article::parse("and").is_none());
        assert!(Article::parse("").is_none());
    }

    #[test]
    fn test_is_first_word() {
        let tokens = Tokenizer::new().tokenize("\u{201C}A unicorn, A");
        assert!(is_first_word(&tokens, 1));
        assert!(!is_first_word(&tokens, 6));
    }

    #[test]
    fn test_label_inside_sentence() {
        let tokens = Tokenizer::new().tokenize("Station A equals");
        let article = Article::parse("A").unwrap();
        assert_eq!(check_label(&article, &tokens, 2), Err(SkipReason::LetterLabel));
    }

    #[test]
    fn test_label_at_sentence_start_is_candidate() {
        let tokens = Tokenizer::new().tokenize("A elephant");
        let article = Article::parse("A").unwrap();
        assert_eq!(check_label(&article, &tokens, 0), Ok(()));
    }

    #[test]
    fn test_capital_an_is_never_label() {
        let tokens = Tokenizer::new().tokenize("Then An dog");
        let article = Article::parse("An").unwrap();
        assert_eq!(check_label(&article, &tokens, 2), Ok(()));
    }

    #[test]
    fn test_enumeration() {
        let article = Article::parse("a").unwrap();
        assert_eq!(check_enumeration(&article, "and"), Err(SkipReason::Enumeration));
        assert_eq!(check_enumeration(&article, "OR"), Err(SkipReason::Enumeration));
        assert_eq!(check_enumeration(&article, "nor"), Err(SkipReason::Enumeration));
        assert_eq!(check_enumeration(&article, "android"), Ok(()));

        let capital = Article::parse("A").unwrap();
        assert_eq!(check_enumeration(&capital, "and"), Ok(()));
        let an = Article::parse("an").unwrap();
        assert_eq!(check_enumeration(&an, "and"), Ok(()));
    }
}
