//! Regla de artículos indefinidos en inglés ("a" / "an")
//!
//! El artículo correcto depende de la pronunciación de la palabra siguiente,
//! no de su ortografía: "a unicorn", "an hour", "a one-time offer".
//!
//! Cada aparición recorre los estados:
//! candidatura → palabra siguiente → clasificación → comparación.
//! Cualquier estado puede terminar en `Outcome::Skip` con su motivo.

pub mod candidacy;
pub mod classify;
pub mod exceptions;
pub mod neighbor;
pub mod tables;

use std::fmt;

use tracing::{debug, trace};

use crate::grammar::{GrammarRule, Report, Token};

pub use candidacy::Article;
pub use classify::{classify, Classification};
pub use tables::{ExceptionList, NEEDS_AN_TABLE, NEEDS_A_TABLE};

pub const RULE_ID: &str = "en_indefinite_article";

/// Motivo por el que una aparición no se marca
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// El token no es "a" ni "an"
    NotAnArticle,
    /// "A" mayúscula en mitad de la oración
    LetterLabel,
    /// No hay blanco + palabra a continuación
    NoFollowingWord,
    /// "a and b"
    Enumeration,
    /// La palabra admite ambos artículos o no hay regla
    Inconclusive,
    /// El artículo ya es el correcto
    Agrees,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotAnArticle => "not an article",
            SkipReason::LetterLabel => "letter used as a label",
            SkipReason::NoFollowingWord => "no following word",
            SkipReason::Enumeration => "letter in an enumeration",
            SkipReason::Inconclusive => "inconclusive classification",
            SkipReason::Agrees => "article agrees",
        };
        f.write_str(text)
    }
}

/// Artículo incorrecto detectado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub actual: String,
    pub suggestion: String,
    pub following: String,
}

impl Finding {
    pub fn message(&self) -> String {
        format!(
            "Use `{}` before `{}`, not `{}`",
            self.suggestion, self.following, self.actual
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skip(SkipReason),
    Flag(Finding),
}

/// Evalúa la palabra `siblings[index]` como posible artículo
pub fn evaluate(siblings: &[Token], index: usize) -> Outcome {
    match try_evaluate(siblings, index) {
        Ok(finding) => Outcome::Flag(finding),
        Err(reason) => Outcome::Skip(reason),
    }
}

fn try_evaluate(siblings: &[Token], index: usize) -> Result<Finding, SkipReason> {
    let token = &siblings[index];
    let article = Article::parse(&token.text).ok_or(SkipReason::NotAnArticle)?;

    candidacy::check_label(&article, siblings, index)?;

    let following =
        neighbor::following_word(siblings, index).ok_or(SkipReason::NoFollowingWord)?;

    candidacy::check_enumeration(&article, &following.text)?;

    let suggestion = match (classify(&following.text), article.is_an) {
        (Classification::An, false) => "an",
        (Classification::A, true) => "a",
        (Classification::A, false) | (Classification::An, true) => {
            return Err(SkipReason::Agrees);
        }
        (Classification::AOrAn | Classification::Unknown, _) => {
            return Err(SkipReason::Inconclusive);
        }
    };

    Ok(Finding {
        actual: article.text.to_string(),
        suggestion: match_case(suggestion, &article),
        following: following.text.clone(),
    })
}

/// "A elephant" → "An"
fn match_case(suggestion: &str, article: &Article<'_>) -> String {
    if !article.capitalized {
        return suggestion.to_string();
    }
    let mut chars = suggestion.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Regla de concordancia fonética del artículo indefinido
#[derive(Debug, Default, Clone, Copy)]
pub struct IndefiniteArticleRule;

impl IndefiniteArticleRule {
    pub fn new() -> Self {
        Self
    }
}

impl GrammarRule for IndefiniteArticleRule {
    fn id(&self) -> &str {
        RULE_ID
    }

    fn check(&self, siblings: &[Token], index: usize, report: &mut Report) {
        let token = &siblings[index];
        match evaluate(siblings, index) {
            Outcome::Skip(SkipReason::NotAnArticle) => {}
            Outcome::Skip(reason) => {
                trace!(word = %token.text, offset = token.start, %reason, "artículo omitido");
            }
            Outcome::Flag(finding) => {
                debug!(
                    actual = %finding.actual,
                    suggestion = %finding.suggestion,
                    following = %finding.following,
                    offset = token.start,
                    "artículo incorrecto"
                );
                let diagnostic = report.emit(finding.message(), token, RULE_ID);
                diagnostic.actual = Some(finding.actual);
                diagnostic.expected = vec![finding.suggestion];
            }
        }
    }
}
