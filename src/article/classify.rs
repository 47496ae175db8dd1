//! Clasificación de la palabra siguiente al artículo

use std::borrow::Cow;
use std::fmt;

use super::tables::{ExceptionList, NEEDS_AN_TABLE, NEEDS_A_TABLE};
use crate::numbers;

/// Artículo que pide una palabra según su pronunciación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    A,
    An,
    /// Se admiten ambos ("historic")
    AOrAn,
    /// No hay regla aplicable (nombre propio, sigla desconocida)
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::A => "a",
            Classification::An => "an",
            Classification::AOrAn => "a-or-an",
            Classification::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Separadores que delimitan la cabeza de una palabra
const SEPARATORS: &[char] = &['\'', '\u{2019}', ' ', '-'];

/// Clasifica `value` con las tablas globales de excepciones
pub fn classify(value: &str) -> Classification {
    classify_with(value, &NEEDS_A_TABLE, &NEEDS_AN_TABLE)
}

/// Clasifica `value` con tablas arbitrarias
pub fn classify_with(
    value: &str,
    needs_a: &ExceptionList,
    needs_an: &ExceptionList,
) -> Classification {
    let expanded = expand_leading_digits(value);
    let head = head(&expanded);

    match (needs_a.matches(head), needs_an.matches(head)) {
        (true, true) => Classification::AOrAn,
        (true, false) => Classification::A,
        (false, true) => Classification::An,
        (false, false) => {
            let lower = head.to_lowercase();
            if lower != head {
                // Parece nombre propio o sigla
                Classification::Unknown
            } else if lower.starts_with(['a', 'e', 'i', 'o', 'u']) {
                Classification::An
            } else {
                Classification::A
            }
        }
    }
}

/// Sustituye los dígitos iniciales por su lectura seguida de un espacio:
/// "11-year-old" → "eleven -year-old". Los dígitos internos no se tocan.
pub fn expand_leading_digits(value: &str) -> Cow<'_, str> {
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    if digits_end == 0 {
        return Cow::Borrowed(value);
    }

    let (digits, rest) = value.split_at(digits_end);
    Cow::Owned(format!("{} {}", numbers::to_words(digits), rest))
}

/// Segmento inicial hasta el primer apóstrofo, espacio o guion
pub fn head(value: &str) -> &str {
    value.split(SEPARATORS).next().unwrap_or(value)
}
