//! Tablas de excepciones
//!
//! Cada lista se construye a partir de una lista plana de cadenas:
//! - terminadas en `*`: prefijo, sin distinguir mayúsculas
//! - en minúsculas: literal, sin distinguir mayúsculas
//! - con alguna mayúscula: literal exacto (siglas, letras sueltas)

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use super::exceptions::{NEEDS_A, NEEDS_AN};

/// Palabras que piden "a" aunque empiecen por vocal
pub static NEEDS_A_TABLE: Lazy<ExceptionList> = Lazy::new(|| ExceptionList::new(NEEDS_A));

/// Palabras que piden "an" aunque empiecen por consonante
pub static NEEDS_AN_TABLE: Lazy<ExceptionList> = Lazy::new(|| ExceptionList::new(NEEDS_AN));

const WILDCARD: char = '*';

/// Lista de excepciones con tres niveles de coincidencia
#[derive(Debug, Clone, Default)]
pub struct ExceptionList {
    sensitive: HashSet<String>,
    insensitive: HashSet<String>,
    prefixes: Vec<Regex>,
}

impl ExceptionList {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut list = Self::default();

        for entry in entries {
            let entry = entry.as_ref();
            if let Some(prefix) = entry.strip_suffix(WILDCARD) {
                let pattern = format!("^{}", regex::escape(prefix));
                match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                    Ok(regex) => list.prefixes.push(regex),
                    Err(e) => warn!(entry, error = %e, "prefijo de excepción ignorado"),
                }
            } else if entry == entry.to_lowercase() {
                list.insensitive.insert(entry.to_string());
            } else {
                list.sensitive.insert(entry.to_string());
            }
        }

        list
    }

    /// ¿Coincide `value` con alguna entrada? Se prueba en orden:
    /// literal exacto, literal en minúsculas y prefijos.
    pub fn matches(&self, value: &str) -> bool {
        self.sensitive.contains(value)
            || self.insensitive.contains(&value.to_lowercase())
            || self.prefixes.iter().any(|regex| regex.is_match(value))
    }
}
