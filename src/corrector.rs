//! Motor principal de corrección

use std::collections::HashMap;

use tracing::debug;

use crate::article::IndefiniteArticleRule;
use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::grammar::{Diagnostic, Document, GrammarAnalyzer, GrammarRule, Token};

/// Reglas disponibles para inglés
pub fn english_rules() -> Vec<Box<dyn GrammarRule>> {
    vec![Box::new(IndefiniteArticleRule::new())]
}

/// Motor principal del corrector
pub struct Corrector {
    grammar_analyzer: GrammarAnalyzer,
    config: Config,
}

impl Corrector {
    /// Crea una nueva instancia del corrector
    pub fn new(config: &Config) -> Result<Self> {
        let mut grammar_analyzer = GrammarAnalyzer::with_rules(english_rules());

        for id in &config.disabled_rules {
            if !grammar_analyzer.rule_engine().has_rule(id) {
                return Err(Error::UnknownRule(id.clone()));
            }
            grammar_analyzer.rule_engine_mut().disable_rule(id);
        }

        debug!(
            rules = grammar_analyzer.rule_engine().get_enabled_rules().len(),
            format = ?config.format,
            "corrector inicializado"
        );

        Ok(Self {
            grammar_analyzer,
            config: config.clone(),
        })
    }

    /// Diagnósticos del texto, en orden de documento
    pub fn check(&self, text: &str) -> Vec<Diagnostic> {
        let document = Document::parse(text);
        self.grammar_analyzer.analyze(text, &document)
    }

    /// Corrige el texto proporcionado: cada artículo marcado va seguido de
    /// la sugerencia entre separadores ("a [an] hour")
    pub fn correct(&self, text: &str) -> String {
        let document = Document::parse(text);
        let diagnostics = self.grammar_analyzer.analyze(text, &document);
        self.reconstruct_with_markers(document.tokens(), &diagnostics)
    }

    /// Salida según el formato configurado
    pub fn render(&self, text: &str) -> Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(self.correct(text)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.check(text))?),
        }
    }

    /// Reconstruye el texto con marcadores de corrección
    fn reconstruct_with_markers(&self, tokens: &[Token], diagnostics: &[Diagnostic]) -> String {
        let separator = &self.config.grammar_separator;
        let by_start: HashMap<usize, &Diagnostic> =
            diagnostics.iter().map(|d| (d.start, d)).collect();

        let mut result = String::new();
        for token in tokens {
            result.push_str(&token.text);
            let Some(diagnostic) = by_start.get(&token.start) else {
                continue;
            };
            if let Some(suggestion) = diagnostic.expected.first() {
                result.push(' ');
                result.push_str(&separator.open);
                result.push_str(suggestion);
                result.push_str(&separator.close);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Separator;

    #[test]
    fn test_correct_with_markers() {
        let corrector = Corrector::new(&Config::default()).unwrap();
        assert_eq!(
            corrector.correct("It took a hour on an unicorn."),
            "It took a [an] hour on an [a] unicorn."
        );
    }

    #[test]
    fn test_correct_without_errors_is_identity() {
        let corrector = Corrector::new(&Config::default()).unwrap();
        let text = "An hour.\n\nA university, a one-time offer.";
        assert_eq!(corrector.correct(text), text);
    }

    #[test]
    fn test_custom_separator() {
        let config = Config {
            grammar_separator: "{}".parse::<Separator>().unwrap(),
            ..Config::default()
        };
        let corrector = Corrector::new(&config).unwrap();
        assert_eq!(corrector.correct("A elephant"), "A {An} elephant");
    }

    #[test]
    fn test_disable_rule() {
        let config = Config {
            disabled_rules: vec![crate::article::RULE_ID.to_string()],
            ..Config::default()
        };
        let corrector = Corrector::new(&config).unwrap();
        assert!(corrector.check("a hour").is_empty());
    }

    #[test]
    fn test_unknown_rule_is_error() {
        let config = Config {
            disabled_rules: vec!["es_art_noun_gender".to_string()],
            ..Config::default()
        };
        assert!(matches!(
            Corrector::new(&config),
            Err(Error::UnknownRule(id)) if id == "es_art_noun_gender"
        ));
    }

    #[test]
    fn test_render_json() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let corrector = Corrector::new(&config).unwrap();
        let rendered = corrector.render("a hour").unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["actual"], "a");
        assert_eq!(value[0]["expected"][0], "an");
        assert_eq!(value[0]["rule_id"], "en_indefinite_article");
        assert_eq!(value[0]["position"]["line"], 1);
        assert_eq!(value[0]["position"]["column"], 1);
    }
}
