//! Analizador gramatical

use tracing::debug;

use super::diagnostic::{Diagnostic, Report};
use super::document::Document;
use super::rules::{GrammarRule, RuleEngine};

/// Analizador gramatical
#[derive(Default)]
pub struct GrammarAnalyzer {
    rule_engine: RuleEngine,
}

impl GrammarAnalyzer {
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new(),
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn GrammarRule>>) -> Self {
        let mut analyzer = Self::new();
        analyzer.rule_engine.add_rules(rules);
        analyzer
    }

    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    pub fn rule_engine_mut(&mut self) -> &mut RuleEngine {
        &mut self.rule_engine
    }

    /// Recorre cada palabra de cada oración en orden de lectura y aplica
    /// las reglas habilitadas
    pub fn analyze(&self, text: &str, document: &Document) -> Vec<Diagnostic> {
        let rules = self.rule_engine.get_enabled_rules();
        let mut report = Report::new(text);

        for siblings in document.sentences() {
            for (index, token) in siblings.iter().enumerate() {
                if !token.is_word() {
                    continue;
                }
                for rule in &rules {
                    rule.check(siblings, index, &mut report);
                }
            }
        }

        let diagnostics = report.into_diagnostics();
        debug!(
            rules = rules.len(),
            diagnostics = diagnostics.len(),
            "análisis gramatical terminado"
        );
        diagnostics
    }
}
