//! Sistema de reglas gramaticales

use super::diagnostic::Report;
use super::tokenizer::Token;

/// Regla gramatical que se evalúa sobre cada palabra de una oración
pub trait GrammarRule: Send + Sync {
    /// Identificador estable (se usa en `--disable-rule`)
    fn id(&self) -> &str;

    /// Evalúa la palabra `siblings[index]` y reporta los errores encontrados
    fn check(&self, siblings: &[Token], index: usize, report: &mut Report);
}

struct RegisteredRule {
    rule: Box<dyn GrammarRule>,
    enabled: bool,
}

/// Motor de reglas
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<RegisteredRule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn GrammarRule>) {
        self.rules.push(RegisteredRule {
            rule,
            enabled: true,
        });
    }

    pub fn add_rules(&mut self, rules: Vec<Box<dyn GrammarRule>>) {
        for rule in rules {
            self.add_rule(rule);
        }
    }

    pub fn get_enabled_rules(&self) -> Vec<&dyn GrammarRule> {
        self.rules
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.rule.as_ref())
            .collect()
    }

    pub fn has_rule(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.rule.id() == id)
    }

    pub fn disable_rule(&mut self, id: &str) {
        for registered in &mut self.rules {
            if registered.rule.id() == id {
                registered.enabled = false;
            }
        }
    }
}
