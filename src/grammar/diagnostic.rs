//! Diagnósticos emitidos por las reglas

use serde::Serialize;

use super::tokenizer::Token;

/// Posición legible (línea y columna, ambas desde 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Diagnóstico sobre un token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub rule_id: String,
    pub start: usize,
    pub end: usize,
    pub position: Position,
    /// Texto observado
    pub actual: Option<String>,
    /// Reemplazos sugeridos
    pub expected: Vec<String>,
}

/// Colector de diagnósticos de un texto
#[derive(Debug)]
pub struct Report {
    line_starts: Vec<usize>,
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            line_starts,
            text: text.to_string(),
            diagnostics: Vec::new(),
        }
    }

    /// Registra un diagnóstico sobre `token` y lo devuelve para completarlo
    pub fn emit(&mut self, message: String, token: &Token, rule_id: &str) -> &mut Diagnostic {
        let position = self.position(token.start);
        self.diagnostics.push(Diagnostic {
            message,
            rule_id: rule_id.to_string(),
            start: token.start,
            end: token.end,
            position,
            actual: None,
            expected: Vec::new(),
        });
        let last = self.diagnostics.len() - 1;
        &mut self.diagnostics[last]
    }

    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count())
            + 1;
        Position { line, column }
    }

    /// Diagnósticos en orden de documento
    pub fn into_diagnostics(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| (d.start, d.end));
        self.diagnostics
    }
}
