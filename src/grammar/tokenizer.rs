//! Tokenizador de texto

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Word,
    Punctuation,
    Whitespace,
    Unknown,
}

/// Token individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        Self {
            text,
            token_type,
            start,
            end,
        }
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    pub fn is_whitespace(&self) -> bool {
        self.token_type == TokenType::Whitespace
    }

    pub fn is_punctuation(&self) -> bool {
        self.token_type == TokenType::Punctuation
    }
}

/// Tokenizador de texto
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza un texto en tokens individuales
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let end_of = |i: usize| chars.get(i).map_or(text.len(), |&(pos, _)| pos);
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (start, ch) = chars[i];
            let mut j = i + 1;

            let token_type = if ch.is_alphanumeric() {
                // Palabra: los signos internos solo se aceptan entre alfanuméricos
                // ("one-time", "don't", "10.5")
                while j < chars.len() {
                    let next = chars[j].1;
                    if next.is_alphanumeric() {
                        j += 1;
                    } else if chars
                        .get(j + 1)
                        .is_some_and(|&(_, after)| is_word_joiner(next, chars[j - 1].1, after))
                    {
                        j += 2;
                    } else {
                        break;
                    }
                }
                TokenType::Word
            } else if ch.is_whitespace() {
                while j < chars.len() && chars[j].1.is_whitespace() {
                    j += 1;
                }
                TokenType::Whitespace
            } else if is_punctuation(ch) {
                // Agrupar "..." en un solo token
                if ch == '.' {
                    while j < chars.len() && chars[j].1 == '.' {
                        j += 1;
                    }
                }
                TokenType::Punctuation
            } else {
                TokenType::Unknown
            };

            let end = end_of(j);
            tokens.push(Token::new(text[start..end].to_string(), token_type, start, end));
            i = j;
        }

        tokens
    }
}

fn is_word_joiner(ch: char, previous: char, next: char) -> bool {
    match ch {
        '\'' | '\u{2019}' | '-' => next.is_alphanumeric(),
        '.' | ',' => previous.is_ascii_digit() && next.is_ascii_digit(),
        _ => false,
    }
}

fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}'
            | '-' | '\u{2014}' | '\u{2013}' | '\u{2026}' | '\u{201C}' | '\u{201D}'
            | '\u{2018}' | '\u{2019}' | '«' | '»' | '/'
    )
}
