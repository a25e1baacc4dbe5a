//! Tokenizer for generated script assets
//!
//! Understands just enough of the browser script syntax to read back the
//! declarations this crate writes: identifiers, quoted strings with JSON style
//! escapes, numbers and single-character punctuation. Whitespace and comments
//! are skipped. Tokens are produced lazily so that trailing code the grammar
//! never reaches is never tokenized.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Identifier or keyword (`const`, `WORD_LIST`, `window`)
    Ident(String),
    /// Quoted string, escapes already decoded
    Str(String),
    /// Numeric literal, raw text
    Number(String),
    /// Any other single character
    Punct(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Str(text) => write!(f, "string {text:?}"),
            Self::Number(raw) => write!(f, "number `{raw}`"),
            Self::Punct(c) => write!(f, "`{c}`"),
        }
    }
}

/// 1-based source position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: Position,
}

/// Malformed input the tokenizer cannot get past
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: Position,
    pub message: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.position)
    }
}

impl std::error::Error for LexError {}

/// Lazy tokenizer over a source string
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            failed: false,
        }
    }

    fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, position: Position, message: impl Into<String>) -> LexError {
        LexError {
            position,
            message: message.into(),
        }
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.peek().map(|&(_, c)| c) {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            let start = self.current_position();
                            self.bump();
                            self.bump();
                            let mut closed = false;
                            while let Some(c) = self.bump() {
                                if c == '*' && self.peek() == Some('/') {
                                    self.bump();
                                    closed = true;
                                    break;
                                }
                            }
                            if !closed {
                                return Err(self.error(start, "unterminated block comment"));
                            }
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn lex_ident(&mut self) -> Token {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::Ident(name)
    }

    fn lex_number(&mut self) -> Token {
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-') && raw.ends_with(['e', 'E']);
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || exponent_sign {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::Number(raw)
    }

    fn lex_string(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.current_position();
        self.bump();

        let mut text = String::new();
        loop {
            let here = self.current_position();
            match self.bump() {
                None | Some('\n') => return Err(self.error(start, "unterminated string literal")),
                Some(c) if c == quote => return Ok(Token::Str(text)),
                Some('\\') => text.push(self.lex_escape(here)?),
                Some(c) => text.push(c),
            }
        }
    }

    fn lex_escape(&mut self, at: Position) -> Result<char, LexError> {
        let c = match self.bump() {
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => return self.lex_unicode_escape(at),
            Some(other) => return Err(self.error(at, format!("invalid escape `\\{other}`"))),
            None => return Err(self.error(at, "unterminated string literal")),
        };
        Ok(c)
    }

    fn lex_hex4(&mut self, at: Position) -> Result<u32, LexError> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(at, "invalid \\u escape"))?;
            value = value * 16 + digit;
        }
        Ok(value)
    }

    fn lex_unicode_escape(&mut self, at: Position) -> Result<char, LexError> {
        let high = self.lex_hex4(at)?;
        if !(0xD800..0xDC00).contains(&high) {
            return char::from_u32(high).ok_or_else(|| self.error(at, "invalid \\u escape"));
        }

        // Surrogate pair: expect a second \uXXXX for the low half
        if self.bump() != Some('\\') || self.bump() != Some('u') {
            return Err(self.error(at, "unpaired surrogate in \\u escape"));
        }
        let low = self.lex_hex4(at)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.error(at, "unpaired surrogate in \\u escape"));
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).ok_or_else(|| self.error(at, "invalid \\u escape"))
    }

    fn next_token(&mut self) -> Result<Option<Spanned>, LexError> {
        self.skip_trivia()?;

        let position = self.current_position();
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let token = if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            self.lex_ident()
        } else if c.is_ascii_digit() {
            self.lex_number()
        } else if c == '"' || c == '\'' {
            self.lex_string(c)?
        } else {
            self.bump();
            Token::Punct(c)
        };

        Ok(Some(Spanned { token, position }))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
