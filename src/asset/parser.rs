//! Declaration grammar for generated assets
//!
//! ```text
//! list  := "const" IDENT "=" "[" (STRING ("," STRING)* ","?)? "]" ";"
//! table := "const" IDENT "=" "{" (KEY ":" INT ("," KEY ":" INT)* ","?)? "}" ";"
//! KEY   := STRING | IDENT
//! INT   := "-"? NUMBER
//! ```
//!
//! Anything before the declaration is skipped. Anything after the closing `;`
//! is never read.

use super::lexer::{LexError, Lexer, Position, Spanned, Token};
use std::fmt;

/// Failure to read a declaration back out of an asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The declaration could not be located or is not delimited
    Parse { name: String, reason: String },
    /// The declaration was found but its body is not the expected literal
    Decode {
        name: String,
        position: Position,
        reason: String,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { name, reason } => {
                write!(f, "Failed to find {name} declaration: {reason}")
            }
            Self::Decode {
                name,
                position,
                reason,
            } => write!(f, "Failed to decode {name} at {position}: {reason}"),
        }
    }
}

impl std::error::Error for AssetError {}

struct DeclParser<'a> {
    name: &'a str,
    lexer: Lexer<'a>,
    last: Position,
}

impl<'a> DeclParser<'a> {
    fn new(source: &'a str, name: &'a str) -> Self {
        Self {
            name,
            lexer: Lexer::new(source),
            last: Position { line: 1, column: 1 },
        }
    }

    fn parse_error(&self, reason: impl Into<String>) -> AssetError {
        AssetError::Parse {
            name: self.name.to_string(),
            reason: reason.into(),
        }
    }

    fn decode_error(&self, position: Position, reason: impl Into<String>) -> AssetError {
        AssetError::Decode {
            name: self.name.to_string(),
            position,
            reason: reason.into(),
        }
    }

    /// Next token inside the literal body
    ///
    /// Running out of input means the region is not delimited, which is a
    /// parse failure; a tokenizer failure inside the body is a decode failure.
    fn body_token(&mut self, closer: char) -> Result<Spanned, AssetError> {
        match self.lexer.next() {
            Some(Ok(spanned)) => {
                self.last = spanned.position;
                Ok(spanned)
            }
            Some(Err(LexError { position, message })) => Err(self.decode_error(position, message)),
            None => Err(self.parse_error(format!(
                "literal opened near {} is never closed with `{closer}`",
                self.last
            ))),
        }
    }

    /// Skip ahead to just past `const NAME = <opener>`
    fn find_declaration(&mut self, opener: char) -> Result<(), AssetError> {
        let expected = [
            Token::Ident("const".to_string()),
            Token::Ident(self.name.to_string()),
            Token::Punct('='),
            Token::Punct(opener),
        ];
        let mut matched = 0;

        while matched < expected.len() {
            let token = match self.lexer.next() {
                Some(Ok(spanned)) => {
                    self.last = spanned.position;
                    spanned.token
                }
                Some(Err(e)) => return Err(self.parse_error(format!("malformed input ({e})"))),
                None => {
                    return Err(self.parse_error(format!(
                        "no `const {} = {opener}` in input",
                        self.name
                    )));
                }
            };

            if token == expected[matched] {
                matched += 1;
            } else if token == expected[0] {
                matched = 1;
            } else {
                matched = 0;
            }
        }

        Ok(())
    }

    fn expect_terminator(&mut self, closer: char) -> Result<(), AssetError> {
        match self.lexer.next() {
            Some(Ok(Spanned {
                token: Token::Punct(';'),
                ..
            })) => Ok(()),
            _ => Err(self.parse_error(format!(
                "`{closer}` near {} is not followed by `;`",
                self.last
            ))),
        }
    }

    fn parse_string_list(mut self) -> Result<Vec<String>, AssetError> {
        self.find_declaration('[')?;

        let mut items = Vec::new();
        loop {
            let Spanned { token, position } = self.body_token(']')?;
            match token {
                Token::Punct(']') => break,
                Token::Str(text) => items.push(text),
                other => return Err(self.decode_error(position, format!("expected string, found {other}"))),
            }

            let Spanned { token, position } = self.body_token(']')?;
            match token {
                Token::Punct(',') => {}
                Token::Punct(']') => break,
                other => {
                    return Err(self.decode_error(
                        position,
                        format!("expected `,` or `]`, found {other}"),
                    ));
                }
            }
        }

        self.expect_terminator(']')?;
        Ok(items)
    }

    fn parse_int(&mut self) -> Result<i64, AssetError> {
        let Spanned {
            mut token,
            position,
        } = self.body_token('}')?;

        let negative = token == Token::Punct('-');
        if negative {
            token = self.body_token('}')?.token;
        }

        let raw = match token {
            Token::Number(raw) => raw,
            other => {
                return Err(self.decode_error(position, format!("expected integer, found {other}")));
            }
        };
        let value: i64 = raw
            .parse()
            .map_err(|_| self.decode_error(position, format!("`{raw}` is not an integer")))?;
        Ok(if negative { -value } else { value })
    }

    fn parse_score_table(mut self) -> Result<Vec<(String, i64)>, AssetError> {
        self.find_declaration('{')?;

        let mut entries = Vec::new();
        loop {
            let Spanned { token, position } = self.body_token('}')?;
            let key = match token {
                Token::Punct('}') => break,
                Token::Str(text) | Token::Ident(text) => text,
                other => return Err(self.decode_error(position, format!("expected key, found {other}"))),
            };

            let Spanned { token, position } = self.body_token('}')?;
            if token != Token::Punct(':') {
                return Err(self.decode_error(position, format!("expected `:`, found {token}")));
            }

            let value = self.parse_int()?;
            entries.push((key, value));

            let Spanned { token, position } = self.body_token('}')?;
            match token {
                Token::Punct(',') => {}
                Token::Punct('}') => break,
                other => {
                    return Err(self.decode_error(
                        position,
                        format!("expected `,` or `}}`, found {other}"),
                    ));
                }
            }
        }

        self.expect_terminator('}')?;
        Ok(entries)
    }
}

/// Read the string elements of `const NAME = [...];` in order
///
/// # Errors
///
/// Returns `AssetError::Parse` if the declaration cannot be located, and
/// `AssetError::Decode` if its elements are not all string literals.
///
/// # Examples
/// ```
/// use wordle_assets::asset::parse_string_list;
///
/// let words = parse_string_list("const WORD_LIST = [\"aback\", \"abase\",];", "WORD_LIST").unwrap();
/// assert_eq!(words, ["aback", "abase"]);
/// ```
pub fn parse_string_list(source: &str, name: &str) -> Result<Vec<String>, AssetError> {
    DeclParser::new(source, name).parse_string_list()
}

/// Read the entries of `const NAME = {...};` in order
///
/// # Errors
///
/// Returns `AssetError::Parse` if the declaration cannot be located, and
/// `AssetError::Decode` if an entry is not `key: integer`.
pub fn parse_score_table(source: &str, name: &str) -> Result<Vec<(String, i64)>, AssetError> {
    DeclParser::new(source, name).parse_score_table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generated_layout() {
        let source = "const WORD_LIST = [\n  \"aback\",\n  \"abase\"\n];\n\nif (typeof window !== 'undefined') {\n}\n";
        assert_eq!(
            parse_string_list(source, "WORD_LIST").unwrap(),
            ["aback", "abase"]
        );
    }

    #[test]
    fn tolerates_trailing_comma() {
        let source = "const WORD_LIST = [\"aback\", \"abase\",\n];";
        assert_eq!(
            parse_string_list(source, "WORD_LIST").unwrap(),
            ["aback", "abase"]
        );
    }

    #[test]
    fn parses_empty_list() {
        assert!(parse_string_list("const WORD_LIST = [];", "WORD_LIST")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let source = "const WORD_LIST = ['zebra', \"apple\", 'zebra'];";
        assert_eq!(
            parse_string_list(source, "WORD_LIST").unwrap(),
            ["zebra", "apple", "zebra"]
        );
    }

    #[test]
    fn skips_preamble_and_other_declarations() {
        let source = "// generated\nconst OTHER = [1, 2];\nconst WORD_LIST = [\"crane\"];";
        assert_eq!(parse_string_list(source, "WORD_LIST").unwrap(), ["crane"]);
    }

    #[test]
    fn accepts_reformatted_input() {
        let source = "const   WORD_LIST=[ /* first */ \"crane\" , // second\n 'slate' ] ;";
        assert_eq!(
            parse_string_list(source, "WORD_LIST").unwrap(),
            ["crane", "slate"]
        );
    }

    #[test]
    fn missing_declaration_is_parse_error() {
        let err = parse_string_list("let WORDS = [\"crane\"];", "WORD_LIST").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
        assert!(err.to_string().contains("WORD_LIST"));
    }

    #[test]
    fn missing_terminator_is_parse_error() {
        let err = parse_string_list("const WORD_LIST = [\"crane\"]", "WORD_LIST").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn unclosed_list_is_parse_error() {
        let err = parse_string_list("const WORD_LIST = [\"crane\",", "WORD_LIST").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn non_string_element_is_decode_error() {
        let err = parse_string_list("const WORD_LIST = [\"crane\", 42];", "WORD_LIST").unwrap_err();
        let AssetError::Decode { position, .. } = err else {
            panic!("expected decode error, got {err:?}");
        };
        assert_eq!(position, Position { line: 1, column: 29 });
    }

    #[test]
    fn double_trailing_comma_is_decode_error() {
        let err = parse_string_list("const WORD_LIST = [\"crane\",,];", "WORD_LIST").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn bad_escape_in_body_is_decode_error() {
        let err = parse_string_list("const WORD_LIST = [\"cr\\qne\"];", "WORD_LIST").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn parses_score_table() {
        let source = "const MODERN_WORD_FREQUENCY = {\n  \"apple\": 4512,\n  \"zebra\": -20,\n};\n";
        assert_eq!(
            parse_score_table(source, "MODERN_WORD_FREQUENCY").unwrap(),
            [("apple".to_string(), 4512), ("zebra".to_string(), -20)]
        );
    }

    #[test]
    fn score_table_accepts_bare_keys() {
        let source = "const F = { apple: 1, 'zebra': 2 };";
        assert_eq!(
            parse_score_table(source, "F").unwrap(),
            [("apple".to_string(), 1), ("zebra".to_string(), 2)]
        );
    }

    #[test]
    fn score_table_rejects_fractions() {
        let err = parse_score_table("const F = { \"apple\": 4.5 };", "F").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn score_table_missing_is_parse_error() {
        let err = parse_score_table("const F = [];", "F").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }
}
