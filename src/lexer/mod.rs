mod keywords;
mod token;

pub use keywords::*;
pub use token::*;

use std::{error::Error, fmt::Display};

/// Longest lexeme the lexer will accept, in bytes.
const MAX_LEXEME_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError(String);

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Error for LexError {}

/// Byte-wise lexer with a line/column cursor.
///
/// Identifiers may contain any byte of a multi-byte UTF-8 sequence, which
/// is how Greek words lex without the lexer ever decoding code points. A
/// hyphen continues a word only when what follows could start a word, so
/// `END-IF` is one token while `j-1` is three.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    tokens: Vec<Token>,
    position: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            tokens: vec![],
            position: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.eat_trivia();

            let position = (self.line, self.col);
            let Some(byte) = self.peek() else {
                break;
            };

            match byte {
                b'"' => self.lex_string(position)?,
                b'0'..=b'9' => self.lex_number(position)?,
                b'A'..=b'Z' | b'a'..=b'z' | b'_' | 0x80..=0xFF => self.lex_word(position)?,
                _ => self.lex_operator(position)?,
            }
        }

        self.tokens.push(Token::eof((self.line, self.col)));
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.position + offset).copied()
    }

    fn bump(&mut self) {
        if let Some(byte) = self.peek() {
            if byte == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.position += 1;
        }
    }

    /// Skip whitespace, `//` line comments, and `/* */` block comments.
    fn eat_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_whitespace() => self.bump(),
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(byte) = self.peek() {
                        if byte == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    self.bump();
                    self.bump();
                    while let Some(byte) = self.peek() {
                        if byte == b'*' && self.peek_at(1) == Some(b'/') {
                            self.bump();
                            self.bump();
                            break;
                        }
                        self.bump();
                    }
                }
                _ => return,
            }
        }
    }

    fn lex_string(&mut self, position: Position) -> LexResult<()> {
        self.bump();
        let start = self.position;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError(format!(
                        "Unterminated string literal at line {}, column {}",
                        position.0, position.1
                    )))
                }
                Some(b'"') => break,
                Some(_) => self.bump(),
            }
        }

        let text = self.slice_from(start);
        self.bump();
        self.push_checked(TokenKind::Str, text, position)
    }

    fn lex_number(&mut self, position: Position) -> LexResult<()> {
        let start = self.position;

        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }

        // A decimal point belongs to the number only when a digit follows;
        // two consecutive points are the range operator.
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            self.bump();
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.bump();
            }
        }

        let text = self.slice_from(start);
        self.push_checked(TokenKind::Number, text, position)
    }

    fn lex_word(&mut self, position: Position) -> LexResult<()> {
        let start = self.position;

        loop {
            match self.peek() {
                Some(b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | 0x80..=0xFF) => self.bump(),
                Some(b'-') if is_word_start(self.peek_at(1)) => self.bump(),
                _ => break,
            }
        }

        let text = self.slice_from(start);
        let kind = keywords::lookup(&text).unwrap_or(TokenKind::Identifier);
        self.push_checked(kind, text, position)
    }

    fn lex_operator(&mut self, position: Position) -> LexResult<()> {
        let Some(byte) = self.peek() else {
            return Ok(());
        };

        let (kind, len) = match (byte, self.peek_at(1)) {
            (b':', Some(b'=')) => (TokenKind::Assign, 2),
            (b'<', Some(b'>')) => (TokenKind::NotEquals, 2),
            (b'<', Some(b'=')) => (TokenKind::LessEquals, 2),
            (b'>', Some(b'=')) => (TokenKind::GreaterEquals, 2),
            (b'.', Some(b'.')) => (TokenKind::Range, 2),
            (b':', _) => (TokenKind::Colon, 1),
            (b'<', _) => (TokenKind::Less, 1),
            (b'>', _) => (TokenKind::Greater, 1),
            (b'.', _) => (TokenKind::Dot, 1),
            (b'+', _) => (TokenKind::Plus, 1),
            (b'-', _) => (TokenKind::Minus, 1),
            (b'*', _) => (TokenKind::Star, 1),
            (b'/', _) => (TokenKind::Slash, 1),
            (b'=', _) => (TokenKind::Equals, 1),
            (b'(', _) => (TokenKind::LParen, 1),
            (b')', _) => (TokenKind::RParen, 1),
            (b'[', _) => (TokenKind::LBracket, 1),
            (b']', _) => (TokenKind::RBracket, 1),
            (b',', _) => (TokenKind::Comma, 1),
            (b';', _) => (TokenKind::Semicolon, 1),
            (b'%', _) => (TokenKind::Percent, 1),
            _ => {
                return Err(LexError(format!(
                    "Unrecognized character '{}' at line {}, column {}",
                    byte as char, position.0, position.1
                )))
            }
        };

        let start = self.position;
        for _ in 0..len {
            self.bump();
        }
        let text = self.slice_from(start);
        self.tokens.push(Token::new(kind, text, position));
        Ok(())
    }

    fn slice_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn push_checked(&mut self, kind: TokenKind, text: String, position: Position) -> LexResult<()> {
        if text.len() > MAX_LEXEME_LEN {
            return Err(LexError(format!(
                "Lexeme longer than {} bytes at line {}, column {}",
                MAX_LEXEME_LEN, position.0, position.1
            )));
        }
        self.tokens.push(Token::new(kind, text, position));
        Ok(())
    }
}

fn is_word_start(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'A'..=b'Z' | b'a'..=b'z' | b'_' | 0x80..=0xFF))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .lex()
            .expect("lexing failed")
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_lex_header_both_languages() {
        assert_eq!(
            kinds("ALGORITHM Test"),
            vec![TokenKind::Algorithm, TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(
            kinds("Αλγόριθμος Δοκιμή"),
            vec![TokenKind::Algorithm, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_lex_assignment() {
        assert_eq!(
            kinds("x := 42;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_range_terminates_number() {
        let tokens = Lexer::new("[2..4]").lex().expect("lexing failed");
        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(texts, vec!["[", "2", "..", "4", "]", ""]);
    }

    #[test]
    fn test_real_literal_keeps_decimal_point() {
        let tokens = Lexer::new("3.14").lex().expect("lexing failed");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.14");
        // A trailing point does not belong to the number.
        let tokens = Lexer::new("3.").lex().expect("lexing failed");
        assert_eq!(tokens[0].text, "3");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_hyphen_keyword_versus_subtraction() {
        assert_eq!(kinds("END-IF"), vec![TokenKind::EndIf, TokenKind::Eof]);
        assert_eq!(
            kinds("j-1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            kinds("<> <= >= := .."),
            vec![
                TokenKind::NotEquals,
                TokenKind::LessEquals,
                TokenKind::GreaterEquals,
                TokenKind::Assign,
                TokenKind::Range,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("x // whole line\n/* block\ncomment */ y"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_string_literal_has_no_escapes() {
        let tokens = Lexer::new("\"hello \\ world\"").lex().expect("lexing failed");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "hello \\ world");
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(
            kinds("TRUE ΨΕΥΔΗΣ"),
            vec![
                TokenKind::BooleanLiteral,
                TokenKind::BooleanLiteral,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_stream_ends_with_single_eof() {
        let tokens = Lexer::new("x := 1").lex().expect("lexing failed");
        let eofs = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Eof)
            .count();
        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_unlexable_byte_reports_position() {
        let error = Lexer::new("x :=\n  @").lex().expect_err("should fail");
        let message = error.to_string();
        assert!(message.contains("'@'"), "{message}");
        assert!(message.contains("line 2"), "{message}");
    }

    #[test]
    fn test_positions_track_lines() {
        let tokens = Lexer::new("x\n  y").lex().expect("lexing failed");
        assert_eq!(tokens[0].position, (1, 1));
        assert_eq!(tokens[1].position, (2, 3));
    }
}
