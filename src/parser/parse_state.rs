use crate::lexer::{Token, TokenKind};
use crate::parser::ParseError;

/// How many already-consumed tokens a parse error echoes back.
const HISTORY_LEN: usize = 3;

/// Cursor over the token stream, with the source lines kept around so
/// errors can show the offending line.
#[derive(Debug, Clone)]
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    lines: Vec<String>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>, source: &str) -> Self {
        Self {
            tokens,
            index: 0,
            lines: source.lines().map(str::to_owned).collect(),
        }
    }

    /// Peek at the current token. The stream always ends with the EOF
    /// sentinel and the cursor never moves past it.
    pub fn peek(&self) -> &Token {
        let index = self.index.min(self.tokens.len().saturating_sub(1));
        &self.tokens[index]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Peek `offset` tokens ahead of the cursor.
    pub fn peek_ahead(&self, offset: usize) -> TokenKind {
        let index = (self.index + offset).min(self.tokens.len().saturating_sub(1));
        self.tokens[index].kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume and return the current token.
    pub fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if self.index < self.tokens.len().saturating_sub(1) {
            self.index += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.next())
        } else {
            None
        }
    }

    /// Consume the current token, failing unless it has the given kind.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.next())
        } else {
            Err(self.error(format!("expected {}", kind)))
        }
    }

    /// Consume the current token, failing unless its kind is one of `kinds`.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<Token, ParseError> {
        if kinds.iter().any(|kind| self.at(*kind)) {
            Ok(self.next())
        } else {
            let expected = kinds
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(" or ");
            Err(self.error(format!("expected {expected}")))
        }
    }

    pub fn skip_semicolons(&mut self) {
        while self.accept(TokenKind::Semicolon).is_some() {}
    }

    /// Build a parse error at the current token, carrying the offending
    /// line of source and a short history of the preceding tokens.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.peek();
        let mut message = format!("{}, got {}", message.into(), token.kind);

        let history: Vec<String> = self.tokens[..self.index]
            .iter()
            .rev()
            .take(HISTORY_LEN)
            .rev()
            .map(|token| token.kind.to_string())
            .collect();
        if !history.is_empty() {
            message.push_str(&format!(" (after {})", history.join(" ")));
        }

        ParseError {
            message,
            position: Some(token.position),
            source_line: self.lines.get(token.position.0.saturating_sub(1)).cloned(),
        }
    }
}

impl From<Vec<Token>> for ParseState {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens, "")
    }
}
