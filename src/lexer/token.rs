pub type Position = (usize, usize);

/// The closed set of token kinds. Keywords carry no payload of their own;
/// the matched lexeme always travels alongside in [`Token::text`] so
/// diagnostics can echo exactly what was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Algorithm,
    Constants,
    Data,
    Begin,
    End,
    Procedure,
    Function,
    Interface,
    Input,
    Output,
    EndFunction,
    EndProcedure,
    If,
    Then,
    Else,
    EndIf,
    For,
    To,
    Step,
    Repeat,
    EndFor,
    While,
    EndWhile,
    Until,
    Print,
    Read,
    Calculate,
    IntegerType,
    RealType,
    BooleanType,
    CharType,
    StringType,
    Array,
    Of,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Div,
    Mod,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    And,
    Or,
    Not,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Range,
    Percent,
    Number,
    Str,
    BooleanLiteral,
    Identifier,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Algorithm => "ALGORITHM",
            TokenKind::Constants => "CONSTANTS",
            TokenKind::Data => "DATA",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Input => "INPUT",
            TokenKind::Output => "OUTPUT",
            TokenKind::EndFunction => "END_FUNCTION",
            TokenKind::EndProcedure => "END_PROCEDURE",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "END_IF",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::Step => "STEP",
            TokenKind::Repeat => "REPEAT",
            TokenKind::EndFor => "END_FOR",
            TokenKind::While => "WHILE",
            TokenKind::EndWhile => "END_WHILE",
            TokenKind::Until => "UNTIL",
            TokenKind::Print => "PRINT",
            TokenKind::Read => "READ",
            TokenKind::Calculate => "CALCULATE",
            TokenKind::IntegerType => "INTEGER",
            TokenKind::RealType => "REAL",
            TokenKind::BooleanType => "BOOLEAN",
            TokenKind::CharType => "CHAR",
            TokenKind::StringType => "STRING",
            TokenKind::Array => "ARRAY",
            TokenKind::Of => "OF",
            TokenKind::Assign => ":=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Range => "..",
            TokenKind::Percent => "%",
            TokenKind::Number => "number",
            TokenKind::Str => "string literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
