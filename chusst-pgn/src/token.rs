use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Period,
    Asterisk,
    LBracket,
    RBracket,
    LParen,
    RParen,
    LAngle,
    RAngle,
    Percent,
    String,
    Integer,
    Nag,
    Symbol,
    Illegal,
    EndOfInput,
}

impl TokenKind {
    /// Kind of the tokens that are made of exactly one punctuation character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(TokenKind::Period),
            '*' => Some(TokenKind::Asterisk),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '<' => Some(TokenKind::LAngle),
            '>' => Some(TokenKind::RAngle),
            '%' => Some(TokenKind::Percent),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Period => ".",
            TokenKind::Asterisk => "*",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LAngle => "<",
            TokenKind::RAngle => ">",
            TokenKind::Percent => "%",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Nag => "NAG",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// `1-0`, `0-1`, `1/2-1/2` are lexed as symbols, while `*` has its own kind.
    pub fn is_termination(&self) -> bool {
        match self.kind {
            TokenKind::Asterisk => true,
            TokenKind::Symbol => matches!(self.text, "1-0" | "0-1" | "1/2-1/2"),
            _ => false,
        }
    }
}
