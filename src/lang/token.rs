use super::{Column, Error, Source};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Kind {
    Number,
    Identifier,
    Plus,
    Minus,
    Asterisk,
    Solidus,
    LeftParen,
    RightParen,
    Equals,
}

impl Kind {
    pub fn from_char(ch: char) -> Option<Kind> {
        use Kind::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Asterisk),
            '/' => Some(Solidus),
            '(' => Some(LeftParen),
            ')' => Some(RightParen),
            '=' => Some(Equals),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Number => write!(f, "Number"),
            Identifier => write!(f, "Ident"),
            Plus => write!(f, "Plus"),
            Minus => write!(f, "Minus"),
            Asterisk => write!(f, "Asterisk"),
            Solidus => write!(f, "Solidus"),
            LeftParen => write!(f, "LeftParen"),
            RightParen => write!(f, "RightParen"),
            Equals => write!(f, "Equals"),
        }
    }
}

/// A classified token. The text is never copied; use [`Token::lexeme`].
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub range: Column,
}

impl Token {
    pub fn new(kind: Kind, range: Column) -> Token {
        Token { kind, range }
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind == kind
    }

    pub fn lexeme<'a>(&self, source: &'a Source) -> Result<&'a str, Error> {
        source.slice(&self.range)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({}..{})", self.kind, self.range.start, self.range.end)
    }
}
