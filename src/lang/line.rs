use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::source::*;
use super::token::*;

/// A scanned line of input, ready to be parsed.
#[derive(Debug, PartialEq)]
pub struct Line {
    source: Source,
    tokens: Vec<Token>,
}

impl Line {
    pub fn from_str(s: &str) -> Result<Line, Error> {
        let tokens = lex(s)?;
        Ok(Line {
            source: Source::new(s),
            tokens,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ast(&self) -> Result<Node, Error> {
        parse(&self.source, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
