use super::{token::*, Column, Error};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

pub fn lex(s: &str) -> Result<Vec<Token>> {
    let tokens = CalcLexer::lex(s)?;
    if log::log_enabled!(log::Level::Debug) {
        let kinds: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        debug!("tokens: [{}]", kinds.join(", "));
    }
    Ok(tokens)
}

fn is_calc_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_calc_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_calc_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_calc_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::CharIndices<'a>>;
    fn len(&self) -> usize;

    /// Offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        let len = self.len();
        match self.chars().peek() {
            Some((idx, _)) => *idx,
            None => len,
        }
    }

    fn whitespace(&mut self) {
        while let Some((_, pk)) = self.chars().peek() {
            if !is_calc_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn punctuation(&mut self, kind: Kind) -> Option<Result<Token>> {
        let (start, ch) = self.chars().next()?;
        Some(Ok(Token::new(kind, start..start + ch.len_utf8())))
    }

    fn run(&mut self, kind: Kind, accept: fn(char) -> bool) -> Option<Result<Token>> {
        let (start, _) = self.chars().next()?;
        while let Some((_, pk)) = self.chars().peek() {
            if !accept(*pk) {
                break;
            }
            self.chars().next();
        }
        Some(Ok(Token::new(kind, start..self.offset())))
    }

    fn number(&mut self) -> Option<Result<Token>> {
        self.run(Kind::Number, is_calc_number)
    }

    fn identifier(&mut self) -> Option<Result<Token>> {
        self.run(Kind::Identifier, is_calc_alphanumeric)
    }

    fn unknown(&mut self) -> Option<Result<Token>> {
        let (start, ch) = self.chars().next()?;
        let column: Column = start..start + ch.len_utf8();
        Some(Err(
            error!(UnknownSymbol, ..&column; "NOT AN OPERATOR, NUMBER OR NAME"),
        ))
    }
}

struct CalcLexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
}

impl<'a> Tokenizers<'a> for CalcLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::CharIndices<'a>> {
        &mut self.chars
    }
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a> Iterator for CalcLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let (_, pk) = *self.chars.peek()?;
        if let Some(kind) = Kind::from_char(pk) {
            return self.punctuation(kind);
        }
        if is_calc_number(pk) {
            return self.number();
        }
        if is_calc_alphabetic(pk) {
            return self.identifier();
        }
        self.unknown()
    }
}

impl<'a> CalcLexer<'a> {
    fn lex(s: &str) -> Result<Vec<Token>> {
        CalcLexer {
            chars: s.char_indices().peekable(),
            len: s.len(),
        }
        .collect()
    }
}
