use super::{ast::*, token::*, Column, Error, Source};
use log::debug;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of parentheses and `*`/`/` chains on one line.
pub const MAX_DEPTH: usize = 100;

/// Most numbers and names on one line. Every tree walk, and the
/// operand stack, stays within this many levels.
pub const MAX_OPERANDS: usize = 500;

pub fn parse(source: &Source, tokens: &[Token]) -> Result<Node> {
    let node = Parser::parse(source, tokens)?;
    debug!("ast: {}", node);
    Ok(node)
}

struct Parser<'a> {
    source: &'a Source,
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    operands: usize,
}

impl<'a> Parser<'a> {
    fn parse(source: &'a Source, tokens: &'a [Token]) -> Result<Node> {
        let mut parse = Parser {
            source,
            tokens,
            pos: 0,
            depth: 0,
            operands: 0,
        };
        let node = parse.statement()?;
        if let Some(t) = parse.peek() {
            return Err(error!(SyntaxError, ..&t.range; "UNEXPECTED TOKEN AFTER EXPRESSION"));
        }
        Ok(node)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_second(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let t = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(t)
    }

    fn end_of_input(&self, message: &'static str) -> Error {
        error!(UnexpectedEnd, ..&self.source.end(); message)
    }

    fn nest(&mut self, column: &Column) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(error!(TooComplex, ..column; "NESTED TOO DEEPLY"));
        }
        Ok(())
    }

    fn unnest(&mut self) {
        self.depth -= 1;
    }

    fn operand(&mut self, column: &Column) -> Result<()> {
        self.operands += 1;
        if self.operands > MAX_OPERANDS {
            return Err(error!(TooComplex, ..column; "TOO MANY OPERANDS"));
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<Node> {
        match self.peek_second() {
            Some(t) if t.is(Kind::Equals) => self.assignment(),
            _ => self.expression(),
        }
    }

    fn assignment(&mut self) -> Result<Node> {
        let (column, name) = self.ident()?;
        self.expect(Kind::Equals)?;
        let rhs = self.expression()?;
        Ok(Node::Assign(column, name, Box::new(rhs)))
    }

    // The right operand of `+` and `-` is a single factor, so `1 + 2 * 3`
    // stops before the `*` and is rejected as trailing input.
    fn expression(&mut self) -> Result<Node> {
        let mut lhs = self.term()?;
        while let Some(token) = self.peek() {
            let op = match token.kind {
                Kind::Plus => BinaryOp::Add,
                Kind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.next();
            let rhs = self.factor()?;
            lhs = Node::Binary(token.range.clone(), op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // The right operand of `*` and `/` recurses into a whole term, so
    // `8 / 2 / 2` groups as `8 / (2 / 2)`.
    fn term(&mut self) -> Result<Node> {
        let mut lhs = self.factor()?;
        while let Some(token) = self.peek() {
            let op = match token.kind {
                Kind::Asterisk => BinaryOp::Mul,
                Kind::Solidus => BinaryOp::Div,
                _ => break,
            };
            self.next();
            self.nest(&token.range)?;
            let rhs = self.term()?;
            self.unnest();
            lhs = Node::Binary(token.range.clone(), op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Node> {
        let token = match self.next() {
            Some(t) => t,
            None => return Err(self.end_of_input("EXPECTED EXPRESSION")),
        };
        let column = token.range.clone();
        use Kind::*;
        match token.kind {
            Number => {
                self.operand(&column)?;
                Node::for_literal(column, token.lexeme(self.source)?)
            }
            Identifier => {
                self.operand(&column)?;
                Ok(Node::Var(column, token.lexeme(self.source)?.into()))
            }
            LeftParen => {
                self.nest(&column)?;
                let expr = self.expression()?;
                self.expect(RightParen)?;
                self.unnest();
                Ok(expr)
            }
            Plus | Minus | Asterisk | Solidus | RightParen | Equals => {
                Err(error!(SyntaxError, ..&column; "UNEXPECTED TOKEN IN EXPRESSION"))
            }
        }
    }

    fn ident(&mut self) -> Result<(Column, Rc<str>)> {
        match self.next() {
            Some(t) if t.is(Kind::Identifier) => Ok((t.range.clone(), t.lexeme(self.source)?.into())),
            Some(t) => Err(error!(SyntaxError, ..&t.range; "EXPECTED IDENTIFIER BEFORE '='")),
            None => Err(self.end_of_input("EXPECTED IDENTIFIER")),
        }
    }

    fn expect(&mut self, kind: Kind) -> Result<()> {
        use Kind::*;
        let message = match kind {
            Number | Identifier => "EXPECTED EXPRESSION",
            Plus | Minus | Asterisk | Solidus => "EXPECTED OPERATOR",
            LeftParen => "EXPECTED OPENING PARENTHESIS",
            RightParen => "EXPECTED CLOSING PARENTHESIS",
            Equals => "EXPECTED '='",
        };
        match self.next() {
            Some(t) if t.is(kind) => Ok(()),
            Some(t) => Err(error!(SyntaxError, ..&t.range; message)),
            None => Err(self.end_of_input(message)),
        }
    }
}

impl Node {
    fn for_literal(column: Column, s: &str) -> Result<Node> {
        match s.parse::<f64>() {
            Ok(n) => Ok(Node::Number(column, n)),
            Err(_) => Err(error!(InvalidNumber, ..&column; "MALFORMED NUMERAL")),
        }
    }
}
