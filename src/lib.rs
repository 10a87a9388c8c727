//! # calc
//!
//! An interactive arithmetic evaluator. Each line of input is either an
//! expression or an assignment:
//! ```text
//! Type "quit" to leave.
//! >> x = 10
//! >> (x + 4) * 2
//! 28.000000
//! >> 2 / 0
//! inf
//! ```
//!
//! A line goes through three stages. [`lang::lex`] turns the text into
//! tokens that only hold byte ranges into the line. [`lang::parse`]
//! builds a [`lang::ast::Node`] tree by recursive descent. The
//! [`mach::Runtime`] then executes the tree on an operand stack,
//! storing assignments in a variable table that lasts for the session.
//!
//! Names that were never assigned read as `0`, and division by zero
//! gives an infinity or NaN rather than an error. A line with more than
//! [`lang::MAX_DEPTH`] levels of nesting or more than
//! [`lang::MAX_OPERANDS`] numbers and names is rejected as
//! `EXPRESSION TOO COMPLEX`. Only the exact line `quit` ends the session.
//!
//! ## Precedence quirk
//!
//! The grammar is the classic one with a twist that is kept on purpose
//! for compatibility:
//! ```text
//! statement  := Identifier '=' expr | expr
//! expr       := term ( ('+' | '-') factor )*
//! term       := factor ( ('*' | '/') term )*
//! factor     := Number | Identifier | '(' expr ')'
//! ```
//! The right side of `+` and `-` is a single factor, so `3 + 4 * 2` is
//! a syntax error at the `*` and needs to be written `3 + (4 * 2)`. The
//! right side of `*` and `/` is a whole term, so `8 / 2 / 2` is `8`.

pub mod lang;
pub mod mach;
