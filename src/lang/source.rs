use super::{Column, Error};

/// ## Source context
///
/// Owns the text of one input line. Tokens and AST nodes refer back
/// into it with a [`Column`] instead of carrying their own copies.

#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    src: String,
}

impl Source {
    pub fn new<S: Into<String>>(src: S) -> Source {
        Source { src: src.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.src
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Column covering the end of the text, used to report a missing token.
    pub fn end(&self) -> Column {
        self.src.len()..self.src.len()
    }

    pub fn slice(&self, column: &Column) -> Result<&str, Error> {
        match self.src.get(column.clone()) {
            Some(s) => Ok(s),
            None => Err(error!(InternalError, ..column; "RANGE OUTSIDE OF SOURCE")),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let source = Source::new("abc = 12.5");
        assert_eq!(source.slice(&(0..3)).unwrap(), "abc");
        assert_eq!(source.slice(&(6..10)).unwrap(), "12.5");
        assert_eq!(source.slice(&(4..4)).unwrap(), "");
    }

    #[test]
    fn test_slice_out_of_range() {
        let source = Source::new("1+2");
        assert!(source.slice(&(2..9)).is_err());
    }

    #[test]
    fn test_end() {
        let source = Source::new("1 +");
        assert_eq!(source.end(), 3..3);
    }
}
