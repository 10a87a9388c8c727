use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand stack
///
/// Holds intermediate values while one line is executed. Pushing past
/// `limit` values is an `OutOfMemory` error and popping an empty stack
/// is an `InternalError`.

pub struct Stack<T> {
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(limit: usize) -> Stack<T> {
        Stack {
            limit,
            vec: Vec::with_capacity(limit.min(64)),
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        self.vec
            .pop()
            .ok_or_else(|| error!(InternalError; "OPERAND STACK UNDERFLOW"))
    }
    /// Pops the right operand first, then the left.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        Ok((lhs, rhs))
    }
}
