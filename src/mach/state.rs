use super::{Stack, Var};
use crate::lang::MAX_OPERANDS;

/// ## Execution state
///
/// The operand stack is scratch space for a single line. It never holds
/// more values than a line can have operands. The variables survive
/// from one line to the next.

#[derive(Debug)]
pub struct State {
    pub(crate) stack: Stack<f64>,
    pub(crate) vars: Var,
}

impl Default for State {
    fn default() -> State {
        State {
            stack: Stack::new(MAX_OPERANDS),
            vars: Var::new(),
        }
    }
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }
}
