use super::State;
use crate::lang::{ast::Node, Error};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

impl Node {
    /// Leaves the value of an expression on the operand stack.
    /// An assignment consumes its value and pushes nothing.
    pub fn execute(&self, state: &mut State) -> Result<()> {
        match self {
            Node::Number(_, n) => {
                trace!("push {}", n);
                state.stack.push(*n)
            }
            Node::Var(_, name) => {
                let val = state.vars.fetch(name);
                trace!("push {} = {}", name, val);
                state.stack.push(val)
            }
            Node::Binary(_, op, lhs, rhs) => {
                lhs.execute(state)?;
                rhs.execute(state)?;
                let (lhs, rhs) = state.stack.pop_2()?;
                let val = op.apply(lhs, rhs);
                trace!("{} {} {} = {}", lhs, op, rhs, val);
                state.stack.push(val)
            }
            Node::Assign(_, name, rhs) => {
                rhs.execute(state)?;
                let val = state.stack.pop()?;
                trace!("store {} = {}", name, val);
                state.vars.store(name, val)
            }
        }
    }
}
