/*!
## Rust Machine Module

This Rust module executes parsed lines on an operand stack.

*/

mod eval;
mod runtime;
mod stack;
mod state;
mod var;

pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use state::State;
pub use var::Var;
