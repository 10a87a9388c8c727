use super::State;
use crate::lang::{Error, Line};
use log::debug;

/// What the shell should do after a line has been entered.
#[derive(Debug)]
pub enum Event {
    Quit,
    Stopped,
    Print(String),
    Error(Error),
}

/// ## Top level driver
///
/// Runs one line at a time through lexer, parser and evaluator
/// against a single session-wide [`State`].

#[derive(Debug)]
pub struct Runtime {
    state: State,
    precision: usize,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            state: State::default(),
            precision: 6,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Number of fractional digits used when printing results.
    pub fn with_precision(mut self, precision: usize) -> Runtime {
        self.precision = precision;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Only the exact line `quit` ends the session. A line of nothing
    /// but whitespace is skipped.
    pub fn enter(&mut self, input: &str) -> Event {
        if input == "quit" {
            return Event::Quit;
        }
        if input.trim().is_empty() {
            return Event::Stopped;
        }
        match self.evaluate(input) {
            Ok(Some(val)) => Event::Print(self.format(val)),
            Ok(None) => Event::Stopped,
            Err(error) => {
                debug!("{:?} in {:?}", error.kind(), input);
                Event::Error(error)
            }
        }
    }

    /// Returns the value of the line, or `None` when it was an assignment.
    pub fn evaluate(&mut self, input: &str) -> Result<Option<f64>, Error> {
        self.state.stack.clear();
        let line = Line::from_str(input)?;
        let node = line.ast()?;
        node.execute(&mut self.state)?;
        if self.state.stack.is_empty() {
            return Ok(None);
        }
        let val = self.state.stack.pop()?;
        debug_assert!(self.state.stack.is_empty());
        Ok(Some(val))
    }

    pub fn format(&self, val: f64) -> String {
        format!("{:.*}", self.precision, val)
    }
}
