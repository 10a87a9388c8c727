use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Lives for the whole session. Reading a name that was never
/// assigned yields `0`.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&self, var_name: &str) -> f64 {
        self.get(var_name).unwrap_or(0.0)
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: f64) -> Result<()> {
        if self.vars.len() >= u16::max_value() as usize && !self.vars.contains_key(var_name) {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_reads_zero() {
        let var = Var::new();
        assert_eq!(var.fetch("nothing"), 0.0);
        assert_eq!(var.get("nothing"), None);
    }

    #[test]
    fn test_store_overwrites() {
        let mut var = Var::new();
        let name: Rc<str> = "x".into();
        var.store(&name, 1.5).unwrap();
        var.store(&name, -2.0).unwrap();
        assert_eq!(var.fetch("x"), -2.0);
        assert_eq!(var.len(), 1);
        assert!(!var.is_empty());
    }
}
