use std::collections::HashMap;

use super::Value;
use crate::parser::ast::Subroutine;
use crate::util::canonical;

/// What a name can be bound to: a value slot or a registered subroutine.
#[derive(Debug, Clone)]
pub enum Slot<'a> {
    Value(Value),
    Subroutine(&'a Subroutine),
}

/// The scope chain: a stack of frames where the bottom frame is the root
/// (global) scope and a frame is pushed per call. Lookups walk from the
/// innermost frame toward the root; names canonicalize on both insert
/// and lookup.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    frames: Vec<HashMap<String, Slot<'a>>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    /// Push a new call frame.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pop the innermost call frame.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Find a slot by walking the chain innermost-first.
    pub fn find(&self, name: &str) -> Option<&Slot<'a>> {
        let key = canonical(name);
        self.frames.iter().rev().find_map(|frame| frame.get(&key))
    }

    /// Find a bound value; array values copy only the handle.
    pub fn find_value(&self, name: &str) -> Option<Value> {
        match self.find(name) {
            Some(Slot::Value(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn find_subroutine(&self, name: &str) -> Option<&'a Subroutine> {
        match self.find(name) {
            Some(Slot::Subroutine(subroutine)) => Some(*subroutine),
            _ => None,
        }
    }

    /// Create or overwrite a binding in the innermost frame.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(canonical(name), Slot::Value(value));
        }
    }

    /// Assign to the innermost frame that already binds the name; a name
    /// bound nowhere lands in the root frame.
    pub fn assign(&mut self, name: &str, value: Value) {
        let key = canonical(name);

        for frame in self.frames.iter_mut().rev() {
            if frame.contains_key(&key) {
                frame.insert(key, Slot::Value(value));
                return;
            }
        }

        self.frames[0].insert(key, Slot::Value(value));
    }

    /// Register a subroutine in the root frame.
    pub fn register(&mut self, subroutine: &'a Subroutine) {
        self.frames[0].insert(
            canonical(&subroutine.name),
            Slot::Subroutine(subroutine),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut env = Environment::new();
        env.set("Counter", Value::Int(7));
        assert_eq!(env.find_value("COUNTER").map(|value| value.as_int()), Some(7));
        assert_eq!(env.find_value("counter").map(|value| value.as_int()), Some(7));
    }

    #[test]
    fn test_inner_frame_shadows_outer() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.push();
        env.set("x", Value::Int(2));
        assert_eq!(env.find_value("x").map(|value| value.as_int()), Some(2));
        env.pop();
        assert_eq!(env.find_value("x").map(|value| value.as_int()), Some(1));
    }

    #[test]
    fn test_assign_to_unbound_name_lands_in_root() {
        let mut env = Environment::new();
        env.push();
        env.assign("x", Value::Int(9));
        env.pop();
        assert_eq!(env.find_value("x").map(|value| value.as_int()), Some(9));
    }

    #[test]
    fn test_assign_updates_innermost_binding() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.push();
        env.set("x", Value::Int(2));
        env.assign("x", Value::Int(3));
        assert_eq!(env.find_value("x").map(|value| value.as_int()), Some(3));
        env.pop();
        assert_eq!(env.find_value("x").map(|value| value.as_int()), Some(1));
    }
}
