use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use super::RuntimeError;

static EOLN_SENTINEL: OnceLock<Arc<str>> = OnceLock::new();

/// A runtime value. Array values are handles: cloning one aliases the
/// underlying object.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
    Str(Arc<str>),
    Array(Rc<RefCell<ArrayObject>>),
    None,
}

impl Value {
    pub fn string(text: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(text.as_ref()))
    }

    /// The end-of-line constant. One shared allocation for the whole
    /// process; [`Value::is_eoln`] identifies it by pointer, not content,
    /// so an ordinary `"\n"` string stays an ordinary string.
    pub fn eoln() -> Self {
        Value::Str(EOLN_SENTINEL.get_or_init(|| Arc::from("\n")).clone())
    }

    pub fn is_eoln(&self) -> bool {
        match self {
            Value::Str(text) => EOLN_SENTINEL
                .get()
                .is_some_and(|sentinel| Arc::ptr_eq(sentinel, text)),
            _ => false,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Integer view of a value. Coercion never fails; values without a
    /// numeric reading are zero.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(value) => *value,
            Value::Real(value) => *value as i64,
            Value::Bool(value) => *value as i64,
            _ => 0,
        }
    }

    pub fn as_real(&self) -> f64 {
        match self {
            Value::Int(value) => *value as f64,
            Value::Real(value) => *value,
            Value::Bool(value) => *value as i64 as f64,
            _ => 0.0,
        }
    }

    /// Truth value: booleans as themselves, numbers by non-zero, strings
    /// by non-emptiness.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Real(value) => *value != 0.0,
            Value::Str(text) => !text.is_empty(),
            Value::Array(_) => true,
            Value::None => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Real(value) => write!(f, "{value}"),
            // Booleans print numerically, matching the emitted C's %d.
            Value::Bool(value) => write!(f, "{}", *value as i64),
            Value::Str(text) => f.write_str(text),
            Value::Array(_) => f.write_str("<array>"),
            Value::None => Ok(()),
        }
    }
}

/// A sparse multidimensional array: cells live in a map keyed by the
/// comma-joined index tuple, alongside the declared inclusive bounds.
/// Reads of unset cells yield integer zero.
#[derive(Debug)]
pub struct ArrayObject {
    data: HashMap<String, Value>,
    bounds: Vec<(i64, i64)>,
}

impl ArrayObject {
    pub fn new(bounds: Vec<(i64, i64)>) -> Self {
        Self {
            data: HashMap::new(),
            bounds,
        }
    }

    pub fn handle(bounds: Vec<(i64, i64)>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(bounds)))
    }

    pub fn bounds(&self) -> &[(i64, i64)] {
        &self.bounds
    }

    pub fn get(&self, indices: &[i64]) -> Result<Value, RuntimeError> {
        self.validate(indices)?;
        Ok(self
            .data
            .get(&Self::key(indices))
            .cloned()
            .unwrap_or(Value::Int(0)))
    }

    pub fn set(&mut self, indices: &[i64], value: Value) -> Result<(), RuntimeError> {
        self.validate(indices)?;
        self.data.insert(Self::key(indices), value);
        Ok(())
    }

    fn key(indices: &[i64]) -> String {
        indices
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn validate(&self, indices: &[i64]) -> Result<(), RuntimeError> {
        if indices.len() != self.bounds.len() {
            return Err(RuntimeError(format!(
                "Array expects {} indices, got {}",
                self.bounds.len(),
                indices.len()
            )));
        }

        for (dimension, (index, (from, to))) in
            indices.iter().zip(self.bounds.iter()).enumerate()
        {
            if index < from || index > to {
                return Err(RuntimeError(format!(
                    "Index {} out of bounds for dimension {} [{}..{}]",
                    index,
                    dimension + 1,
                    from,
                    to
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eoln_is_identified_by_allocation() {
        let sentinel = Value::eoln();
        assert!(sentinel.is_eoln());
        assert!(!Value::string("\n").is_eoln());
    }

    #[test]
    fn test_coercions_never_fail() {
        assert_eq!(Value::string("abc").as_int(), 0);
        assert_eq!(Value::None.as_int(), 0);
        assert_eq!(Value::Bool(true).as_real(), 1.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(-1).truthy());
        assert!(!Value::Int(0).truthy());
        assert!(Value::string("x").truthy());
        assert!(!Value::string("").truthy());
    }

    #[test]
    fn test_unset_cell_reads_zero() {
        let array = ArrayObject::new(vec![(2, 4)]);
        assert_eq!(array.get(&[3]).expect("in bounds").as_int(), 0);
    }

    #[test]
    fn test_bounds_violation() {
        let mut array = ArrayObject::new(vec![(2, 4)]);
        assert!(array.get(&[1]).is_err());
        assert!(array.get(&[5]).is_err());
        assert!(array.set(&[2, 2], Value::Int(1)).is_err());
    }
}
