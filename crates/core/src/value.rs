//! Values that live on the data stack.

use crate::type_tag::TypeTag;
use crate::word::WordRef;
use std::fmt;
use std::rc::Rc;

/// Runtime value representation.
///
/// Heap-backed variants are reference counted, so duplicating a value on
/// the stack never deep-copies it.
#[derive(Clone)]
pub enum Value {
    /// The null value.
    Null,
    /// Signed 64-bit integer.
    Int(i64),
    /// Immutable string.
    Str(Rc<str>),
    /// Shared tuple of values.
    Tuple(Rc<Vec<Value>>),
    /// Execution token.
    WordDef(WordRef),
}

// Execution tokens compare by handle identity: two separately built words
// with the same behavior are different words.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::WordDef(a), Value::WordDef(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Value {
    /// Returns the type tag for this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Int(_) => TypeTag::Int,
            Value::Str(_) => TypeTag::Str,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::WordDef(_) => TypeTag::WordDef,
        }
    }

    /// Borrow the execution token, if this is one.
    pub fn as_word_def(&self) -> Option<&WordRef> {
        match self {
            Value::WordDef(def) => Some(def),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("(null)"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Tuple(items) => f.debug_list().entries(items.iter()).finish(),
            Value::WordDef(def) => write!(f, "{def:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<WordRef> for Value {
    fn from(def: WordRef) -> Self {
        Value::WordDef(def)
    }
}
