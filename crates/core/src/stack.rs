//! The data stack shared by all words of a session.

use crate::error::{RuntimeError, RuntimeResult};
use crate::type_tag::TypeTag;
use crate::value::Value;
use std::rc::Rc;

/// Default maximum stack depth.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 1 << 20;

/// Operand stack. Index 0 is the bottom.
#[derive(Debug, Clone)]
pub struct Stack {
    items: Vec<Value>,
    limit: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create an empty stack with [`DEFAULT_MAX_STACK_DEPTH`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_STACK_DEPTH)
    }

    /// Create an empty stack holding at most `limit` values.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Fail unless at least `needed` values are present.
    pub fn check_underflow(&self, needed: usize) -> RuntimeResult<()> {
        if self.items.len() < needed {
            return Err(RuntimeError::StackUnderflow {
                needed,
                depth: self.items.len(),
            });
        }
        Ok(())
    }

    /// Push a value, checking for overflow.
    pub fn push(&mut self, value: Value) -> RuntimeResult<()> {
        if self.items.len() >= self.limit {
            return Err(RuntimeError::StackOverflow { limit: self.limit });
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> RuntimeResult<Value> {
        self.items.pop().ok_or(RuntimeError::StackUnderflow {
            needed: 1,
            depth: 0,
        })
    }

    /// Borrow the top value.
    pub fn peek(&self) -> RuntimeResult<&Value> {
        self.items.last().ok_or(RuntimeError::StackUnderflow {
            needed: 1,
            depth: 0,
        })
    }

    pub fn push_int(&mut self, n: i64) -> RuntimeResult<()> {
        self.push(Value::Int(n))
    }

    pub fn pop_int(&mut self) -> RuntimeResult<i64> {
        match self.peek()? {
            Value::Int(n) => {
                let n = *n;
                self.items.pop();
                Ok(n)
            }
            other => Err(RuntimeError::TypeMismatch {
                expected: TypeTag::Int,
                found: other.type_tag(),
            }),
        }
    }

    /// Push a flag using the Forth convention: true is -1, false is 0.
    pub fn push_bool(&mut self, flag: bool) -> RuntimeResult<()> {
        self.push_int(if flag { -1 } else { 0 })
    }

    /// Pop an integer and interpret any non-zero value as true.
    pub fn pop_bool(&mut self) -> RuntimeResult<bool> {
        Ok(self.pop_int()? != 0)
    }

    pub fn push_str(&mut self, s: &str) -> RuntimeResult<()> {
        self.push(Value::Str(Rc::from(s)))
    }

    pub fn pop_str(&mut self) -> RuntimeResult<Rc<str>> {
        match self.peek()? {
            Value::Str(s) => {
                let s = Rc::clone(s);
                self.items.pop();
                Ok(s)
            }
            other => Err(RuntimeError::TypeMismatch {
                expected: TypeTag::Str,
                found: other.type_tag(),
            }),
        }
    }
}
