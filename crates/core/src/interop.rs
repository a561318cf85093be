//! Helpers moving words between the data stack and Rust code.
//!
//! The pop helpers inspect the top value before removing it: on a tag
//! mismatch they fail and the stack is left exactly as it was.

use crate::error::{RuntimeError, RuntimeResult};
use crate::stack::Stack;
use crate::type_tag::TypeTag;
use crate::value::Value;
use crate::word::WordRef;
use std::rc::Rc;

/// Pop an execution token of any variant.
pub fn pop_exec_token(stack: &mut Stack) -> RuntimeResult<WordRef> {
    let top = stack.peek()?;
    let def = top.as_word_def().cloned().ok_or_else(|| mismatch(top))?;
    stack.pop()?;
    Ok(def)
}

/// Pop an execution token that must be a word list.
///
/// Returns the handle that was on the stack, not a copy. To extend a
/// closed list, take [`WordList::make_copy`](crate::WordList::make_copy)
/// of [`WordDef::as_list`](crate::WordDef::as_list).
pub fn pop_word_list(stack: &mut Stack) -> RuntimeResult<WordRef> {
    let def = match stack.peek()? {
        Value::WordDef(def) if def.is_list() => Rc::clone(def),
        Value::WordDef(def) => return Err(RuntimeError::NotAWordList { found: def.kind() }),
        other => return Err(mismatch(other)),
    };
    stack.pop()?;
    Ok(def)
}

/// Push the number of operands a variable-arity word consumed or produced.
pub fn push_argcount(stack: &mut Stack, args: usize) -> RuntimeResult<()> {
    let count = i64::try_from(args)
        .map_err(|_| RuntimeError::Failed(format!("argument count {args} out of range")))?;
    stack.push_int(count)
}

fn mismatch(found: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        expected: TypeTag::WordDef,
        found: found.type_tag(),
    }
}
