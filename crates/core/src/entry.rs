//! Dictionary entries: an executable value plus the "active" flag.

use crate::context::Context;
use crate::error::RuntimeResult;
use crate::stack::Stack;
use crate::word::{WordDef, WordRef};
use std::rc::Rc;

/// A word as bound in the dictionary.
///
/// Active entries run as soon as the interpreter meets them, even while a
/// definition is being compiled; ordinary entries are compiled into the
/// open definition instead. Any word variant may be active.
#[derive(Debug, Clone)]
pub struct DictEntry {
    def: WordRef,
    active: bool,
}

impl DictEntry {
    pub fn new(def: WordRef, active: bool) -> Self {
        Self { def, active }
    }

    /// Ordinary (non-active) entry for an existing word.
    pub fn ordinary(def: WordRef) -> Self {
        Self::new(def, false)
    }

    /// Ordinary entry wrapping a stack function.
    pub fn from_stack_fn<F>(f: F) -> Self
    where
        F: Fn(&mut Stack) -> RuntimeResult<()> + 'static,
    {
        Self::ordinary(WordDef::stack(f))
    }

    pub fn from_context_fn<F>(f: F, active: bool) -> Self
    where
        F: Fn(&mut Context) -> RuntimeResult<()> + 'static,
    {
        Self::new(WordDef::context(f), active)
    }

    pub fn from_context_tail_fn<F>(f: F, active: bool) -> Self
    where
        F: Fn(&mut Context) -> RuntimeResult<Option<WordRef>> + 'static,
    {
        Self::new(WordDef::context_tail(f), active)
    }

    /// A new handle to the held word.
    pub fn get_def(&self) -> WordRef {
        Rc::clone(&self.def)
    }

    /// Consume the entry, moving its handle out without a refcount bump.
    pub fn into_def(self) -> WordRef {
        self.def
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run the held word to completion.
    pub fn invoke(&self, ctx: &mut Context) -> RuntimeResult<()> {
        self.def.run(ctx)
    }
}
