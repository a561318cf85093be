//! The name → entry table.
//!
//! Names are matched exactly as given. Iteration is in lexicographic
//! (byte) order of names regardless of insertion order. Redefining a name
//! replaces the entry; handles obtained earlier stay valid because entries
//! share ownership of their words rather than lending them.

use crate::context::Context;
use crate::entry::DictEntry;
use crate::error::RuntimeResult;
use crate::stack::Stack;
use crate::word::{WordDef, WordRef};
use std::collections::btree_map::{self, BTreeMap};
use std::rc::Rc;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Dictionary {
    words: BTreeMap<String, DictEntry>,
    nop: WordRef,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            words: BTreeMap::new(),
            nop: WordDef::stack(|_| Ok(())),
        }
    }

    /// The shared "do nothing" word. Every call returns the same handle.
    pub fn nop(&self) -> WordRef {
        Rc::clone(&self.nop)
    }

    /// Resolve a name. Absence is a normal result.
    pub fn lookup(&self, name: &str) -> Option<&DictEntry> {
        self.words.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bind `name` to `entry`, returning the entry it replaced.
    pub fn define(&mut self, name: impl Into<String>, entry: DictEntry) -> Option<DictEntry> {
        let name = name.into();
        trace!(name = %name, active = entry.is_active(), "define word");
        match self.words.entry(name) {
            btree_map::Entry::Occupied(mut slot) => {
                debug!(name = %slot.key(), "word redefined");
                Some(slot.insert(entry))
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                None
            }
        }
    }

    pub fn define_stack_word<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Stack) -> RuntimeResult<()> + 'static,
    {
        self.define(name, DictEntry::from_stack_fn(f));
    }

    pub fn define_context_word<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Context) -> RuntimeResult<()> + 'static,
    {
        self.define(name, DictEntry::from_context_fn(f, false));
    }

    pub fn define_context_tail_word<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Context) -> RuntimeResult<Option<WordRef>> + 'static,
    {
        self.define(name, DictEntry::from_context_tail_fn(f, false));
    }

    /// Define an active (immediate) context word.
    pub fn define_active_word<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Context) -> RuntimeResult<()> + 'static,
    {
        self.define(name, DictEntry::from_context_fn(f, true));
    }

    /// Remove `name`. Returns whether a word was removed; a missing name
    /// is not an error.
    pub fn undefine(&mut self, name: &str) -> bool {
        let removed = self.words.remove(name).is_some();
        trace!(name, removed, "undefine word");
        removed
    }

    /// All `(name, entry)` pairs in lexicographic order of names.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DictEntry> {
        self.words.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a DictEntry);
    type IntoIter = btree_map::Iter<'a, String, DictEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
