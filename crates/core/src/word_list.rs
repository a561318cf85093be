//! Compiled word lists: the body of a colon definition or `{ ... }` block.
//!
//! A list starts open and accepts appends while its definition is being
//! compiled. [`WordList::close`] freezes it; afterwards appends fail with
//! [`RuntimeError::WordListClosed`] and leave the list unchanged.

use crate::error::{RuntimeError, RuntimeResult};
use crate::word::{WordDef, WordRef};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<WordRef>,
    closed: bool,
}

impl WordList {
    /// Create an empty, open list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Read-only view of the elements, in execution order.
    pub fn words(&self) -> &[WordRef] {
        &self.words
    }

    pub fn push(&mut self, word: WordRef) -> RuntimeResult<&mut Self> {
        self.ensure_open()?;
        self.words.push(word);
        Ok(self)
    }

    /// Splice `other` onto the end of this list.
    pub fn append(&mut self, other: &[WordRef]) -> RuntimeResult<&mut Self> {
        self.ensure_open()?;
        self.words.extend(other.iter().cloned());
        Ok(self)
    }

    /// Freeze the list. Closing twice is harmless.
    pub fn close(&mut self) {
        self.closed = true;
        self.words.shrink_to_fit();
    }

    /// An open copy sharing this list's element handles.
    pub fn make_copy(&self) -> Self {
        Self {
            words: self.words.clone(),
            closed: false,
        }
    }

    /// Publish the list as an executable value.
    pub fn into_word(self) -> WordRef {
        Rc::new(WordDef::List(self))
    }

    fn ensure_open(&self) -> RuntimeResult<()> {
        if self.closed {
            return Err(RuntimeError::WordListClosed);
        }
        Ok(())
    }
}

impl From<Vec<WordRef>> for WordList {
    fn from(words: Vec<WordRef>) -> Self {
        Self {
            words,
            closed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nop() -> WordRef {
        WordDef::stack(|_| Ok(()))
    }

    #[test]
    fn starts_open_and_empty() {
        let list = WordList::new();
        assert!(!list.is_closed());
        assert!(list.is_empty());
    }

    #[test]
    fn push_chains() {
        let mut list = WordList::new();
        list.push(nop()).unwrap().push(nop()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn push_after_close_is_rejected() {
        let mut list = WordList::new();
        list.push(nop()).unwrap();
        list.close();
        assert_eq!(list.push(nop()).err(), Some(RuntimeError::WordListClosed));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn append_after_close_is_rejected() {
        let mut list = WordList::new();
        list.close();
        assert_eq!(
            list.append(&[nop(), nop()]).err(),
            Some(RuntimeError::WordListClosed)
        );
        assert!(list.is_empty());
    }

    #[test]
    fn append_preserves_order_and_identity() {
        let a = nop();
        let b = nop();
        let mut list = WordList::from(vec![Rc::clone(&a)]);
        list.append(&[Rc::clone(&b), Rc::clone(&a)]).unwrap();
        let words = list.words();
        assert!(Rc::ptr_eq(&words[0], &a));
        assert!(Rc::ptr_eq(&words[1], &b));
        assert!(Rc::ptr_eq(&words[2], &a));
    }

    #[test]
    fn make_copy_is_open_and_independent() {
        let mut original = WordList::from(vec![nop()]);
        original.close();
        let mut copy = original.make_copy();
        assert!(!copy.is_closed());
        copy.push(nop()).unwrap();
        assert_eq!(copy.len(), 2);
        assert_eq!(original.len(), 1);
        assert!(Rc::ptr_eq(&copy.words()[0], &original.words()[0]));
    }
}
