//! Executable values ("words") and the trampoline that runs them.
//!
//! Every word is one of four shapes:
//!
//! - [`WordDef::Stack`]: a function of the data stack only
//! - [`WordDef::Context`]: a function of the whole interpreter context
//! - [`WordDef::ContextTail`]: a context function that may name the word to
//!   run next instead of calling it
//! - [`WordDef::List`]: a compiled [`WordList`]
//!
//! A single step is [`WordDef::run_tail`], which returns the continuation
//! to run in place of returning. [`WordDef::run`] drives steps in a loop, so
//! a chain of tail continuations never grows the host stack.

use crate::context::Context;
use crate::error::RuntimeResult;
use crate::stack::Stack;
use crate::word_list::WordList;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an executable value.
pub type WordRef = Rc<WordDef>;

/// Function of the data stack.
pub type StackWordFn = Box<dyn Fn(&mut Stack) -> RuntimeResult<()>>;

/// Function of the interpreter context.
pub type ContextWordFn = Box<dyn Fn(&mut Context) -> RuntimeResult<()>>;

/// Context function returning an optional continuation.
pub type ContextTailWordFn = Box<dyn Fn(&mut Context) -> RuntimeResult<Option<WordRef>>>;

/// An executable value.
pub enum WordDef {
    Stack(StackWordFn),
    Context(ContextWordFn),
    ContextTail(ContextTailWordFn),
    List(WordList),
}

impl WordDef {
    /// Wrap a stack function.
    pub fn stack<F>(f: F) -> WordRef
    where
        F: Fn(&mut Stack) -> RuntimeResult<()> + 'static,
    {
        Rc::new(WordDef::Stack(Box::new(f)))
    }

    /// Wrap a context function.
    pub fn context<F>(f: F) -> WordRef
    where
        F: Fn(&mut Context) -> RuntimeResult<()> + 'static,
    {
        Rc::new(WordDef::Context(Box::new(f)))
    }

    /// Wrap a context function that selects its own continuation.
    pub fn context_tail<F>(f: F) -> WordRef
    where
        F: Fn(&mut Context) -> RuntimeResult<Option<WordRef>> + 'static,
    {
        Rc::new(WordDef::ContextTail(Box::new(f)))
    }

    /// Perform one step and return the continuation, if any.
    ///
    /// A word list runs all elements but the last to completion and hands
    /// the last one back as the continuation.
    pub fn run_tail(&self, ctx: &mut Context) -> RuntimeResult<Option<WordRef>> {
        match self {
            WordDef::Stack(f) => {
                f(&mut ctx.stack)?;
                Ok(None)
            }
            WordDef::Context(f) => {
                f(ctx)?;
                Ok(None)
            }
            WordDef::ContextTail(f) => f(ctx),
            WordDef::List(list) => {
                let Some((last, init)) = list.words().split_last() else {
                    return Ok(None);
                };
                for word in init {
                    word.run(ctx)?;
                }
                Ok(Some(Rc::clone(last)))
            }
        }
    }

    /// Run to completion.
    ///
    /// This is an explicit loop over [`run_tail`](Self::run_tail); only
    /// non-final elements of nested lists add host stack frames.
    pub fn run(&self, ctx: &mut Context) -> RuntimeResult<()> {
        ctx.check_interrupt()?;
        let mut next = self.run_tail(ctx)?;
        while let Some(word) = next {
            ctx.check_interrupt()?;
            next = word.run_tail(ctx)?;
        }
        Ok(())
    }

    /// Whether this word is a compiled word list.
    pub fn is_list(&self) -> bool {
        matches!(self, WordDef::List(_))
    }

    /// Number of elements for a word list, `None` for other variants.
    pub fn list_size(&self) -> Option<usize> {
        self.as_list().map(WordList::len)
    }

    /// Borrow the word list, `None` for other variants.
    pub fn as_list(&self) -> Option<&WordList> {
        match self {
            WordDef::List(list) => Some(list),
            _ => None,
        }
    }

    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WordDef::Stack(_) => "stack",
            WordDef::Context(_) => "context",
            WordDef::ContextTail(_) => "context-tail",
            WordDef::List(_) => "list",
        }
    }
}

impl fmt::Debug for WordDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordDef::List(list) => write!(f, "<list of {}>", list.len()),
            other => write!(f, "<{} word>", other.kind()),
        }
    }
}
