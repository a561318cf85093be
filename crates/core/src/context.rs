//! Interpreter context: the per-session state every context word sees.
//!
//! A [`Context`] owns the data stack, the dictionary, the stack of open
//! definitions and a diagnostics buffer. The outer interpreter feeds it
//! names through [`Context::interpret_name`], which either runs the word or
//! compiles it into the innermost open definition.

use crate::dictionary::Dictionary;
use crate::error::{RuntimeError, RuntimeResult};
use crate::stack::Stack;
use crate::word::WordRef;
use crate::word_list::WordList;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{trace, warn};

pub struct Context {
    pub stack: Stack,
    pub dictionary: Dictionary,
    /// Open definitions, innermost last.
    compiling: Vec<WordList>,
    diagnostics: Vec<String>,
    /// Nesting of `interpret_name` calls made from inside active words.
    interpret_depth: usize,
    interrupted: Arc<AtomicBool>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::with_stack(Stack::new())
    }

    /// Create a context around an existing stack, e.g. one with a custom
    /// depth limit.
    pub fn with_stack(stack: Stack) -> Self {
        Self {
            stack,
            dictionary: Dictionary::new(),
            compiling: Vec::new(),
            diagnostics: Vec::new(),
            interpret_depth: 0,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    // ---- compilation state ----

    pub fn is_compiling(&self) -> bool {
        !self.compiling.is_empty()
    }

    /// Nesting depth of open definitions.
    pub fn compile_depth(&self) -> usize {
        self.compiling.len()
    }

    /// Open a new (possibly nested) definition.
    pub fn begin_definition(&mut self) {
        self.compiling.push(WordList::new());
        trace!(depth = self.compiling.len(), "definition opened");
    }

    /// Close the innermost definition and publish it.
    pub fn end_definition(&mut self) -> RuntimeResult<WordRef> {
        let mut list = self.compiling.pop().ok_or(RuntimeError::NotCompiling)?;
        list.close();
        trace!(depth = self.compiling.len(), len = list.len(), "definition closed");
        Ok(list.into_word())
    }

    pub fn current_definition(&self) -> Option<&WordList> {
        self.compiling.last()
    }

    pub fn current_definition_mut(&mut self) -> Option<&mut WordList> {
        self.compiling.last_mut()
    }

    /// Append `word` to the innermost open definition.
    pub fn compile_word(&mut self, word: WordRef) -> RuntimeResult<()> {
        self.current_definition_mut()
            .ok_or(RuntimeError::NotCompiling)?
            .push(word)?;
        Ok(())
    }

    /// Splice the body of a word list into the open definition; other
    /// words are appended as-is.
    pub fn compile_inline(&mut self, word: &WordRef) -> RuntimeResult<()> {
        let current = self
            .compiling
            .last_mut()
            .ok_or(RuntimeError::NotCompiling)?;
        match word.as_list() {
            Some(body) => current.append(body.words())?,
            None => current.push(Rc::clone(word))?,
        };
        Ok(())
    }

    // ---- execution ----

    /// Run `word` to completion.
    pub fn execute(&mut self, word: &WordRef) -> RuntimeResult<()> {
        word.run(self)
    }

    /// Resolve `name` and either run it or compile it.
    ///
    /// Active words and all words outside a definition run immediately;
    /// otherwise the word is appended to the open definition. A failure is
    /// recorded as a diagnostic once, by the outermost call, even when
    /// active words interpret further names themselves.
    pub fn interpret_name(&mut self, name: &str) -> RuntimeResult<()> {
        self.interpret_depth += 1;
        let result = self.dispatch_name(name);
        self.interpret_depth -= 1;
        if let (Err(err), 0) = (&result, self.interpret_depth) {
            let message = match err {
                RuntimeError::UndefinedWord(missing) if missing == name => err.to_string(),
                _ => format!("{name}: {err} (stack depth {})", self.stack.depth()),
            };
            self.diagnose(message);
        }
        result
    }

    fn dispatch_name(&mut self, name: &str) -> RuntimeResult<()> {
        let entry = self
            .dictionary
            .lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedWord(name.to_string()))?;
        if entry.is_active() || !self.is_compiling() {
            entry.invoke(self)
        } else {
            self.compile_word(entry.into_def())
        }
    }

    // ---- interrupts ----

    /// Shared flag that makes the running word fail with
    /// [`RuntimeError::Interrupted`] at its next step. May be set from
    /// another thread or a signal handler.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }

    pub fn clear_interrupt(&self) {
        self.interrupted.store(false, Ordering::Relaxed);
    }

    /// Consume a pending interrupt, turning it into an error.
    pub(crate) fn check_interrupt(&self) -> RuntimeResult<()> {
        if self.interrupted.load(Ordering::Relaxed)
            && self.interrupted.swap(false, Ordering::Relaxed)
        {
            warn!("execution interrupted");
            return Err(RuntimeError::Interrupted);
        }
        Ok(())
    }

    // ---- diagnostics ----

    pub fn diagnose(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "diagnostic");
        self.diagnostics.push(message);
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }
}
