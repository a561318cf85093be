//! Fift word engine: executable words, word lists and the dictionary.
//!
//! This crate is the part of a Fift interpreter that sits between the
//! tokenizer and the built-in word library:
//!
//! - [`WordDef`] — the four shapes of executable value, shared via [`WordRef`]
//! - [`WordList`] — an open-then-closed list of words forming a definition
//! - [`DictEntry`] — a word plus its "active" (immediate) flag
//! - [`Dictionary`] — the name → entry table, iterated in name order
//! - [`Context`] — per-session state: data stack, dictionary, open
//!   definitions, diagnostics and the interrupt flag
//! - [`pop_exec_token`], [`pop_word_list`], [`push_argcount`] — stack helpers
//!
//! Running a word is a trampoline: each step may return the next word to
//! run, and [`WordDef::run`] loops over those steps, so a definition that
//! ends in a call to itself runs in constant host stack.
//!
//! # Usage
//!
//! ```
//! use fift_core::{Context, RuntimeError};
//!
//! let mut ctx = Context::new();
//! ctx.dictionary.define_stack_word("2*", |s| {
//!     let n = s.pop_int()?;
//!     s.push_int(n * 2)
//! });
//! ctx.stack.push_int(21).unwrap();
//! ctx.interpret_name("2*").unwrap();
//! assert_eq!(ctx.stack.pop_int().unwrap(), 42);
//!
//! assert_eq!(
//!     ctx.interpret_name("nope"),
//!     Err(RuntimeError::UndefinedWord("nope".into()))
//! );
//! ```

pub mod context;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod interop;
pub mod stack;
pub mod type_tag;
pub mod value;
pub mod word;
pub mod word_list;

// Re-export commonly used types at the crate root.
pub use context::Context;
pub use dictionary::Dictionary;
pub use entry::DictEntry;
pub use error::{RuntimeError, RuntimeResult};
pub use interop::{pop_exec_token, pop_word_list, push_argcount};
pub use stack::{Stack, DEFAULT_MAX_STACK_DEPTH};
pub use type_tag::TypeTag;
pub use value::Value;
pub use word::{WordDef, WordRef};
pub use word_list::WordList;
