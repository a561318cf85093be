//! Runtime errors for the Fift word engine.
//!
//! A single error type is shared by the data stack, the word variants and
//! the dictionary helpers, so a failure anywhere in a `run` chain surfaces
//! to the caller unchanged.

use crate::type_tag::TypeTag;
use thiserror::Error;

/// Errors that abort the execution of a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A word needed more operands than the stack holds.
    #[error("stack underflow: need {needed} values, have {depth}")]
    StackUnderflow { needed: usize, depth: usize },

    /// A push would exceed the configured stack limit.
    #[error("stack overflow (limit {limit})")]
    StackOverflow { limit: usize },

    /// The value on top of the stack has the wrong tag.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TypeTag, found: TypeTag },

    /// An execution token was found where a word list was required.
    #[error("word list expected, found {found} execution token")]
    NotAWordList { found: &'static str },

    /// Append attempted on a word list that has already been closed.
    #[error("cannot append to a closed word list")]
    WordListClosed,

    /// Name resolution failed.
    #[error("undefined word `{0}`")]
    UndefinedWord(String),

    /// A definition was closed while none was open.
    #[error("no definition is being compiled")]
    NotCompiling,

    /// The session's interrupt flag was raised while running.
    #[error("execution interrupted")]
    Interrupted,

    /// Free-form failure raised by a word implementation.
    #[error("{0}")]
    Failed(String),
}

/// Shorthand used throughout the crate.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
