//! Tags identifying the kind of a value on the data stack.

use std::fmt;

/// Identifies the type of a [`Value`](crate::Value).
///
/// Stack helpers compare tags before popping, so a mismatch can be
/// reported without touching the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The null value.
    Null,
    /// Signed 64-bit integer.
    Int,
    /// Immutable string.
    Str,
    /// Shared tuple of values.
    Tuple,
    /// Execution token (any word variant, including word lists).
    WordDef,
}

/// All type tags, in definition order.
pub const ALL_TYPE_TAGS: [TypeTag; 5] = [
    TypeTag::Null,
    TypeTag::Int,
    TypeTag::Str,
    TypeTag::Tuple,
    TypeTag::WordDef,
];

impl TypeTag {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Int => "integer",
            TypeTag::Str => "string",
            TypeTag::Tuple => "tuple",
            TypeTag::WordDef => "execution token",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct() {
        for (i, a) in ALL_TYPE_TAGS.iter().enumerate() {
            for b in &ALL_TYPE_TAGS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(TypeTag::Int.to_string(), "integer");
        assert_eq!(TypeTag::WordDef.to_string(), "execution token");
    }
}
