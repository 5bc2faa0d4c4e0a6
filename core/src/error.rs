//! Error types for declaration and parsing.
//!
//! Every failure aborts the operation that raised it. Values are `Copy` so
//! the parse path never allocates, even when it fails.

use thiserror::Error;

/// Errors raised while declaring options/arguments or parsing a token vector.
///
/// Asking for help is not an error; see
/// [`Outcome::HelpRequested`](crate::Outcome::HelpRequested).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The integer parser could not read a single digit.
    #[error("token parse failed for integer")]
    IntParseFailed,

    /// The float parser could not read a number.
    #[error("token parse failed for float")]
    FloatParseFailed,

    /// An explicit boolean value was not one of `T`, `t`, `true`, `1`,
    /// `F`, `f`, `false`, `0`.
    #[error("token parse failed for boolean")]
    BoolParseFailed,

    /// A text token is longer than its buffer's capacity.
    #[error("token parse failed for str: buf too small ({len} bytes, capacity {capacity})")]
    StrTooLong { len: usize, capacity: usize },

    /// A declaration was attempted on a full registry.
    #[error("registry full")]
    RegistryFull,

    /// A scanned option name has no registration.
    #[error("token not found")]
    OptionNotFound,

    /// An option was declared with an empty name.
    #[error("option name required")]
    NameRequired,

    /// An option was declared under a name that is already registered.
    #[error("option name already registered")]
    DuplicateName,

    /// Scanning finished without matching every required option.
    #[error("unseen required options")]
    UnseenRequiredOptions,

    /// A valued option was the last token, with nothing left to read.
    #[error("out of bounds during parse")]
    OutOfBounds,

    /// The same option matched twice in one token vector.
    #[error("option was already seen")]
    OptionAlreadySeen,

    /// The trailing token count differs from the declared positional count.
    #[error("misconfigured positional arguments: expected {expected}, found {found}")]
    ArgCount { expected: usize, found: usize },

    /// A declared option name exceeds the configured maximum.
    #[error("token longer than allowed max")]
    TokenTooLong,

    /// A declared option description exceeds the configured maximum.
    #[error("usage string longer than allowed max")]
    UsageTooLong,
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(
            Error::ArgCount {
                expected: 2,
                found: 3
            }
            .to_string(),
            "misconfigured positional arguments: expected 2, found 3"
        );
        assert_eq!(
            Error::StrTooLong {
                len: 40,
                capacity: 32
            }
            .to_string(),
            "token parse failed for str: buf too small (40 bytes, capacity 32)"
        );
        assert_eq!(Error::OutOfBounds.to_string(), "out of bounds during parse");
    }
}
