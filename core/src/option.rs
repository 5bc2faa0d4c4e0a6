//! Declared options and positional arguments.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::{BoundValue, ValueKind};

/// Names auto-registered on every command to request help.
pub const HELP_NAMES: [&str; 2] = ["h", "help"];

/// Whether an option consumes a value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptKind {
    /// Presence is the signal; any attached value is ignored.
    Flag,
    /// Takes a value, either inline (`-name=value`) or as the next token.
    Valued,
}

/// A named option bound to caller storage.
///
/// Names and descriptions are `'static` so help metadata can outlive the
/// borrows of caller storage. `seen` starts `false` and flips exactly once,
/// on the first successful match during a parse. It is never reset.
#[derive(Debug)]
pub struct Opt<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptKind,
    pub required: bool,
    pub seen: bool,
    pub target: BoundValue<'a>,
}

impl<'a> Opt<'a> {
    /// Creates an unseen option.
    pub fn new(
        name: &'static str,
        description: &'static str,
        kind: OptKind,
        required: bool,
        target: BoundValue<'a>,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            required,
            seen: false,
            target,
        }
    }

    /// Creates one of the built-in help entries.
    pub(crate) fn help(name: &'static str) -> Self {
        Self::new(name, "", OptKind::Flag, false, BoundValue::Unbound)
    }

    /// Returns `true` for the auto-registered `h`/`help` entries.
    pub fn is_help(&self) -> bool {
        HELP_NAMES.contains(&self.name) && self.target.kind() == ValueKind::Unbound
    }

    /// Records a match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionAlreadySeen`] if the option already matched.
    pub fn mark_seen(&mut self) -> Result<()> {
        if self.seen {
            return Err(Error::OptionAlreadySeen);
        }
        self.seen = true;
        Ok(())
    }
}

/// A positional argument. Its position in the registry is its identity.
#[derive(Debug)]
pub struct Arg<'a> {
    pub target: BoundValue<'a>,
}

impl<'a> Arg<'a> {
    pub fn new(target: BoundValue<'a>) -> Self {
        Self { target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_seen_only_once() {
        let mut n = 0;
        let mut opt = Opt::new("n", "count", OptKind::Valued, false, BoundValue::Int(&mut n));
        assert!(!opt.seen);
        assert!(opt.mark_seen().is_ok());
        assert!(opt.seen);
        assert_eq!(opt.mark_seen(), Err(Error::OptionAlreadySeen));
    }

    #[test]
    fn test_help_entries_are_recognized() {
        assert!(Opt::help("h").is_help());
        assert!(Opt::help("help").is_help());

        let mut flag = false;
        let user = Opt::new("verbose", "", OptKind::Flag, false, BoundValue::Bool(&mut flag));
        assert!(!user.is_help());
    }
}
