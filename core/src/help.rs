//! Help metadata and the default help layout.
//!
//! [`Usage`] is a snapshot of what a command declared, taken without
//! borrowing caller storage, so it can be handed to whatever prints help
//! after the command itself is gone. It serializes with serde for
//! presenters that want structured data instead of the text layout.

use std::fmt;

use serde::Serialize;

use crate::option::{Opt, OptKind};
use crate::value::ValueKind;

/// Display metadata for one declared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub kind: OptKind,
    pub value: ValueKind,
}

impl From<&Opt<'_>> for OptionInfo {
    fn from(opt: &Opt<'_>) -> Self {
        Self {
            name: opt.name,
            description: opt.description,
            required: opt.required,
            kind: opt.kind,
            value: opt.target.kind(),
        }
    }
}

/// Command description, usage line and options, in registration order.
///
/// The built-in `-h`/`--help` entries are not listed; the text layout
/// always prints them first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage<const N: usize> {
    pub description: &'static str,
    pub usage: &'static str,
    pub options: heapless::Vec<OptionInfo, N>,
}

impl<const N: usize> Usage<N> {
    /// Writes the help text for `program` into `out`.
    ///
    /// ```text
    /// {description}
    ///
    /// Usage:
    ///     {program} {usage}
    /// Options:
    ///     -h,--help   Print usage and exit.
    ///     -{name}     {description}
    /// ```
    ///
    /// Indentation uses tab characters.
    pub fn render<W: fmt::Write>(&self, program: &str, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.description)?;
        writeln!(out)?;
        writeln!(out, "Usage:")?;
        writeln!(out, "\t{} {}", program, self.usage)?;
        writeln!(out, "Options:")?;
        writeln!(out, "\t-h,--help\tPrint usage and exit.")?;
        for opt in &self.options {
            writeln!(out, "\t-{}\t\t{}", opt.name, opt.description)?;
        }
        Ok(())
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering help for
    /// `program`.
    pub fn display<'u>(&'u self, program: &'u str) -> HelpDisplay<'u, N> {
        HelpDisplay {
            usage: self,
            program,
        }
    }
}

/// Helper returned by [`Usage::display`].
#[derive(Debug, Clone, Copy)]
pub struct HelpDisplay<'u, const N: usize> {
    usage: &'u Usage<N>,
    program: &'u str,
}

impl<const N: usize> fmt::Display for HelpDisplay<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.usage.render(self.program, f)
    }
}
