//! The consumer-facing command: declare, then parse once.

use tracing::trace;

use crate::engine::{self, Status};
use crate::error::{Error, Result};
use crate::help::{OptionInfo, Usage};
use crate::limits::Limits;
use crate::option::{Arg, HELP_NAMES, Opt, OptKind};
use crate::registry::{ArgumentRegistry, OptionRegistry, Registry};
use crate::value::{BoundValue, TextSlot};

/// Default option capacity, including the two help entries.
pub const DEFAULT_MAX_OPTIONS: usize = 16;

/// Default positional argument capacity.
pub const DEFAULT_MAX_ARGUMENTS: usize = 8;

/// Result of a successful [`Command::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<const N: usize> {
    /// All tokens were bound.
    Done,
    /// `-h` or `--help` was given. Parsing stopped there; the caller should
    /// show the usage and exit successfully.
    HelpRequested(Usage<N>),
}

/// A command line declaration bound to caller storage.
///
/// `OPTS` and `ARGS` fix the registry capacities; `OPTS` includes the `h`
/// and `help` entries every command registers at construction.
///
/// [`parse`](Command::parse) consumes the command: options remember being
/// seen, so a command cannot be parsed twice.
///
/// # Examples
///
/// ```
/// use argbind_core::{Command, Outcome};
///
/// let mut verbose = false;
/// let mut jobs = 1;
/// let mut input: heapless::String<32> = heapless::String::new();
///
/// let mut cmd = Command::new("Builds things.", "[-v] [-jobs N] FILE").unwrap();
/// cmd.add_flag("v", "Verbose output.", &mut verbose).unwrap();
/// cmd.add_int_option("jobs", "Parallel jobs.", &mut jobs, false).unwrap();
/// cmd.add_text_argument(&mut input).unwrap();
///
/// let outcome = cmd.parse(&["build", "-v", "--jobs=4", "main.c"]).unwrap();
/// assert!(matches!(outcome, Outcome::Done));
///
/// assert!(verbose);
/// assert_eq!(jobs, 4);
/// assert_eq!(input.as_str(), "main.c");
/// ```
#[derive(Debug)]
pub struct Command<'a, const OPTS: usize = DEFAULT_MAX_OPTIONS, const ARGS: usize = DEFAULT_MAX_ARGUMENTS>
{
    description: &'static str,
    usage: &'static str,
    limits: Limits,
    opts: OptionRegistry<'a, OPTS>,
    args: ArgumentRegistry<'a, ARGS>,
}

impl<'a> Command<'a> {
    /// Creates a command with default capacities and limits.
    ///
    /// # Errors
    ///
    /// See [`with_limits`](Command::with_limits).
    pub fn new(description: &'static str, usage: &'static str) -> Result<Self> {
        Self::with_limits(description, usage, Limits::default())
    }
}

impl<'a, const OPTS: usize, const ARGS: usize> Command<'a, OPTS, ARGS> {
    /// Creates a command and registers the `h` and `help` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryFull`] if `OPTS` cannot hold the two help
    /// entries.
    pub fn with_limits(
        description: &'static str,
        usage: &'static str,
        limits: Limits,
    ) -> Result<Self> {
        let mut opts = Registry::new();
        for name in HELP_NAMES {
            opts.register(Opt::help(name))?;
        }
        Ok(Self {
            description,
            usage,
            limits,
            opts,
            args: Registry::new(),
        })
    }

    /// Declares an option bound to `target`.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`Error::NameRequired`] for an empty name,
    /// [`Error::RegistryFull`], [`Error::TokenTooLong`],
    /// [`Error::UsageTooLong`], then [`Error::DuplicateName`] when the name
    /// is taken (including by `h`/`help`).
    pub fn add_option(
        &mut self,
        name: &'static str,
        description: &'static str,
        kind: OptKind,
        required: bool,
        target: BoundValue<'a>,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(Error::NameRequired);
        }
        if self.opts.is_full() {
            return Err(Error::RegistryFull);
        }
        if !self.limits.name_fits(name) {
            return Err(Error::TokenTooLong);
        }
        if !self.limits.description_fits(description) {
            return Err(Error::UsageTooLong);
        }
        if self.opts.find(name).is_some() {
            return Err(Error::DuplicateName);
        }

        trace!(option = name, ?kind, required, "declared option");
        self.opts
            .register(Opt::new(name, description, kind, required, target))
    }

    /// Declares a boolean switch. Each occurrence toggles `value`.
    pub fn add_flag(
        &mut self,
        name: &'static str,
        description: &'static str,
        value: &'a mut bool,
    ) -> Result<()> {
        self.add_option(name, description, OptKind::Flag, false, BoundValue::Bool(value))
    }

    /// Declares a boolean option taking an explicit value
    /// (`T`/`t`/`true`/`1` or `F`/`f`/`false`/`0`).
    pub fn add_bool_option(
        &mut self,
        name: &'static str,
        description: &'static str,
        value: &'a mut bool,
        required: bool,
    ) -> Result<()> {
        self.add_option(name, description, OptKind::Valued, required, BoundValue::Bool(value))
    }

    pub fn add_int_option(
        &mut self,
        name: &'static str,
        description: &'static str,
        value: &'a mut i64,
        required: bool,
    ) -> Result<()> {
        self.add_option(name, description, OptKind::Valued, required, BoundValue::Int(value))
    }

    pub fn add_float_option(
        &mut self,
        name: &'static str,
        description: &'static str,
        value: &'a mut f64,
        required: bool,
    ) -> Result<()> {
        self.add_option(name, description, OptKind::Valued, required, BoundValue::Float(value))
    }

    /// Declares a text option. Values longer than the slot's capacity fail
    /// with [`Error::StrTooLong`].
    pub fn add_text_option(
        &mut self,
        name: &'static str,
        description: &'static str,
        value: &'a mut dyn TextSlot,
        required: bool,
    ) -> Result<()> {
        self.add_option(name, description, OptKind::Valued, required, BoundValue::Text(value))
    }

    /// Declares the next positional argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryFull`] past `ARGS` arguments.
    pub fn add_argument(&mut self, target: BoundValue<'a>) -> Result<()> {
        trace!(position = self.args.len(), value = ?target.kind(), "declared argument");
        self.args.register(Arg::new(target))
    }

    pub fn add_bool_argument(&mut self, value: &'a mut bool) -> Result<()> {
        self.add_argument(BoundValue::Bool(value))
    }

    pub fn add_int_argument(&mut self, value: &'a mut i64) -> Result<()> {
        self.add_argument(BoundValue::Int(value))
    }

    pub fn add_float_argument(&mut self, value: &'a mut f64) -> Result<()> {
        self.add_argument(BoundValue::Float(value))
    }

    pub fn add_text_argument(&mut self, value: &'a mut dyn TextSlot) -> Result<()> {
        self.add_argument(BoundValue::Text(value))
    }

    /// Number of declared options, help entries included.
    pub fn option_count(&self) -> usize {
        self.opts.len()
    }

    /// Number of declared positional arguments.
    pub fn argument_count(&self) -> usize {
        self.args.len()
    }

    /// Snapshot of the help metadata.
    pub fn usage(&self) -> Usage<OPTS> {
        Usage {
            description: self.description,
            usage: self.usage,
            options: self
                .opts
                .iter()
                .filter(|opt| !opt.is_help())
                .map(OptionInfo::from)
                .collect(),
        }
    }

    /// Parses `argv` (program name first) into the bound storage.
    ///
    /// On failure, storage bound before the failing token keeps its new
    /// value. Rebuild the command to try again.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] raised by the parse.
    pub fn parse<S: AsRef<str>>(mut self, argv: &[S]) -> Result<Outcome<OPTS>> {
        match engine::parse_tokens(&mut self.opts, &mut self.args, argv)? {
            Status::Done => Ok(Outcome::Done),
            Status::HelpRequested => Ok(Outcome::HelpRequested(self.usage())),
        }
    }
}
