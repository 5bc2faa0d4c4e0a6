//! Allocation-free command-line binding.
//!
//! This crate binds a fixed, caller-declared set of named options and
//! ordered positional arguments to caller-owned storage:
//!
//! - [`Command`]: declares options/arguments and runs a single parse.
//! - [`BoundValue`]: a type-tagged reference to an `i64`, `f64`, `bool` or
//!   fixed-capacity text buffer ([`TextSlot`]).
//! - [`Registry`]: the fixed-capacity, append-only store behind a command.
//! - [`parse_tokens`]: the token classification state machine.
//! - [`Usage`]: help metadata, rendered or serialized by the caller.
//!
//! Registries are [`heapless::Vec`]s sized by const generics and text
//! targets are [`heapless::String`]s, so the parse itself never touches the
//! heap.
//!
//! # Token grammar
//!
//! Index 0 is the program name. Options are `-name`, `--name`,
//! `-name=value`, `--name value` and so on; one and two dashes mean the same
//! thing. A literal `--`, or the first token without a dash, ends the
//! options; every remaining token is positional and their count must equal
//! the number of declared arguments exactly. `-h`/`--help` stops the parse
//! with [`Outcome::HelpRequested`].
//!
//! # Example
//!
//! ```
//! use argbind_core::*;
//!
//! let mut x = 0;
//! let mut y = 0.0;
//! let mut name: heapless::String<16> = heapless::String::new();
//! let mut count = 0;
//!
//! let mut cmd = Command::new("A useful app", "[OPTIONS]... NAME N").unwrap();
//! cmd.add_int_option("x", "An integer.", &mut x, true).unwrap();
//! cmd.add_float_option("y", "A float.", &mut y, false).unwrap();
//! cmd.add_text_argument(&mut name).unwrap();
//! cmd.add_int_argument(&mut count).unwrap();
//!
//! let argv = ["app", "--x=42", "-y", "43.5", "--", "ferris", "999"];
//! assert_eq!(cmd.parse(&argv), Ok(Outcome::Done));
//!
//! assert_eq!((x, y, name.as_str(), count), (42, 43.5, "ferris", 999));
//! ```

mod command;
mod engine;
mod error;
mod help;
mod limits;
mod option;
mod registry;
mod value;

pub use command::{Command, DEFAULT_MAX_ARGUMENTS, DEFAULT_MAX_OPTIONS, Outcome};
pub use engine::{Status, parse_tokens};
pub use error::{Error, Result};
pub use help::{HelpDisplay, OptionInfo, Usage};
pub use limits::{DEFAULT_MAX_DESCRIPTION_LEN, DEFAULT_MAX_NAME_LEN, Limits};
pub use option::{Arg, HELP_NAMES, Opt, OptKind};
pub use registry::{ArgumentRegistry, OptionRegistry, Registry};
pub use value::{
    BoundValue, FALSE_LITERALS, TRUE_LITERALS, TextSlot, ValueKind, parse_bool,
    parse_float_prefix, parse_int_prefix,
};

// Re-exported so callers can name text buffers without a direct dependency.
pub use heapless;
