//! The single-pass token classification state machine.
//!
//! ```text
//! ScanningOptions ──"--" / bare word / end──▶ DrainingPositionals ──▶ Done
//!        │
//!        └── "-h" / "--help" ──▶ HelpRequested
//! ```
//!
//! Index 0 of the token vector is the program name and is never parsed.
//! Every failure aborts immediately. Bindings written before the failure
//! stay written.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::option::{HELP_NAMES, OptKind};
use crate::registry::{ArgumentRegistry, OptionRegistry};

/// How a successful parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every token was consumed and bound.
    Done,
    /// `-h`/`--help` was found; parsing stopped at that token.
    HelpRequested,
}

/// Where option scanning handed off.
enum Scan {
    /// Positional binding starts at this token index.
    Positionals(usize),
    Help,
}

/// Walks `argv` once, binding options and then positional arguments.
///
/// Registries keep their `seen` markers afterwards, so a second call with
/// the same registries reports every option as already seen. Build fresh
/// registries for each parse.
///
/// # Errors
///
/// Returns the first failure encountered; see [`Error`] for the kinds.
pub fn parse_tokens<S, const OPTS: usize, const ARGS: usize>(
    opts: &mut OptionRegistry<'_, OPTS>,
    args: &mut ArgumentRegistry<'_, ARGS>,
    argv: &[S],
) -> Result<Status>
where
    S: AsRef<str>,
{
    let cursor = match scan_options(opts, argv)? {
        Scan::Positionals(cursor) => cursor,
        Scan::Help => {
            debug!("help requested");
            return Ok(Status::HelpRequested);
        }
    };

    if let Some(name) = opts.unseen_required() {
        debug!(option = name, "required option not seen");
        return Err(Error::UnseenRequiredOptions);
    }

    drain_positionals(args, argv, cursor)?;
    Ok(Status::Done)
}

fn scan_options<S: AsRef<str>, const OPTS: usize>(
    opts: &mut OptionRegistry<'_, OPTS>,
    argv: &[S],
) -> Result<Scan> {
    let mut cursor = 1;

    while let Some(token) = argv.get(cursor).map(|token| token.as_ref()) {
        if token == "--" {
            trace!(cursor, "explicit end of options");
            return Ok(Scan::Positionals(cursor + 1));
        }

        let Some(stripped) = token.strip_prefix("--").or_else(|| token.strip_prefix('-')) else {
            trace!(cursor, token, "bare word ends options");
            return Ok(Scan::Positionals(cursor));
        };

        if HELP_NAMES.contains(&stripped) {
            return Ok(Scan::Help);
        }

        // Only the first '=' separates; the rest belongs to the value.
        let (name, inline) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (stripped, None),
        };

        let Some(opt) = opts.find_mut(name) else {
            debug!(option = name, "unknown option");
            return Err(Error::OptionNotFound);
        };
        if let Err(err) = opt.mark_seen() {
            debug!(option = name, "option repeated");
            return Err(err);
        }

        let value = match (opt.kind, inline) {
            (OptKind::Flag, _) => None,
            (OptKind::Valued, Some(value)) => Some(value),
            (OptKind::Valued, None) => {
                let Some(next) = argv.get(cursor + 1) else {
                    debug!(option = name, "option value missing");
                    return Err(Error::OutOfBounds);
                };
                cursor += 1;
                Some(next.as_ref())
            }
        };

        trace!(option = name, value, "binding option");
        opt.target.bind(value).inspect_err(|err| {
            debug!(option = name, value, error = %err, "option rejected its value");
        })?;
        cursor += 1;
    }

    Ok(Scan::Positionals(cursor))
}

fn drain_positionals<S: AsRef<str>, const ARGS: usize>(
    args: &mut ArgumentRegistry<'_, ARGS>,
    argv: &[S],
    cursor: usize,
) -> Result<()> {
    let remaining = argv.get(cursor..).unwrap_or_default();
    let expected = args.len();
    if remaining.len() != expected {
        debug!(expected, found = remaining.len(), "positional count mismatch");
        return Err(Error::ArgCount {
            expected,
            found: remaining.len(),
        });
    }

    for (position, (arg, token)) in args.iter_mut().zip(remaining).enumerate() {
        let token = token.as_ref();
        trace!(position, token, "binding argument");
        arg.target.bind(Some(token)).inspect_err(|err| {
            debug!(position, token, error = %err, "argument rejected its value");
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{Arg, Opt};
    use crate::registry::Registry;
    use crate::value::BoundValue;

    fn with_help<'a, const N: usize>() -> OptionRegistry<'a, N> {
        let mut opts = Registry::new();
        for name in HELP_NAMES {
            opts.register(Opt::help(name)).unwrap();
        }
        opts
    }

    #[test]
    fn test_empty_argv_is_accepted() {
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        let argv: [&str; 0] = [];
        assert_eq!(parse_tokens(&mut opts, &mut args, &argv), Ok(Status::Done));
    }

    #[test]
    fn test_program_name_is_skipped() {
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        assert_eq!(
            parse_tokens(&mut opts, &mut args, &["--help"]),
            Ok(Status::Done)
        );
    }

    #[test]
    fn test_valued_option_consumes_next_token() {
        let mut n = 0;
        let mut rest = 0;
        let mut opts: OptionRegistry<'_, 4> = with_help();
        opts.register(Opt::new("n", "", OptKind::Valued, false, BoundValue::Int(&mut n)))
            .unwrap();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        args.register(Arg::new(BoundValue::Int(&mut rest))).unwrap();

        let status = parse_tokens(&mut opts, &mut args, &["prog", "-n", "3", "4"]);
        assert_eq!(status, Ok(Status::Done));
        drop(opts);
        drop(args);
        assert_eq!((n, rest), (3, 4));
    }

    #[test]
    fn test_inline_value_keeps_later_separators() {
        let mut text: heapless::String<16> = heapless::String::new();
        let mut opts: OptionRegistry<'_, 4> = with_help();
        opts.register(Opt::new("kv", "", OptKind::Valued, false, BoundValue::Text(&mut text)))
            .unwrap();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();

        let status = parse_tokens(&mut opts, &mut args, &["prog", "--kv=a=b"]);
        assert_eq!(status, Ok(Status::Done));
        drop(opts);
        assert_eq!(text.as_str(), "a=b");
    }

    #[test]
    fn test_flag_ignores_inline_value() {
        let mut flag = false;
        let mut opts: OptionRegistry<'_, 4> = with_help();
        opts.register(Opt::new("v", "", OptKind::Flag, false, BoundValue::Bool(&mut flag)))
            .unwrap();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();

        let status = parse_tokens(&mut opts, &mut args, &["prog", "-v=false"]);
        assert_eq!(status, Ok(Status::Done));
        drop(opts);
        assert!(flag);
    }

    #[test]
    fn test_lone_dash_is_an_unknown_option() {
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        assert_eq!(
            parse_tokens(&mut opts, &mut args, &["prog", "-"]),
            Err(Error::OptionNotFound)
        );
    }

    #[test]
    fn test_bare_word_is_not_consumed() {
        let mut path: heapless::String<16> = heapless::String::new();
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        args.register(Arg::new(BoundValue::Text(&mut path))).unwrap();

        let status = parse_tokens(&mut opts, &mut args, &["prog", "file.txt"]);
        assert_eq!(status, Ok(Status::Done));
        drop(args);
        assert_eq!(path.as_str(), "file.txt");
    }

    #[test]
    fn test_options_after_bare_word_are_positionals() {
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        assert_eq!(
            parse_tokens(&mut opts, &mut args, &["prog", "file.txt", "--help"]),
            Err(Error::ArgCount {
                expected: 0,
                found: 2
            })
        );
    }

    #[test]
    fn test_double_dash_is_consumed() {
        let mut n = 0;
        let mut opts: OptionRegistry<'_, 4> = with_help();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();
        args.register(Arg::new(BoundValue::Int(&mut n))).unwrap();

        let status = parse_tokens(&mut opts, &mut args, &["prog", "--", "-5"]);
        assert_eq!(status, Ok(Status::Done));
        drop(args);
        assert_eq!(n, -5);
    }

    #[test]
    fn test_second_parse_sees_stale_markers() {
        let mut flag = false;
        let mut opts: OptionRegistry<'_, 4> = with_help();
        opts.register(Opt::new("v", "", OptKind::Flag, false, BoundValue::Bool(&mut flag)))
            .unwrap();
        let mut args: ArgumentRegistry<'_, 1> = Registry::new();

        let argv = ["prog", "-v"];
        assert_eq!(parse_tokens(&mut opts, &mut args, &argv), Ok(Status::Done));
        assert_eq!(
            parse_tokens(&mut opts, &mut args, &argv),
            Err(Error::OptionAlreadySeen)
        );
    }
}
