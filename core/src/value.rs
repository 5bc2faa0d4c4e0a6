//! Bound values and the typed parsers that write through them.
//!
//! A [`BoundValue`] borrows a caller-owned storage location for the lifetime
//! of a [`Command`](crate::Command). Parsing a token means matching on the
//! variant and writing the converted value through the borrow, so a value
//! can never be paired with the wrong parser.
//!
//! # Numeric conversion policy
//!
//! Integers and floats are read from the longest valid prefix of the token,
//! after optional leading ASCII whitespace. Trailing bytes are ignored:
//! `"42abc"` binds `42` and `"2.5x"` binds `2.5`. A conversion fails only when
//! no number can be read at all (`"abc"`, `""`, `"-"`).

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Literals accepted as `true` for an explicit boolean value.
pub const TRUE_LITERALS: [&str; 4] = ["T", "t", "true", "1"];

/// Literals accepted as `false` for an explicit boolean value.
pub const FALSE_LITERALS: [&str; 4] = ["F", "f", "false", "0"];

/// Caller-owned, fixed-capacity text storage.
///
/// Implemented for [`heapless::String`], whose capacity is its const
/// parameter. [`assign`](TextSlot::assign) checks the length first and leaves
/// the buffer untouched when the token does not fit.
pub trait TextSlot {
    /// Maximum number of bytes the slot can hold.
    fn capacity(&self) -> usize;

    /// Current contents.
    fn as_str(&self) -> &str;

    /// Replaces the contents with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrTooLong`] if `token` is longer than
    /// [`capacity`](TextSlot::capacity); the slot is not modified.
    fn assign(&mut self, token: &str) -> Result<()>;
}

impl<const N: usize> TextSlot for heapless::String<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn as_str(&self) -> &str {
        heapless::String::<N>::as_str(self)
    }

    fn assign(&mut self, token: &str) -> Result<()> {
        let too_long = Error::StrTooLong {
            len: token.len(),
            capacity: N,
        };
        if token.len() > N {
            return Err(too_long);
        }
        self.clear();
        self.push_str(token).map_err(|_| too_long)
    }
}

/// The kind of value a [`BoundValue`] holds, without the storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Text,
    /// No storage; used by the built-in help entries.
    Unbound,
}

/// A type-tagged, non-owning reference to caller storage.
pub enum BoundValue<'a> {
    Int(&'a mut i64),
    Float(&'a mut f64),
    Bool(&'a mut bool),
    Text(&'a mut dyn TextSlot),
    Unbound,
}

impl BoundValue<'_> {
    /// Returns the value kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
            Self::Unbound => ValueKind::Unbound,
        }
    }

    /// Parses `token` and writes the result into the bound storage.
    ///
    /// `None` means the option was used as a flag, with no value attached:
    /// a boolean toggles, text becomes empty, and numbers fail because there
    /// is nothing to convert.
    ///
    /// Storage is written only on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind_core::BoundValue;
    ///
    /// let mut verbose = false;
    /// let mut target = BoundValue::Bool(&mut verbose);
    /// target.bind(None).unwrap();
    /// target.bind(None).unwrap();
    /// target.bind(Some("t")).unwrap();
    /// drop(target);
    /// assert!(verbose);
    ///
    /// let mut count = 0;
    /// BoundValue::Int(&mut count).bind(Some("42abc")).unwrap();
    /// assert_eq!(count, 42);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the parse failure matching the value kind:
    /// [`Error::IntParseFailed`], [`Error::FloatParseFailed`],
    /// [`Error::BoolParseFailed`] or [`Error::StrTooLong`].
    pub fn bind(&mut self, token: Option<&str>) -> Result<()> {
        match self {
            Self::Int(slot) => {
                **slot = token
                    .and_then(parse_int_prefix)
                    .ok_or(Error::IntParseFailed)?;
            }
            Self::Float(slot) => {
                **slot = token
                    .and_then(parse_float_prefix)
                    .ok_or(Error::FloatParseFailed)?;
            }
            Self::Bool(slot) => match token {
                None => **slot = !**slot,
                Some(literal) => **slot = parse_bool(literal)?,
            },
            Self::Text(slot) => slot.assign(token.unwrap_or(""))?,
            Self::Unbound => {}
        }
        Ok(())
    }
}

impl fmt::Debug for BoundValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Text(slot) => f
                .debug_struct("Text")
                .field("value", &slot.as_str())
                .field("capacity", &slot.capacity())
                .finish(),
            Self::Unbound => f.write_str("Unbound"),
        }
    }
}

/// Parses an explicit boolean literal.
///
/// # Errors
///
/// Returns [`Error::BoolParseFailed`] for anything outside
/// [`TRUE_LITERALS`] and [`FALSE_LITERALS`].
pub fn parse_bool(literal: &str) -> Result<bool> {
    if TRUE_LITERALS.contains(&literal) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&literal) {
        Ok(false)
    } else {
        Err(Error::BoolParseFailed)
    }
}

/// Reads a base-10 signed integer from the start of `token`.
///
/// Leading ASCII whitespace and one `+`/`-` sign are accepted, then as many
/// digits as follow. Values outside the `i64` range saturate.
/// Returns `None` when no digit is read.
///
/// # Examples
///
/// ```
/// use argbind_core::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("42"), Some(42));
/// assert_eq!(parse_int_prefix("  -7 apples"), Some(-7));
/// assert_eq!(parse_int_prefix("hai"), None);
/// ```
pub fn parse_int_prefix(token: &str) -> Option<i64> {
    let bytes = token.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let (negative, rest) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };

    let digits = count_digits(rest);
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for &b in &rest[..digits] {
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }
    Some(value)
}

/// Reads a decimal floating-point number from the start of `token`.
///
/// Accepts leading ASCII whitespace, an optional sign, digits with an
/// optional fractional part, an optional exponent (only consumed when it
/// carries digits), and the case-insensitive words `inf`, `infinity` and
/// `nan`. Returns `None` when nothing is read.
///
/// # Examples
///
/// ```
/// use argbind_core::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("43.5"), Some(43.5));
/// assert_eq!(parse_float_prefix("1e3ms"), Some(1000.0));
/// assert_eq!(parse_float_prefix(".25"), Some(0.25));
/// assert_eq!(parse_float_prefix("e5"), None);
/// ```
pub fn parse_float_prefix(token: &str) -> Option<f64> {
    let trimmed = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let len = float_prefix_len(trimmed.as_bytes());
    if len == 0 {
        return None;
    }
    trimmed[..len].parse().ok()
}

fn float_prefix_len(bytes: &[u8]) -> usize {
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
