//! Declaration-time limits.
//!
//! Registry capacities are fixed at compile time through the const
//! parameters of [`Command`](crate::Command); the text limits below are
//! runtime configuration and can be embedded in an application's own
//! serde-backed config.

use serde::{Deserialize, Serialize};

/// Default maximum option name length, terminator byte included.
pub const DEFAULT_MAX_NAME_LEN: usize = 24;

/// Default maximum option description length, terminator byte included.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 64;

/// Length limits checked when an option is declared.
///
/// Both limits count one terminator byte, so a name is accepted only when
/// `name.len() + 1 <= max_name_len`.
///
/// # Examples
///
/// ```
/// use argbind_core::Limits;
///
/// let limits = Limits::default();
/// assert!(limits.name_fits("verbose"));
/// assert!(!limits.name_fits("an-option-name-that-is-far-too-long"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum option name length (terminator included).
    pub max_name_len: usize,
    /// Maximum option description length (terminator included).
    pub max_description_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

impl Limits {
    /// Returns `true` if `name` fits within [`max_name_len`](Self::max_name_len).
    pub fn name_fits(&self, name: &str) -> bool {
        name.len() < self.max_name_len
    }

    /// Returns `true` if `description` fits within
    /// [`max_description_len`](Self::max_description_len).
    pub fn description_fits(&self, description: &str) -> bool {
        description.len() < self.max_description_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_limit_counts_terminator() {
        let limits = Limits::default();
        assert!(limits.name_fits(&"n".repeat(23)));
        assert!(!limits.name_fits(&"n".repeat(24)));
    }

    #[test]
    fn test_description_limit_counts_terminator() {
        let limits = Limits::default();
        assert!(limits.description_fits(&"d".repeat(63)));
        assert!(!limits.description_fits(&"d".repeat(64)));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"max_name_len": 8}"#).unwrap();
        assert_eq!(limits.max_name_len, 8);
        assert_eq!(limits.max_description_len, DEFAULT_MAX_DESCRIPTION_LEN);
    }
}
