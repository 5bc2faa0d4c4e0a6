//! Fixed-capacity, append-only registries.
//!
//! Storage is a [`heapless::Vec`], so declaring past the capacity fails with
//! [`Error::RegistryFull`] instead of growing.

use crate::error::{Error, Result};
use crate::option::{Arg, Opt};

/// Ordered, append-only collection with a compile-time capacity.
///
/// # Examples
///
/// ```
/// use argbind_core::{Error, Registry};
///
/// let mut registry: Registry<u8, 2> = Registry::new();
/// registry.register(1).unwrap();
/// registry.register(2).unwrap();
/// assert_eq!(registry.register(3), Err(Error::RegistryFull));
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug)]
pub struct Registry<T, const N: usize> {
    entries: heapless::Vec<T, N>,
}

impl<T, const N: usize> Default for Registry<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Registry<T, N> {
    pub fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
        }
    }

    /// Appends `entry`, preserving registration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryFull`] when the registry already holds `N`
    /// entries. The entry is dropped.
    pub fn register(&mut self, entry: T) -> Result<()> {
        self.entries.push(entry).map_err(|_| Error::RegistryFull)
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }
}

/// Registry of named options.
pub type OptionRegistry<'a, const N: usize> = Registry<Opt<'a>, N>;

/// Registry of positional arguments.
pub type ArgumentRegistry<'a, const N: usize> = Registry<Arg<'a>, N>;

impl<'a, const N: usize> Registry<Opt<'a>, N> {
    /// Finds the first option registered under `name`.
    pub fn find(&self, name: &str) -> Option<&Opt<'a>> {
        self.entries.iter().find(|opt| opt.name == name)
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Opt<'a>> {
        self.entries.iter_mut().find(|opt| opt.name == name)
    }

    /// Returns the name of the first required option not yet seen.
    pub fn unseen_required(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|opt| opt.required && !opt.seen)
            .map(|opt| opt.name)
    }
}
