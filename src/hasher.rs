//! Hashing capabilities injected into a
//! [`ProbingHashTable`](crate::ProbingHashTable).
//!
//! The table never hashes keys itself. It asks a [`ProbeHasher`] for a `u64`
//! and reduces that modulo its capacity to find where probing starts. Any
//! `Fn(&K) -> u64` is a `ProbeHasher`, and [`BuildHasherAdapter`] lifts a
//! standard [`BuildHasher`] into one for keys that implement [`Hash`].

use core::hash::BuildHasher;
use core::hash::Hash;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hash builder used by [`ProbingHashTable::with_capacity`].
        ///
        /// [`ProbingHashTable::with_capacity`]: crate::ProbingHashTable::with_capacity
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hash builder used by [`ProbingHashTable::with_capacity`].
        ///
        /// [`ProbingHashTable::with_capacity`]: crate::ProbingHashTable::with_capacity
        pub type DefaultHashBuilder = std::hash::RandomState;
    }
}

/// Maps a key to the integer its probe sequence starts from.
///
/// Implementations must be pure: the same key must always produce the same
/// hash for as long as it lives in a table, otherwise lookups and the
/// backward-shift repair done on removal will lose track of it.
///
/// # Examples
///
/// ```rust
/// use backshift::hasher::ProbeHasher;
///
/// let modulo_seven = |k: &u64| *k % 7;
/// assert_eq!(modulo_seven.hash(&10), 3);
/// ```
pub trait ProbeHasher<K: ?Sized> {
    /// Hashes `key`.
    fn hash(&self, key: &K) -> u64;
}

impl<K, F> ProbeHasher<K> for F
where
    K: ?Sized,
    F: Fn(&K) -> u64,
{
    #[inline(always)]
    fn hash(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Adapts a [`BuildHasher`] into a [`ProbeHasher`] for any `K: Hash`.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "std")]
/// # {
/// use std::hash::RandomState;
///
/// use backshift::ProbingHashTable;
/// use backshift::hasher::BuildHasherAdapter;
///
/// let hasher = BuildHasherAdapter::new(RandomState::new());
/// let mut table: ProbingHashTable<String, u32, _> =
///     ProbingHashTable::with_capacity_and_hasher(8, hasher);
/// table.put("alpha".to_string(), 1).unwrap();
/// assert_eq!(table.get(&"alpha".to_string()), Some(&1));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildHasherAdapter<S> {
    hash_builder: S,
}

impl<S> BuildHasherAdapter<S> {
    /// Wraps `hash_builder`.
    pub fn new(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    /// Returns a reference to the wrapped hash builder.
    pub fn hash_builder(&self) -> &S {
        &self.hash_builder
    }
}

impl<K, S> ProbeHasher<K> for BuildHasherAdapter<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline(always)]
    fn hash(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }
}
