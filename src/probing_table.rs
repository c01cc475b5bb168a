use alloc::boxed::Box;
#[cfg(any(test, feature = "stats"))]
use alloc::vec;
#[cfg(any(test, feature = "stats"))]
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::mem;

use log::debug;
use log::trace;
use log::warn;

use crate::error::TableFull;
#[cfg(any(feature = "foldhash", feature = "std"))]
use crate::hasher::BuildHasherAdapter;
#[cfg(any(feature = "foldhash", feature = "std"))]
use crate::hasher::DefaultHashBuilder;
use crate::hasher::ProbeHasher;

/// A single position in the table's slot array.
///
/// There is no tombstone variant. Removal shifts later entries backward
/// instead, so a slot is either holding an entry or free to be claimed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<K, V> {
    /// Nothing is stored here. Lookups stop probing when they reach it.
    #[default]
    Empty,
    /// An entry lives here, possibly displaced from its home index.
    Occupied {
        /// The stored key.
        key: K,
        /// The stored value.
        value: V,
    },
}

impl<K, V> Slot<K, V> {
    /// Returns `true` if nothing is stored in this slot.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns `true` if this slot holds an entry.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// The stored key, if any.
    pub fn key(&self) -> Option<&K> {
        self.entry().map(|(key, _)| key)
    }

    /// The stored value, if any.
    pub fn value(&self) -> Option<&V> {
        self.entry().map(|(_, value)| value)
    }

    /// The stored key and value, if any.
    pub fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { key, value } => Some((key, value)),
        }
    }

    fn take(&mut self) -> Option<(K, V)> {
        match mem::replace(self, Slot::Empty) {
            Slot::Empty => None,
            Slot::Occupied { key, value } => Some((key, value)),
        }
    }
}

/// Probe displacement statistics for a table.
///
/// Available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of occupied slots
    pub populated: usize,
    /// Total number of slots
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Largest distance of any entry from its home index
    pub max_displacement: usize,
    /// Average distance of an entry from its home index
    pub mean_displacement: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Probing Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Displacement: max {} / mean {:.3}",
            self.max_displacement, self.mean_displacement
        );
    }
}

/// A fixed-capacity hash table using linear probing and backward-shift
/// deletion.
///
/// Every entry lives directly in one slot array. An entry's home index is its
/// hash modulo the capacity; collisions walk forward one slot at a time,
/// wrapping at the end of the array, until a free slot turns up. Removing an
/// entry pulls later entries of the same run back into the gap, so the table
/// never accumulates tombstones and every key stays reachable from its home
/// index without crossing an empty slot.
///
/// The table never resizes. Inserting into a full table fails with
/// [`TableFull`].
///
/// Hashing is injected through a [`ProbeHasher`], which any `Fn(&K) -> u64`
/// satisfies.
///
/// ## Example
///
/// ```rust
/// use backshift::ProbingHashTable;
///
/// let mut table: ProbingHashTable<u64, char, _> =
///     ProbingHashTable::with_capacity_and_hasher(7, |k: &u64| *k % 7);
///
/// // 10, 3 and 17 all hash to index 3 and spill into 4 and 5.
/// table.put(10, 'a').unwrap();
/// table.put(3, 'b').unwrap();
/// table.put(17, 'c').unwrap();
///
/// // Removing 10 shifts 3 and 17 back by one slot each.
/// assert!(table.remove(&10));
/// assert_eq!(table.slots()[3].key(), Some(&3));
/// assert_eq!(table.slots()[4].key(), Some(&17));
/// assert!(table.slots()[5].is_empty());
/// assert_eq!(table.get(&3), Some(&'b'));
/// ```
#[derive(Clone)]
pub struct ProbingHashTable<K, V, H> {
    slots: Box<[Slot<K, V>]>,
    populated: usize,
    hasher: H,
}

impl<K, V, H> Debug for ProbingHashTable<K, V, H>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Layout<'a, K, V>(&'a [Slot<K, V>]);

        impl<K: Debug, V: Debug> Debug for Layout<'_, K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                for slot in self.0 {
                    match slot {
                        Slot::Empty => list.entry(&format_args!("..")),
                        Slot::Occupied { key, value } => {
                            list.entry(&format_args!("{key:?} => {value:?}"))
                        }
                    };
                }
                list.finish()
            }
        }

        f.debug_struct("ProbingHashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.capacity())
            .field("slots", &Layout(&self.slots))
            .finish()
    }
}

/// Renders each occupied slot as `{index => [#key: value]}`, comma separated,
/// in slot order. An empty table renders as an empty string.
impl<K, V, H> Display for ProbingHashTable<K, V, H>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { key, value } = slot {
                if !first {
                    f.write_str(",")?;
                }
                first = false;
                write!(f, "{{{index} => [#{key}: {value}]}}")?;
            }
        }
        Ok(())
    }
}

#[cfg(any(feature = "foldhash", feature = "std"))]
impl<K, V> ProbingHashTable<K, V, BuildHasherAdapter<DefaultHashBuilder>> {
    /// Creates a table with `capacity` slots hashed by the crate's
    /// [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<&str, i32, _> = ProbingHashTable::with_capacity(16);
    /// table.put("key", 1).unwrap();
    /// assert_eq!(table.get(&"key"), Some(&1));
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(
            capacity,
            BuildHasherAdapter::new(DefaultHashBuilder::default()),
        )
    }
}

impl<K, V, H> ProbingHashTable<K, V, H> {
    /// Creates a table with exactly `capacity` empty slots that hashes keys
    /// with `hasher`.
    ///
    /// A capacity of zero is allowed; such a table rejects every insertion
    /// with [`TableFull`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let table: ProbingHashTable<u32, String, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(32, |k: &u32| u64::from(*k));
    /// assert_eq!(table.capacity(), 32);
    /// assert!(table.is_empty());
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            populated: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots. This never changes after construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.populated == self.slots.len()
    }

    /// Returns a reference to the table's hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the raw slot array, in index order.
    ///
    /// Useful for inspecting how collisions were resolved.
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Removes all entries, keeping the capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, u64, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(4, |k: &u64| *k);
    /// table.put(1, 1).unwrap();
    /// table.put(2, 2).unwrap();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.populated = 0;
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, &str, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(4, |k: &u64| *k);
    /// table.put(2, "two").unwrap();
    /// table.put(0, "zero").unwrap();
    ///
    /// let entries: Vec<_> = table.iter().collect();
    /// assert_eq!(entries, vec![(&0, &"zero"), (&2, &"two")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }
}

impl<K, V, H> ProbingHashTable<K, V, H>
where
    K: Eq,
    H: ProbeHasher<K>,
{
    /// Home index for `key`. The table must have at least one slot.
    #[inline(always)]
    fn home(&self, key: &K) -> usize {
        (self.hasher.hash(key) % self.slots.len() as u64) as usize
    }

    #[inline(always)]
    fn next_index(&self, index: usize) -> usize {
        if index + 1 == self.slots.len() {
            0
        } else {
            index + 1
        }
    }

    /// Returns the index probing for `key` starts at, or `None` for a table
    /// with no slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let table: ProbingHashTable<u64, (), _> =
    ///     ProbingHashTable::with_capacity_and_hasher(7, |k: &u64| *k);
    /// assert_eq!(table.home_index(&17), Some(3));
    /// ```
    pub fn home_index(&self, key: &K) -> Option<usize> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.home(key))
        }
    }

    /// Walks the probe sequence for `key`, stopping at the first matching
    /// entry or the first empty slot.
    fn find_index(&self, key: &K) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        let mut index = self.home(key);
        // A full table has no empty slot to stop on, so bound the walk.
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: stored, .. } if stored == key => return Some(index),
                Slot::Occupied { .. } => index = self.next_index(index),
            }
        }

        None
    }

    /// Stores the entry in the first empty slot of its probe sequence.
    fn claim_empty(&mut self, key: K, value: V) -> Result<usize, TableFull> {
        let capacity = self.slots.len();
        if !self.is_full() {
            let mut index = self.home(&key);
            for _ in 0..capacity {
                if self.slots[index].is_empty() {
                    self.slots[index] = Slot::Occupied { key, value };
                    self.populated += 1;
                    return Ok(index);
                }
                index = self.next_index(index);
            }
        }

        warn!("probing table rejected an insertion: all {capacity} slots are occupied");
        Err(TableFull { capacity })
    }

    /// Stores `value` under `key` in the first empty slot of the key's probe
    /// sequence.
    ///
    /// Returns `Ok(false)` without touching the table if either argument is
    /// `None`, and `Ok(true)` once the entry is stored.
    ///
    /// The key is not checked for an existing entry: putting a key twice
    /// stores two entries, and lookups keep returning the older one until it
    /// is removed. Use [`insert`](Self::insert) to replace in place.
    ///
    /// # Errors
    ///
    /// Fails with [`TableFull`] if every slot is occupied. The table is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<&str, u32, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(8, |k: &&str| k.len() as u64);
    ///
    /// assert_eq!(table.put("a", 1), Ok(true));
    /// assert_eq!(table.put("a", 2), Ok(true));
    /// assert_eq!(table.put(None, Some(3)), Ok(false));
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.get(&"a"), Some(&1));
    /// ```
    pub fn put(
        &mut self,
        key: impl Into<Option<K>>,
        value: impl Into<Option<V>>,
    ) -> Result<bool, TableFull> {
        let (Some(key), Some(value)) = (key.into(), value.into()) else {
            debug!("probing table ignored a put with an absent key or value");
            return Ok(false);
        };

        self.claim_empty(key, value)?;
        Ok(true)
    }

    /// Inserts `value` under `key`, replacing the value of an existing entry
    /// for the same key.
    ///
    /// Returns the replaced value, or `None` if a new slot was claimed.
    ///
    /// # Errors
    ///
    /// Fails with [`TableFull`] if `key` is absent and every slot is occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, &str, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(4, |k: &u64| *k);
    ///
    /// assert_eq!(table.insert(1, "one"), Ok(None));
    /// assert_eq!(table.insert(1, "uno"), Ok(Some("one")));
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get(&1), Some(&"uno"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TableFull> {
        if let Some(index) = self.find_index(&key)
            && let Slot::Occupied { value: existing, .. } = &mut self.slots[index]
        {
            return Ok(Some(mem::replace(existing, value)));
        }

        self.claim_empty(key, value).map(|_| None)
    }

    /// Returns the value stored under `key`.
    ///
    /// Probing starts at the key's home index and stops at the first empty
    /// slot, so this is `None` for keys that were never stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, &str, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(8, |k: &u64| *k);
    /// table.put(42, "answer").unwrap();
    ///
    /// assert_eq!(table.get(&42), Some(&"answer"));
    /// assert_eq!(table.get(&7), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_index(key).and_then(|index| self.slots[index].value())
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find_index(key).and_then(|index| self.slots[index].entry())
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, u32, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(8, |k: &u64| *k);
    /// table.put(5, 1).unwrap();
    ///
    /// if let Some(count) = table.get_mut(&5) {
    ///     *count += 1;
    /// }
    /// assert_eq!(table.get(&5), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find_index(key)?;
        match &mut self.slots[index] {
            Slot::Empty => None,
            Slot::Occupied { value, .. } => Some(value),
        }
    }

    /// Returns `true` if an entry for `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes the entry for `key`, returning `true` if one was found.
    ///
    /// Entries later in the same probe run are shifted back to close the gap.
    /// With duplicate keys, only the copy reached first is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, u64, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(8, |k: &u64| *k % 8);
    /// table.put(1, 10).unwrap();
    /// table.put(9, 90).unwrap();
    ///
    /// assert!(table.remove(&1));
    /// assert!(!table.remove(&1));
    /// assert_eq!(table.get(&9), Some(&90));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes the entry for `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<String, u64, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(8, |k: &String| k.len() as u64);
    /// table.put("hello".to_string(), 5).unwrap();
    ///
    /// assert_eq!(table.take(&"hello".to_string()), Some(("hello".to_string(), 5)));
    /// assert!(table.is_empty());
    /// ```
    pub fn take(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find_index(key)?;
        self.take_at(index)
    }

    fn take_at(&mut self, index: usize) -> Option<(K, V)> {
        let entry = self.slots[index].take()?;
        self.populated -= 1;
        debug!("probing table removed the entry at slot {index}");

        self.repair(index);
        Some(entry)
    }

    /// Returns an iterator that removes and yields every entry, in slot order.
    ///
    /// Each yielded entry is removed as a regular removal would, so the table
    /// stays consistent while the iterator is alive. The table is empty once
    /// the iterator is dropped, even if it was not run to completion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backshift::ProbingHashTable;
    ///
    /// let mut table: ProbingHashTable<u64, u64, _> =
    ///     ProbingHashTable::with_capacity_and_hasher(4, |k: &u64| *k);
    /// table.put(3, 30).unwrap();
    /// table.put(1, 10).unwrap();
    ///
    /// let drained: Vec<_> = table.drain().collect();
    /// assert_eq!(drained, vec![(1, 10), (3, 30)]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V, H> {
        Drain {
            table: self,
            index: 0,
        }
    }


    /// Backward-shift repair after the slot at `removed` was emptied.
    ///
    /// Scans forward to the end of the run. An entry is pulled into the hole
    /// when the hole lies on the cyclic path from the entry's home index to
    /// where it currently sits, i.e. moving it keeps it reachable. The slot it
    /// leaves becomes the new hole. Entries whose home lies after the hole
    /// stay put.
    fn repair(&mut self, removed: usize) {
        let capacity = self.slots.len();
        let mut hole = removed;
        let mut index = self.next_index(removed);

        // The hole is always empty, so the scan stops at the latest when it
        // wraps around to it.
        loop {
            let home = match &self.slots[index] {
                Slot::Empty => break,
                Slot::Occupied { key, .. } => self.home(key),
            };

            let displacement = (index + capacity - home) % capacity;
            let gap = (index + capacity - hole) % capacity;
            if gap <= displacement {
                trace!("probing table shifted slot {index} back to {hole}");
                self.slots.swap(hole, index);
                hole = index;
            }

            index = self.next_index(index);
        }
    }

    #[cfg(any(test, feature = "stats"))]
    fn displacement(&self, index: usize, key: &K) -> usize {
        let capacity = self.slots.len();
        (index + capacity - self.home(key)) % capacity
    }

    /// Returns a histogram of entry displacements.
    ///
    /// Element `d` counts the entries stored `d` slots past their home index.
    /// The histogram is as long as the largest displacement plus one, and
    /// empty for an empty table.
    ///
    /// Available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![];
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { key, .. } = slot {
                let displacement = self.displacement(index, key);
                if histogram.len() <= displacement {
                    histogram.resize(displacement + 1, 0);
                }
                histogram[displacement] += 1;
            }
        }
        histogram
    }

    /// Collects load and displacement statistics.
    ///
    /// Available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let histogram = self.probe_histogram();
        let total: usize = histogram
            .iter()
            .enumerate()
            .map(|(displacement, count)| displacement * count)
            .sum();

        DebugStats {
            populated: self.populated,
            capacity: self.slots.len(),
            load_factor: if self.slots.is_empty() {
                0.0
            } else {
                self.populated as f64 / self.slots.len() as f64
            },
            max_displacement: histogram.len().saturating_sub(1),
            mean_displacement: if self.populated == 0 {
                0.0
            } else {
                total as f64 / self.populated as f64
            },
        }
    }

    /// Pretty-prints the displacement histogram horizontally using stdout.
    ///
    /// Requires the `stats` and `std` features.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.populated);

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => None,
            };
            if let Some(ch) = partial {
                bar.push(ch);
            }
            bar
        };

        for (displacement, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", displacement, make_bar(count), count);
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a ProbingHashTable<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`ProbingHashTable`].
///
/// This struct is created by [`ProbingHashTable::iter`].
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A draining iterator over the entries of a [`ProbingHashTable`].
///
/// This struct is created by [`ProbingHashTable::drain`].
pub struct Drain<'a, K, V, H>
where
    K: Eq,
    H: ProbeHasher<K>,
{
    table: &'a mut ProbingHashTable<K, V, H>,
    index: usize,
}

impl<K, V, H> Iterator for Drain<'_, K, V, H>
where
    K: Eq,
    H: ProbeHasher<K>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // Slots before `index` are already empty and repair only moves
        // entries into slots at or after it, so the cursor never moves back.
        while self.index < self.table.slots.len() {
            if self.table.slots[self.index].is_occupied() {
                return self.table.take_at(self.index);
            }
            self.index += 1;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.populated, Some(self.table.populated))
    }
}

impl<K, V, H> ExactSizeIterator for Drain<'_, K, V, H>
where
    K: Eq,
    H: ProbeHasher<K>,
{
}

impl<K, V, H> Drop for Drain<'_, K, V, H>
where
    K: Eq,
    H: ProbeHasher<K>,
{
    fn drop(&mut self) {
        for _ in self {}
    }
}
