use thiserror::Error;

/// Returned when an insertion finds no empty slot to claim.
///
/// The table never grows, so once every slot is occupied the only way to make
/// room is to remove an entry. The failed operation leaves the table
/// untouched.
///
/// # Examples
///
/// ```rust
/// use backshift::ProbingHashTable;
/// use backshift::TableFull;
///
/// let mut table: ProbingHashTable<u64, &str, _> =
///     ProbingHashTable::with_capacity_and_hasher(1, |k: &u64| *k);
/// assert_eq!(table.put(1, "one"), Ok(true));
/// assert_eq!(table.put(2, "two"), Err(TableFull { capacity: 1 }));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("probing table is full: all {capacity} slots are occupied")]
pub struct TableFull {
    /// Number of slots in the table that rejected the insertion.
    pub capacity: usize,
}
