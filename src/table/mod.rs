use slog::debug;
use slog::o;
use slog::Discard;
use slog::Logger;
use std::fmt;
use std::mem;

use crate::loader;
use crate::Result;

mod chain;
pub use chain::Chain;
pub use chain::Entry;

mod hash;
pub use hash::bucket_index;
pub use hash::hash;

pub const INITIAL_CAPACITY: usize = 10;
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Snapshot of how the bucket array is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OccupancyStats {
    pub capacity: usize,
    pub non_empty_buckets: usize,
    pub entries: usize,
    /// `non_empty_buckets / capacity`
    pub load_factor: f64,
}

impl fmt::Display for OccupancyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity: {}, non-empty buckets: {}, entries: {}, load factor: {:.2}",
            self.capacity, self.non_empty_buckets, self.entries, self.load_factor
        )
    }
}

/// A string to string table using separate chaining.
///
/// The load factor counts occupied buckets rather than entries, so many keys
/// piling into one bucket never forces a resize on their own. The capacity
/// doubles before an insertion whenever the load factor has reached
/// [`LOAD_FACTOR_THRESHOLD`].
///
/// Keys are not deduplicated: adding an existing key stores a second entry,
/// `get` sees the oldest surviving one and `remove` drops one at a time.
pub struct StringTable {
    buckets: Vec<Option<Chain>>,
    non_empty_buckets: usize,
    len: usize,
    log: Logger,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    pub fn new() -> Self {
        Self::with_logger(Logger::root(Discard, o!()))
    }

    /// Create an empty table that reports resizes to `log`.
    pub fn with_logger(log: Logger) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_CAPACITY),
            non_empty_buckets: 0,
            len: 0,
            log,
        }
    }

    /// Store `value` under `key`, growing the table first if needed.
    pub fn add(&mut self, key: String, value: String) {
        self.check_and_resize();
        let index = bucket_index(&key, self.buckets.len());
        self.insert_at(index, Entry::new(key, value));
        self.len += 1;
    }

    /// The value of the first stored entry for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index]
            .as_ref()
            .and_then(|chain| chain.find_by_key(key))
            .map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove one entry for `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = bucket_index(key, self.buckets.len());
        let slot = &mut self.buckets[index];
        let removed = match slot.as_mut() {
            Some(chain) => chain.remove_by_key(key),
            None => false,
        };
        if removed {
            self.len -= 1;
            if slot.as_ref().is_some_and(Chain::is_empty) {
                *slot = None;
                self.non_empty_buckets -= 1;
            }
        }
        removed
    }

    /// Add every `KEY; VALUE` line of `lines`. Returns the number of records added.
    ///
    /// Empty lines are skipped. A line without the separator stops the load
    /// with [`DictError::MalformedRecord`](crate::DictError::MalformedRecord);
    /// records before it stay in the table.
    pub fn load_from_source<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (number, line) in lines.into_iter().enumerate() {
            if loader::load_line(self, number + 1, line.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.non_empty_buckets as f64 / self.buckets.len() as f64
    }

    pub fn occupancy_stats(&self) -> OccupancyStats {
        OccupancyStats {
            capacity: self.capacity(),
            non_empty_buckets: self.non_empty_buckets,
            entries: self.len,
            load_factor: self.load_factor(),
        }
    }

    /// How many more insertions into distinct empty buckets it takes to reach
    /// `target` load factor at the current capacity.
    pub fn words_needed_for_target_load_factor(&self, target: f64) -> usize {
        let goal = (self.buckets.len() as f64 * target).ceil() as usize;
        goal.saturating_sub(self.non_empty_buckets)
    }

    fn insert_at(&mut self, index: usize, entry: Entry) {
        let slot = &mut self.buckets[index];
        if slot.is_none() {
            self.non_empty_buckets += 1;
        }
        slot.get_or_insert_with(Chain::new).append(entry);
    }

    fn check_and_resize(&mut self) {
        if self.load_factor() < LOAD_FACTOR_THRESHOLD {
            return;
        }

        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.non_empty_buckets = 0;

        for entry in old_buckets.into_iter().flatten().flatten() {
            let index = bucket_index(entry.key(), new_capacity);
            self.insert_at(index, entry);
        }

        debug!(self.log, "resized";
            "from" => old_capacity,
            "to" => new_capacity,
            "entries" => self.len,
            "non_empty_buckets" => self.non_empty_buckets);
    }
}

fn empty_buckets(capacity: usize) -> Vec<Option<Chain>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}
