//! Fixed slot storage shared by the pooled game objects
//!
//! Every record is allocated up front. The record vector is split into a
//! live prefix (`..live`) and a free suffix (`live..`); acquiring moves the
//! first free record into the live prefix and releasing swaps a record with
//! the last live one before shrinking the prefix. Live order is therefore
//! unspecified.

/// Preallocated records with a live prefix
#[derive(Debug, Clone)]
pub(crate) struct SlotPool<T> {
    records: Vec<T>,
    live: usize,
}

impl<T> SlotPool<T> {
    /// Take ownership of `records`, all of them free
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records, live: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn free_count(&self) -> usize {
        self.records.len() - self.live
    }

    pub fn is_exhausted(&self) -> bool {
        self.live == self.records.len()
    }

    pub fn live(&self) -> &[T] {
        &self.records[..self.live]
    }

    /// Claim the next free record, or `None` when every record is live
    ///
    /// The record still holds whatever its last user left in it.
    pub fn acquire(&mut self) -> Option<&mut T> {
        let record = self.records.get_mut(self.live)?;
        self.live += 1;
        Some(record)
    }

    /// Return live record `index` to the free suffix
    pub fn release(&mut self, index: usize) {
        debug_assert!(index < self.live);
        self.live -= 1;
        self.records.swap(index, self.live);
    }

    /// Visit live records back to front, releasing those `keep` rejects
    ///
    /// A released slot is refilled from the tail, which has already been
    /// visited, so no record is skipped or seen twice.
    pub fn retain_live(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for i in (0..self.live).rev() {
            if !keep(&mut self.records[i]) {
                self.release(i);
            }
        }
    }

    /// Release the last-visited live record matching `pred`; at most one
    pub fn release_first(&mut self, mut pred: impl FnMut(&T) -> bool) -> bool {
        let hit = (0..self.live).rev().find(|&i| pred(&self.records[i]));
        if let Some(index) = hit {
            self.release(index);
        }
        hit.is_some()
    }

    pub fn clear(&mut self) {
        self.live = 0;
    }
}
