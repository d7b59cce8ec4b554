use log::{debug, trace};

use crate::config::BufferConfig;
use crate::error::RingBufferError;

/// Fixed-capacity ring buffer of integers. Oldest values are overwritten when full.
///
/// Valid data is the half-open window `[begin, end)` of `storage`, read modulo
/// the capacity when `end <= begin`. A full buffer always has `begin == end`.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    storage: Vec<i64>,
    begin: usize,
    end: usize,
    empty: bool,
}

impl RingBuffer {
    /// Creates an empty buffer with `capacity` slots.
    ///
    /// Fails with [`RingBufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity { capacity });
        }
        debug!("ring buffer created with capacity {}", capacity);
        Ok(Self { storage: vec![0; capacity], begin: 0, end: 0, empty: true })
    }

    pub fn from_config(cfg: &BufferConfig) -> Result<Self, RingBufferError> {
        Self::new(cfg.capacity)
    }

    pub fn capacity(&self) -> usize { self.storage.len() }

    /// Number of values currently readable.
    pub fn len(&self) -> usize {
        if self.empty {
            0
        } else if self.end > self.begin {
            self.end - self.begin
        } else {
            self.capacity() - self.begin + self.end
        }
    }

    pub fn is_empty(&self) -> bool { self.empty }
    pub fn is_full(&self) -> bool { self.len() == self.capacity() }

    /// Appends `values` in order, overwriting the oldest values once the buffer is full.
    ///
    /// Batches longer than the capacity are accepted; only their trailing
    /// `capacity` values remain readable afterwards. An empty batch is a no-op.
    pub fn insert(&mut self, values: &[i64]) {
        if values.is_empty() {
            return;
        }
        let cap = self.capacity();
        let old_len = self.len();

        // Values that would be overwritten within this same batch are never written.
        let skip = values.len().saturating_sub(cap);
        if skip > 0 {
            trace!("batch of {} exceeds capacity {}, skipping first {}", values.len(), cap, skip);
        }

        let mut pos = (self.end + skip) % cap;
        let mut last = pos;
        for &v in &values[skip..] {
            self.storage[pos] = v;
            last = pos;
            pos = (pos + 1) % cap;
        }
        let new_end = last + 1;
        self.empty = false;

        let total = old_len + values.len();
        if total >= cap {
            if total > cap {
                trace!("overwrote {} oldest values", total - cap);
            }
            // Oldest survivor sits right after the last write.
            self.begin = new_end % cap;
            self.end = self.begin;
        } else {
            self.end = new_end;
        }
    }

    /// Appends a single value. Same as `insert(&[value])`.
    pub fn push(&mut self, value: i64) {
        self.insert(std::slice::from_ref(&value));
    }

    /// Returns the contents oldest first, as a fresh `Vec`.
    pub fn get(&self) -> Vec<i64> {
        let (head, tail) = self.as_slices();
        let mut out = Vec::with_capacity(head.len() + tail.len());
        out.extend_from_slice(head);
        out.extend_from_slice(tail);
        out
    }

    /// The readable window as two physical segments, oldest first.
    /// The second segment is empty unless the window wraps.
    pub fn as_slices(&self) -> (&[i64], &[i64]) {
        let none = &self.storage[..0];
        if self.empty {
            (none, none)
        } else if self.end > self.begin {
            (&self.storage[self.begin..self.end], none)
        } else {
            (&self.storage[self.begin..], &self.storage[..self.end])
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &i64> + '_ {
        let (head, tail) = self.as_slices();
        head.iter().chain(tail.iter())
    }

    /// Returns up to `n` most-recent values, oldest first.
    pub fn last_n(&self, n: usize) -> Vec<i64> {
        let len = self.len();
        let n = n.min(len);
        self.iter().skip(len - n).copied().collect()
    }
}

impl Extend<i64> for RingBuffer {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        let batch: Vec<i64> = iter.into_iter().collect();
        self.insert(&batch);
    }
}

impl<'a> Extend<&'a i64> for RingBuffer {
    fn extend<I: IntoIterator<Item = &'a i64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
