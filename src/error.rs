use thiserror::Error;

/// Errors raised while building a [`RingBuffer`](crate::RingBuffer).
///
/// Only construction is fallible; inserts and reads accept every input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("invalid capacity {capacity}: a ring buffer needs at least one slot")]
    InvalidCapacity { capacity: usize },
}
