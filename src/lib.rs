//! Fixed-capacity ring buffer of integers that overwrites its oldest values
//! and reads back in insertion order.
//!
//! ```
//! use ringlog::RingBuffer;
//!
//! let mut buf = RingBuffer::new(5)?;
//! buf.insert(&[1, 2, 3]);
//! buf.insert(&[4]);
//! buf.insert(&[5, 6]);
//! assert_eq!(buf.get(), vec![2, 3, 4, 5, 6]);
//! # Ok::<(), ringlog::RingBufferError>(())
//! ```

pub mod config;
pub mod error;
pub mod ring_buffer;

pub use config::{BufferConfig, Config};
pub use error::RingBufferError;
pub use ring_buffer::RingBuffer;
