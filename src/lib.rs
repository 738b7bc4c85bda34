//! circbuf - Fixed-Capacity Ring & Fifo Buffers
//!
//! Dua disiplin akses di atas struktur yang sama (array + capacity + cursor):
//! - `RingBuffer`: insert menimpa data tertua, lookback berdasarkan posisi
//! - `FifoBuffer`: push/pop urutan masuk, push gagal saat penuh
//!
//! ```
//! use circbuf::{FifoBuffer, RingBuffer};
//!
//! let mut ring: RingBuffer<i32> = RingBuffer::create_empty();
//! ring.allocate(3)?;
//! for v in 1..=4 {
//!     ring.insert(v)?;
//! }
//! assert_eq!(ring.get(0)?, 4);
//! assert_eq!(ring.get(2)?, 2);
//!
//! let mut fifo: FifoBuffer<i32> = FifoBuffer::create_empty();
//! fifo.allocate(2)?;
//! fifo.push(1)?;
//! fifo.push(2)?;
//! assert!(fifo.push(3).is_err());
//! assert_eq!(fifo.pop()?, 1);
//! # Ok::<(), circbuf::BufferError>(())
//! ```

pub mod core;

pub use crate::core::{BufferError, FifoBuffer, Result, RingBuffer, MIN_CAPACITY};
