//! Core module: buffer berkapasitas tetap
//!
//! Prinsip desain:
//! - Fixed-Size: storage dialokasikan sekali, tidak pernah resize
//! - Generic: satu implementasi untuk semua `T: Copy + Default`
//! - Single-Threaded: tidak ada lock, caller yang serialisasi akses

mod error;
mod fifo_buffer;
mod ring_buffer;
mod storage;

pub use error::{BufferError, Result};
pub use fifo_buffer::FifoBuffer;
pub use ring_buffer::RingBuffer;
pub use storage::MIN_CAPACITY;
