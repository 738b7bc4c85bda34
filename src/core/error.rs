//! Error type bersama untuk RingBuffer dan FifoBuffer
//!
//! Ada dua kelas error, tapi lewat satu channel yang sama:
//! - Usage error: buffer belum di-allocate, capacity < 2, posisi di luar range
//! - Boundary: fifo penuh saat push, fifo kosong saat pop (tidak di-log)

use thiserror::Error;

/// Result alias untuk semua operasi buffer
pub type Result<T> = std::result::Result<T, BufferError>;

/// Kegagalan operasi buffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Operasi dipanggil sebelum `allocate` (atau setelah `release`).
    #[error("buffer is not allocated")]
    Uninitialized,

    /// Capacity harus >= 2.
    #[error("capacity must be >= 2, got {0}")]
    InvalidCapacity(usize),

    /// Posisi lookback di luar `[0, capacity-1]`.
    #[error("position {position} out of bounds for capacity {capacity}")]
    PositionOutOfRange {
        /// Posisi yang diminta
        position: usize,
        /// Capacity buffer saat ini
        capacity: usize,
    },

    /// Alokasi storage gagal.
    #[error("failed to allocate storage for {0} elements")]
    AllocationFailed(usize),

    /// Fifo penuh, push ditolak.
    #[error("buffer is full")]
    Full,

    /// Fifo kosong, tidak ada yang bisa di-pop.
    #[error("buffer is empty")]
    Empty,
}

impl BufferError {
    /// `true` untuk kondisi penuh/kosong yang memang diharapkan caller.
    ///
    /// Error jenis ini bukan pelanggaran kontrak: caller cukup cek
    /// `available()` atau coba lagi nanti.
    #[inline(always)]
    pub const fn is_boundary(&self) -> bool {
        matches!(self, BufferError::Full | BufferError::Empty)
    }
}
