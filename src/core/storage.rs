//! Backing storage untuk kedua buffer
//!
//! Storage dialokasikan sekali dengan ukuran tetap, diisi zero value `T`.
//! Tidak ada resize setelah itu.

use log::{debug, error};

use super::error::{BufferError, Result};

/// Capacity minimum untuk semua buffer
pub const MIN_CAPACITY: usize = 2;

/// Validasi capacity sebelum alokasi
#[inline(always)]
pub(crate) fn check_capacity(capacity: usize, op: &'static str) -> Result<()> {
    if capacity < MIN_CAPACITY {
        error!("{op}: capacity must be >= {MIN_CAPACITY}, got {capacity}");
        return Err(BufferError::InvalidCapacity(capacity));
    }
    Ok(())
}

/// Alokasi slice berisi `capacity` zero value.
///
/// Memakai `try_reserve_exact` supaya kehabisan memori jadi `Err`,
/// bukan abort.
pub(crate) fn alloc_zeroed<T: Copy + Default>(capacity: usize) -> Result<Box<[T]>> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        error!("failed to allocate storage for {capacity} elements");
        return Err(BufferError::AllocationFailed(capacity));
    }
    slots.resize(capacity, T::default());
    debug!(
        "allocated {} slots ({} bytes)",
        capacity,
        capacity * std::mem::size_of::<T>()
    );
    Ok(slots.into_boxed_slice())
}

/// Error untuk operasi pada buffer yang belum di-allocate
#[inline(always)]
pub(crate) fn uninitialized(op: &'static str) -> BufferError {
    error!("{op}: buffer uninitialized");
    BufferError::Uninitialized
}
