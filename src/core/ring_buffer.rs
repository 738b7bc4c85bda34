//! Ring Buffer dengan lookback berdasarkan posisi
//!
//! Insert selalu berhasil: begitu semua slot terisi, nilai tertua ditimpa.
//! Posisi 0 selalu nilai yang paling baru di-insert, posisi `capacity - 1`
//! nilai tertua yang masih tersimpan. `get` tidak menghapus data.

use log::{debug, error, trace};

use super::error::{BufferError, Result};
use super::storage::{alloc_zeroed, check_capacity, uninitialized};

/// Ring buffer berkapasitas tetap untuk menyimpan N nilai terakhir
///
/// Tidak membedakan "penuh" dan "belum penuh": sejak `allocate`, semua slot
/// dianggap data valid (berisi zero value `T`).
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    // None = belum di-allocate
    storage: Option<Box<[T]>>,
    // Index nilai yang paling baru di-insert
    cursor: usize,
}

impl<T: Copy + Default> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::create_empty()
    }
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Membuat buffer kosong tanpa storage. Aman langsung di-`allocate`.
    pub const fn create_empty() -> Self {
        Self {
            storage: None,
            cursor: 0,
        }
    }

    /// Alokasi storage berisi `capacity` zero value.
    ///
    /// Kalau buffer sudah ter-allocate dengan capacity yang sama, tidak ada
    /// yang berubah (isi tetap). Kalau beda, storage lama dibuang dan
    /// cursor kembali ke 0.
    ///
    /// # Errors
    /// `InvalidCapacity` jika `capacity < 2`, `AllocationFailed` jika
    /// alokasi gagal.
    pub fn allocate(&mut self, capacity: usize) -> Result<()> {
        check_capacity(capacity, "RingBuffer::allocate")?;

        if self.capacity() == capacity {
            return Ok(());
        }

        self.release();
        self.storage = Some(alloc_zeroed(capacity)?);
        Ok(())
    }

    /// Membuang storage dan kembali ke state kosong.
    ///
    /// Boleh dipanggil berkali-kali.
    pub fn release(&mut self) {
        if let Some(old) = self.storage.take() {
            debug!("RingBuffer released {} slots", old.len());
        }
        self.cursor = 0;
    }

    /// Isi semua slot dengan zero value dan cursor kembali ke 0.
    pub fn reset(&mut self) -> Result<()> {
        let slots = self
            .storage
            .as_deref_mut()
            .ok_or_else(|| uninitialized("RingBuffer::reset"))?;

        slots.fill(T::default());
        self.cursor = 0;
        trace!("RingBuffer reset");
        Ok(())
    }

    /// Insert nilai baru; nilai tertua ditimpa jika semua slot sudah terpakai.
    ///
    /// Setelah insert, `get(0)` mengembalikan `value`.
    #[inline(always)]
    pub fn insert(&mut self, value: T) -> Result<()> {
        let slots = self
            .storage
            .as_deref_mut()
            .ok_or_else(|| uninitialized("RingBuffer::insert"))?;

        let next = self.cursor + 1;
        self.cursor = if next >= slots.len() { 0 } else { next };
        slots[self.cursor] = value;
        Ok(())
    }

    /// Ambil nilai `position` langkah di belakang insert terakhir.
    ///
    /// `position` 0 = nilai terbaru, `capacity - 1` = nilai tertua.
    #[inline(always)]
    pub fn get(&self, position: usize) -> Result<T> {
        self.get_ref(position).copied()
    }

    /// Sama seperti `get`, tapi mengembalikan reference ke slot.
    #[inline(always)]
    pub fn get_ref(&self, position: usize) -> Result<&T> {
        let slots = self
            .storage
            .as_deref()
            .ok_or_else(|| uninitialized("RingBuffer::get"))?;

        let capacity = slots.len();
        if position >= capacity {
            error!("RingBuffer::get: position {position} out of bounds (capacity {capacity})");
            return Err(BufferError::PositionOutOfRange { position, capacity });
        }

        // Wraparound tanpa underflow
        let index = if position > self.cursor {
            self.cursor + capacity - position
        } else {
            self.cursor - position
        };
        Ok(&slots[index])
    }

    /// Kapasitas buffer, 0 jika belum di-allocate
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.as_deref().map_or(0, <[T]>::len)
    }

    /// Cek apakah storage sudah di-allocate
    #[inline(always)]
    pub fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocated(capacity: usize) -> RingBuffer<i32> {
        let mut rb = RingBuffer::create_empty();
        rb.allocate(capacity).unwrap();
        rb
    }

    fn contents(rb: &RingBuffer<i32>) -> Vec<i32> {
        (0..rb.capacity()).map(|p| rb.get(p).unwrap()).collect()
    }

    #[test]
    fn test_create_empty() {
        let rb: RingBuffer<i32> = RingBuffer::create_empty();
        assert!(!rb.is_allocated());
        assert_eq!(rb.capacity(), 0);
        assert_eq!(rb.cursor, 0);
    }

    #[test]
    fn test_untouched_buffer_reads_zero() {
        for capacity in 2..10 {
            let rb = allocated(capacity);
            assert_eq!(rb.get(0), Ok(0));
            assert_eq!(rb.get(capacity - 1), Ok(0));
        }

        let mut rb: RingBuffer<f32> = RingBuffer::create_empty();
        rb.allocate(4).unwrap();
        assert_eq!(rb.get(3), Ok(0.0));
    }

    #[test]
    fn test_fill_then_lookback() {
        let mut rb = allocated(5);
        for v in 10..15 {
            rb.insert(v).unwrap();
        }

        assert_eq!(rb.get(0), Ok(14));
        assert_eq!(rb.get(4), Ok(10));
        assert_eq!(contents(&rb), vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_wraparound() {
        let mut rb = allocated(3);
        for v in 1..=4 {
            rb.insert(v).unwrap();
        }

        // 1 sudah tertimpa
        assert_eq!(contents(&rb), vec![4, 3, 2]);

        // Putar terus beberapa kali
        for v in 5..=100 {
            rb.insert(v).unwrap();
            assert_eq!(rb.get(0), Ok(v));
            assert_eq!(rb.get(2), Ok(v - 2));
        }
    }

    #[test]
    fn test_partial_fill_keeps_zeros() {
        let mut rb = allocated(4);
        rb.insert(7).unwrap();
        rb.insert(8).unwrap();

        assert_eq!(contents(&rb), vec![8, 7, 0, 0]);
    }

    #[test]
    fn test_get_out_of_range() {
        let rb = allocated(3);
        assert_eq!(
            rb.get(3),
            Err(BufferError::PositionOutOfRange {
                position: 3,
                capacity: 3
            })
        );
        assert!(rb.get(usize::MAX).is_err());
        assert!(rb.get_ref(3).is_err());
    }

    #[test]
    fn test_get_ref_matches_get() {
        let mut rb = allocated(3);
        for v in 0..4 {
            rb.insert(v).unwrap();
        }
        for p in 0..3 {
            assert_eq!(rb.get_ref(p).copied(), rb.get(p));
        }
        assert_eq!(rb.get_ref(0), Ok(&3));
    }

    #[test]
    fn test_uninitialized_operations_fail() {
        let mut rb: RingBuffer<i32> = RingBuffer::create_empty();
        assert_eq!(rb.insert(1), Err(BufferError::Uninitialized));
        assert_eq!(rb.get(0), Err(BufferError::Uninitialized));
        assert_eq!(rb.reset(), Err(BufferError::Uninitialized));
    }

    #[test]
    fn test_allocate_rejects_small_capacity() {
        let mut rb: RingBuffer<i32> = RingBuffer::create_empty();
        assert_eq!(rb.allocate(0), Err(BufferError::InvalidCapacity(0)));
        assert_eq!(rb.allocate(1), Err(BufferError::InvalidCapacity(1)));
        assert!(!rb.is_allocated());

        // Buffer yang sudah ada tidak tersentuh
        let mut rb = allocated(3);
        rb.insert(9).unwrap();
        assert!(rb.allocate(1).is_err());
        assert_eq!(rb.get(0), Ok(9));
    }

    #[test]
    fn test_reallocate_same_capacity_is_noop() {
        let mut rb = allocated(3);
        rb.insert(1).unwrap();
        rb.insert(2).unwrap();

        rb.allocate(3).unwrap();
        assert_eq!(contents(&rb), vec![2, 1, 0]);
    }

    #[test]
    fn test_reallocate_different_capacity_wipes() {
        let mut rb = allocated(3);
        rb.insert(1).unwrap();
        rb.insert(2).unwrap();

        rb.allocate(4).unwrap();
        assert_eq!(rb.capacity(), 4);
        assert_eq!(contents(&rb), vec![0, 0, 0, 0]);

        rb.insert(5).unwrap();
        assert_eq!(rb.get(0), Ok(5));
    }

    #[test]
    fn test_reset() {
        let mut rb = allocated(3);
        for v in 1..=5 {
            rb.insert(v).unwrap();
        }

        rb.reset().unwrap();
        assert_eq!(rb.capacity(), 3);
        assert_eq!(contents(&rb), vec![0, 0, 0]);

        rb.insert(42).unwrap();
        assert_eq!(rb.get(0), Ok(42));
    }

    #[test]
    fn test_release_twice() {
        let mut rb = allocated(3);
        rb.insert(1).unwrap();

        rb.release();
        assert!(!rb.is_allocated());
        assert_eq!(rb.capacity(), 0);

        rb.release();
        assert!(!rb.is_allocated());
        assert_eq!(rb.get(0), Err(BufferError::Uninitialized));

        // Bisa di-allocate ulang
        rb.allocate(2).unwrap();
        assert_eq!(rb.get(1), Ok(0));
    }
}
