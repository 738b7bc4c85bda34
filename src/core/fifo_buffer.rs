//! Fifo Buffer: antrian berkapasitas tetap
//!
//! Push menulis di belakang antrian, pop mengambil elemen tertua yang belum
//! dibaca. Berbeda dengan RingBuffer, elemen yang sudah di-pop tidak bisa
//! dilihat lagi, dan push ditolak kalau buffer penuh.
//!
//! Penuh/kosong adalah kondisi normal, jadi `Full`/`Empty` tidak di-log.

use log::{debug, trace};

use super::error::{BufferError, Result};
use super::storage::{alloc_zeroed, check_capacity, uninitialized};

/// Fifo buffer berkapasitas tetap
///
/// Region terisi adalah `[head, head + count)` modulo capacity.
#[derive(Debug, Clone)]
pub struct FifoBuffer<T> {
    storage: Option<Box<[T]>>,
    // Index elemen berikutnya yang akan di-pop
    head: usize,
    // Jumlah elemen yang belum dibaca
    count: usize,
}

impl<T: Copy + Default> Default for FifoBuffer<T> {
    fn default() -> Self {
        Self::create_empty()
    }
}

impl<T: Copy + Default> FifoBuffer<T> {
    /// Membuat buffer kosong tanpa storage.
    pub const fn create_empty() -> Self {
        Self {
            storage: None,
            head: 0,
            count: 0,
        }
    }

    /// Alokasi storage untuk `capacity` elemen.
    ///
    /// No-op jika capacity sama dengan yang sekarang; selain itu storage
    /// lama dibuang dan antrian mulai kosong.
    pub fn allocate(&mut self, capacity: usize) -> Result<()> {
        check_capacity(capacity, "FifoBuffer::allocate")?;

        if self.capacity() == capacity {
            return Ok(());
        }

        self.release();
        self.storage = Some(alloc_zeroed(capacity)?);
        Ok(())
    }

    /// Membuang storage. Boleh dipanggil berkali-kali.
    pub fn release(&mut self) {
        if let Some(old) = self.storage.take() {
            debug!("FifoBuffer released {} slots", old.len());
        }
        self.head = 0;
        self.count = 0;
    }

    /// Kosongkan antrian dan isi ulang storage dengan zero value.
    pub fn reset(&mut self) -> Result<()> {
        let slots = self
            .storage
            .as_deref_mut()
            .ok_or_else(|| uninitialized("FifoBuffer::reset"))?;

        slots.fill(T::default());
        self.head = 0;
        self.count = 0;
        trace!("FifoBuffer reset");
        Ok(())
    }

    /// Jumlah elemen yang menunggu di-pop.
    ///
    /// Bisa di-poll sebelum push/pop untuk cek penuh/kosong.
    #[inline(always)]
    pub fn available(&self) -> Result<usize> {
        if self.storage.is_none() {
            return Err(uninitialized("FifoBuffer::available"));
        }
        Ok(self.count)
    }

    /// Push nilai ke belakang antrian.
    ///
    /// Returns `Err(BufferError::Full)` tanpa log jika buffer penuh.
    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<()> {
        let slots = self
            .storage
            .as_deref_mut()
            .ok_or_else(|| uninitialized("FifoBuffer::push"))?;

        let capacity = slots.len();
        if self.count == capacity {
            return Err(BufferError::Full);
        }

        slots[(self.head + self.count) % capacity] = value;
        self.count += 1;
        Ok(())
    }

    /// Pop elemen tertua.
    ///
    /// Returns `Err(BufferError::Empty)` tanpa log jika tidak ada data.
    #[inline(always)]
    pub fn pop(&mut self) -> Result<T> {
        self.pop_ref().copied()
    }

    /// Pop elemen tertua dan kembalikan reference ke slot-nya.
    ///
    /// Reference valid sampai buffer dimutasi lagi (slot bisa ditimpa push).
    #[inline(always)]
    pub fn pop_ref(&mut self) -> Result<&T> {
        let slots = self
            .storage
            .as_deref()
            .ok_or_else(|| uninitialized("FifoBuffer::pop"))?;

        if self.count == 0 {
            return Err(BufferError::Empty);
        }

        let index = self.head;
        self.count -= 1;
        self.head = (self.head + 1) % slots.len();
        Ok(&slots[index])
    }

    /// Cek apakah antrian kosong (`false` jika belum di-allocate)
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_some() && self.count == 0
    }

    /// Cek apakah antrian penuh (`false` jika belum di-allocate)
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.storage.is_some() && self.count == self.capacity()
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
