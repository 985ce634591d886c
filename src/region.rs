#![allow(unsafe_code)]

use core::sync::atomic::{AtomicU32, Ordering};

/// Capability over one device instance's mapped register memory.
///
/// The region is word-addressed: every transfer is a single aligned 32-bit
/// load or store, so a reader never observes a torn value even when it does
/// not hold the window's write lock. A region is exclusively owned by the
/// window it is attached to and is handed back at detach time.
pub struct MappedRegion<'a> {
    words: &'a [AtomicU32],
}

impl core::fmt::Debug for MappedRegion<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MappedRegion")
            .field("span", &self.span())
            .finish_non_exhaustive()
    }
}

impl<'a> MappedRegion<'a> {
    /// Wraps a word slice as a register region.
    ///
    /// Useful for RAM-backed windows and tests; real hardware goes through
    /// [`MappedRegion::from_raw`].
    pub const fn new(words: &'a [AtomicU32]) -> Self {
        Self { words }
    }

    /// Wraps a raw mapped register block of `span` bytes.
    ///
    /// # Safety
    ///
    /// `base` must point to `span` bytes of mapped device memory, 4-byte
    /// aligned and valid for reads and writes for the lifetime `'a`, and the
    /// block must not be accessed through any other path while the region
    /// exists. `span` must be a multiple of 4.
    pub unsafe fn from_raw(base: *mut u32, span: usize) -> Self {
        debug_assert!(span % 4 == 0);
        debug_assert!(base.is_aligned());
        let words = unsafe { core::slice::from_raw_parts(base.cast::<AtomicU32>(), span / 4) };
        Self { words }
    }

    /// Total addressable byte length of the region.
    pub const fn span(&self) -> usize {
        self.words.len() * 4
    }

    /// One atomic 32-bit load at a validated, aligned byte offset.
    pub(crate) fn load(&self, offset: usize) -> u32 {
        debug_assert!(offset % 4 == 0);
        self.words[offset / 4].load(Ordering::Relaxed)
    }

    /// One atomic 32-bit store at a validated, aligned byte offset.
    pub(crate) fn store(&self, offset: usize, value: u32) {
        debug_assert!(offset % 4 == 0);
        self.words[offset / 4].store(value, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::words;

    #[test]
    fn span_counts_bytes() {
        let storage = words::<4>();
        assert_eq!(MappedRegion::new(&storage).span(), 16);
        assert_eq!(MappedRegion::new(&storage[..1]).span(), 4);
    }

    #[test]
    fn load_reflects_store() {
        let storage = words::<2>();
        let region = MappedRegion::new(&storage);

        region.store(4, 0xDEAD_BEEF);
        assert_eq!(region.load(4), 0xDEAD_BEEF);
        assert_eq!(region.load(0), 0);
    }

    #[test]
    fn from_raw_wraps_a_word_block() {
        let mut block = [0u32; 4];
        let region = unsafe { MappedRegion::from_raw(block.as_mut_ptr(), 16) };

        region.store(8, 0x1234);
        assert_eq!(region.load(8), 0x1234);
        assert_eq!(region.span(), 16);
    }
}
