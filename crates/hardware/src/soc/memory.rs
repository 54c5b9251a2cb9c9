//! Flat word-addressable memory.
//!
//! Backs both instruction and data memory. Addresses are byte addresses
//! relative to a fixed base; all accesses are word-aligned. Out-of-range
//! or misaligned access is a caller contract violation and panics with a
//! diagnostic rather than surfacing a recoverable error.

use crate::common::constants::WORD_SIZE;

/// A fixed-size word store mapped at a base address.
#[derive(Debug, Clone)]
pub struct Memory {
    base: u32,
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zero-filled memory of `size_words` words at `base`.
    pub fn new(base: u32, size_words: usize) -> Self {
        Self {
            base,
            words: vec![0; size_words],
        }
    }

    /// Creates a memory at `base` holding exactly `words`.
    pub fn from_words(base: u32, words: Vec<u32>) -> Self {
        Self { base, words }
    }

    /// Creates a zero-filled memory of `size_words` words at `base` and
    /// copies `image` to its start.
    ///
    /// # Panics
    ///
    /// Panics if the image is larger than the memory.
    pub fn with_image(base: u32, size_words: usize, image: &[u32]) -> Self {
        assert!(
            image.len() <= size_words,
            "image of {} words does not fit in {size_words}-word memory",
            image.len()
        );
        let mut words = vec![0; size_words];
        words[..image.len()].copy_from_slice(image);
        Self { base, words }
    }

    /// Base address of this memory.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Size in bytes.
    pub fn size(&self) -> u32 {
        (self.words.len() as u32) * WORD_SIZE
    }

    /// Reads the word at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is misaligned or outside this memory.
    pub fn load_word(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    /// Writes `value` to the word at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is misaligned or outside this memory.
    pub fn store_word(&mut self, value: u32, addr: u32) {
        let idx = self.index(addr);
        self.words[idx] = value;
    }

    fn index(&self, addr: u32) -> usize {
        assert!(
            addr % WORD_SIZE == 0,
            "unaligned word access at {addr:#010x}"
        );
        let offset = addr.wrapping_sub(self.base);
        let idx = (offset / WORD_SIZE) as usize;
        assert!(
            addr >= self.base && idx < self.words.len(),
            "address {addr:#010x} outside memory [{:#010x}, {:#010x})",
            self.base,
            self.base + self.size()
        );
        idx
    }
}
