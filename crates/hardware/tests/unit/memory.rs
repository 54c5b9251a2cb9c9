//! Word-addressed memory tests.

use pretty_assertions::assert_eq;

use mipsim_core::soc::Memory;

#[test]
fn words_load_back_at_their_byte_addresses() {
    let mut mem = Memory::new(0x1000_0000, 16);
    mem.store_word(0xcafe_f00d, 0x1000_0004);
    assert_eq!(mem.load_word(0x1000_0004), 0xcafe_f00d);
    assert_eq!(mem.load_word(0x1000_0000), 0);
}

#[test]
fn image_lands_at_the_base_of_a_zero_filled_bank() {
    let mem = Memory::with_image(0x0, 8, &[1, 2, 3]);
    assert_eq!(mem.load_word(0x0), 1);
    assert_eq!(mem.load_word(0x8), 3);
    assert_eq!(mem.load_word(0xc), 0);
    assert_eq!(mem.size(), 32);
}

#[test]
fn from_words_sizes_exactly() {
    let mem = Memory::from_words(0x40, vec![7, 8]);
    assert_eq!(mem.base(), 0x40);
    assert_eq!(mem.size(), 8);
    assert_eq!(mem.load_word(0x44), 8);
}

#[test]
#[should_panic(expected = "unaligned")]
fn unaligned_access_panics() {
    let mem = Memory::new(0, 4);
    let _ = mem.load_word(2);
}

#[test]
#[should_panic(expected = "outside memory")]
fn out_of_range_access_panics() {
    let mem = Memory::new(0x1000_0000, 4);
    let _ = mem.load_word(0x1000_0010);
}

#[test]
#[should_panic(expected = "outside memory")]
fn below_base_access_panics() {
    let mem = Memory::new(0x1000_0000, 4);
    let _ = mem.load_word(0x0fff_fffc);
}

#[test]
#[should_panic(expected = "does not fit")]
fn oversized_image_panics() {
    let _ = Memory::with_image(0, 2, &[1, 2, 3]);
}
