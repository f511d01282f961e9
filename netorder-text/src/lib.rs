//! ASCII-only lowercase folding.
//!
//! Only `A`..=`Z` are rewritten; every other byte, including each byte of a
//! multi-byte UTF-8 sequence, passes through untouched. No locale tables are
//! consulted.

use unicase::Ascii;

#[inline]
pub fn fold_byte(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + (b'a' - b'A')
    } else {
        byte
    }
}

pub fn lower_in_place(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        *byte = fold_byte(*byte);
    }
}

pub fn lower_bytes<B: AsRef<[u8]>>(bytes: B) -> Vec<u8> {
    bytes.as_ref().iter().copied().map(fold_byte).collect()
}

/// Folds `s` to lowercase. Non-ASCII characters are left as they are, so the
/// result has exactly the same length as the input.
pub fn lower<S: AsRef<str>>(s: S) -> String {
    let mut folded = s.as_ref().to_owned();
    // ASCII-only rewriting keeps the buffer valid UTF-8
    folded.make_ascii_lowercase();
    folded
}

/// Compares two strings as if both had been passed through [`lower`].
pub fn eq_lower<A, B>(a: A, b: B) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    Ascii::new(a.as_ref()) == Ascii::new(b.as_ref())
}
