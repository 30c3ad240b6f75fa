//! # Constants
//!
//! The canonical amino acid alphabet and the index helpers built on it.
//!
//! Every fixed-size output in this crate (amino acid composition, dipeptide
//! and tri-peptide keys) enumerates letters in [`AA_LETTERS`] order, so the
//! order here is part of the output format.

/// The 20 canonical amino acids, in output order.
pub const AA_LETTERS: [char; 20] = [
    'A', 'R', 'N', 'D', 'C', 'E', 'Q', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W',
    'Y', 'V',
];

pub const AA_COUNT: usize = AA_LETTERS.len();

#[rustfmt::skip]
/// Position of an uppercase canonical letter in [`AA_LETTERS`].
///
/// Lowercase letters are not canonical: composition counts are case-sensitive.
pub fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),  b'R' => Some(1),  b'N' => Some(2),  b'D' => Some(3),
        b'C' => Some(4),  b'E' => Some(5),  b'Q' => Some(6),  b'G' => Some(7),
        b'H' => Some(8),  b'I' => Some(9),  b'L' => Some(10), b'K' => Some(11),
        b'M' => Some(12), b'F' => Some(13), b'P' => Some(14), b'S' => Some(15),
        b'T' => Some(16), b'W' => Some(17), b'Y' => Some(18), b'V' => Some(19),
        _ => None,
    }
}

pub fn is_canonical(aa: char) -> bool {
    aa.is_ascii() && aa_index(aa as u8).is_some()
}
