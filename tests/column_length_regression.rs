//! Regression grid for irregular column lengths.
//!
//! ADFGVX and Myszkowski both lay text into a keyed grid whose last row is
//! usually incomplete. The columns that end one row early are always the
//! rightmost by key position, whatever their rank. These tests sweep text
//! lengths against keyword widths so every shortening count from 0 up to
//! `width - 1` is exercised, with keywords chosen so short columns are read
//! first, last and in the middle.

use classicrypt::transposition::columns::{
    column_lengths, decrypt_columns, encrypt_columns, strict_ranks, tied_ranks,
};
use classicrypt::utils::alphabet::keyword_indices;
use classicrypt::{Adfgvx, Cipher, Myszkowski};

/// Keywords whose alphabetical order puts the rightmost columns in varied
/// rank positions.
const KEYWORDS: [&str; 8] = [
    "A", "ZA", "ABC", "CBA", "KEY", "ZEBRAS", "TOMATO", "MISSISSIPPI",
];

const SAMPLE: &str = "ATTACKATDAWNTHENRETREATTOTHERIVERBEFOREMIDNIGHT0123456789";

// ═══════════════════════════════════════════════════════════════════════
// Length distribution
// ═══════════════════════════════════════════════════════════════════════

/// Lengths sum to the text length and differ by at most one.
#[test]
fn lengths_cover_text_exactly() {
    for width in 1..=12 {
        for len in 0..=60 {
            let lengths = column_lengths(len, width);
            assert_eq!(lengths.len(), width);
            assert_eq!(lengths.iter().sum::<usize>(), len, "len={} width={}", len, width);
            let max = lengths.iter().max().copied().unwrap_or(0);
            let min = lengths.iter().min().copied().unwrap_or(0);
            assert!(max - min <= 1);
        }
    }
}

/// Short columns are the trailing key positions.
#[test]
fn short_columns_are_rightmost() {
    for width in 1..=12 {
        for len in 0..=60 {
            let lengths = column_lengths(len, width);
            let long = len.div_ceil(width);
            let shortened = long * width - len;
            for (col, &l) in lengths.iter().enumerate() {
                let expected = if col + shortened >= width { long - 1 } else { long };
                assert_eq!(l, expected, "len={} width={} col={}", len, width, col);
            }
        }
    }
}

/// A few fixed snapshots.
#[test]
fn length_snapshots() {
    assert_eq!(column_lengths(10, 3), vec![4, 3, 3]);
    assert_eq!(column_lengths(11, 3), vec![4, 4, 3]);
    assert_eq!(column_lengths(12, 3), vec![4, 4, 4]);
    assert_eq!(column_lengths(2, 5), vec![1, 1, 0, 0, 0]);
    assert_eq!(column_lengths(0, 4), vec![0, 0, 0, 0]);
}

// ═══════════════════════════════════════════════════════════════════════
// Column read / refill
// ═══════════════════════════════════════════════════════════════════════

/// Refilling columns inverts reading them for both rank schemes.
#[test]
fn primitives_invert_for_every_length() {
    let sample: Vec<char> = SAMPLE.chars().collect();
    for keyword in KEYWORDS {
        let key = keyword_indices(keyword).unwrap();
        for ranks in [strict_ranks(&key), tied_ranks(&key)] {
            for len in 0..=sample.len() {
                let text = &sample[..len];
                let ct = encrypt_columns(text, &ranks);
                assert_eq!(ct.len(), len);
                assert_eq!(decrypt_columns(&ct, &ranks), text, "{} len={}", keyword, len);
            }
        }
    }
}

/// Short column read first: `CBA` reads column 2 (the one shortened) first.
#[test]
fn shortened_column_read_first() {
    let ranks = strict_ranks(&keyword_indices("CBA").unwrap());
    let text: Vec<char> = "ABCDEFG".chars().collect();
    // Grid: A B C / D E F / G
    let ct: String = encrypt_columns(&text, &ranks).into_iter().collect();
    assert_eq!(ct, "CFBEADG");
    let pt: String = decrypt_columns(&ct.chars().collect::<Vec<_>>(), &ranks)
        .into_iter()
        .collect();
    assert_eq!(pt, "ABCDEFG");
}

// ═══════════════════════════════════════════════════════════════════════
// Ciphers
// ═══════════════════════════════════════════════════════════════════════

/// ADFGVX over every prefix of the sample. The fractionated stream is twice
/// the text length, so odd widths see every shortening count.
#[test]
fn adfgvx_every_prefix() {
    for keyword in KEYWORDS {
        let cipher = Adfgvx::new(keyword).unwrap();
        for len in 0..=SAMPLE.len() {
            let text = &SAMPLE[..len];
            let ct = cipher.encrypt(text).unwrap();
            assert_eq!(cipher.decrypt(&ct).unwrap(), text, "{} len={}", keyword, len);
        }
    }
}

/// Myszkowski over every prefix of the sample.
#[test]
fn myszkowski_every_prefix() {
    for keyword in KEYWORDS {
        let cipher = Myszkowski::new(keyword).unwrap();
        for len in 0..=SAMPLE.len() {
            let text = &SAMPLE[..len];
            let ct = cipher.encrypt(text).unwrap();
            assert_eq!(cipher.decrypt(&ct).unwrap(), text, "{} len={}", keyword, len);
        }
    }
}
