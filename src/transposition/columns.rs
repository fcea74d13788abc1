//! Keyed columnar transposition primitives.
//!
//! Text of length `len` is laid into a grid of `width` columns row-major, so
//! cell `(row, col)` holds character `row * width + col` and the last row may
//! be short. Ciphertext is the grid read column by column in an order derived
//! from a keyword's rank vector.
//!
//! Two rank schemes exist:
//!
//! - [`strict_ranks`]: every key position gets a unique rank; equal letters
//!   are ordered by position (plain columnar transposition, ADFGVX).
//! - [`tied_ranks`]: equal letters share one rank (Myszkowski).
//!
//! Columns are read rank by rank; columns sharing a rank are read left to
//! right, each in full. With strict ranks that is the usual column order, so
//! [`encrypt_columns`] and [`decrypt_columns`] serve both ciphers.

/// Positions of `key` sorted by letter; ties keep their original order.
fn sorted_positions(key: &[u8]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..key.len()).collect();
    positions.sort_by_key(|&i| key[i]);
    positions
}

/// Unique rank per key position: `0..key.len()` in stable alphabetical order.
///
/// `strict_ranks(b"KEY")` (as indices) is `[1, 0, 2]`.
pub fn strict_ranks(key: &[u8]) -> Vec<usize> {
    let mut ranks = vec![0usize; key.len()];
    for (rank, pos) in sorted_positions(key).into_iter().enumerate() {
        ranks[pos] = rank;
    }
    ranks
}

/// Shared rank per distinct letter. Ranks are contiguous from 0 and follow
/// alphabetical order.
///
/// For `TOMATO` the ranks are `[3, 2, 1, 0, 3, 2]`.
pub fn tied_ranks(key: &[u8]) -> Vec<usize> {
    let mut ranks = vec![0usize; key.len()];
    let mut rank = 0usize;
    let mut previous: Option<u8> = None;
    for pos in sorted_positions(key) {
        if let Some(prev) = previous {
            if prev != key[pos] {
                rank += 1;
            }
        }
        ranks[pos] = rank;
        previous = Some(key[pos]);
    }
    ranks
}

/// Order in which columns are read: ascending rank, then ascending column.
pub fn column_order(ranks: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by_key(|&col| ranks[col]);
    order
}

/// Length of every column when `text_len` characters are laid row-major into
/// `width` columns.
///
/// All columns hold `rows = ceil(text_len / width)` cells except the last
/// `rows * width - text_len` columns in key-position order, which are one
/// shorter. Shortening follows key position, never rank, because the empty
/// cells are the tail of the final row.
pub fn column_lengths(text_len: usize, width: usize) -> Vec<usize> {
    if width == 0 {
        return Vec::new();
    }
    let rows = text_len.div_ceil(width);
    let empty = rows * width - text_len;
    (0..width)
        .map(|col| if col >= width - empty { rows - 1 } else { rows })
        .collect()
}

/// Reads `text` out of the grid column by column in rank order.
pub fn encrypt_columns(text: &[char], ranks: &[usize]) -> Vec<char> {
    let width = ranks.len();
    if width == 0 {
        return text.to_vec();
    }
    let mut output = Vec::with_capacity(text.len());
    for col in column_order(ranks) {
        output.extend((col..text.len()).step_by(width).map(|i| text[i]));
    }
    output
}

/// Inverse of [`encrypt_columns`]: refills the columns in rank order to
/// their computed lengths and reads the grid back row-major.
pub fn decrypt_columns(text: &[char], ranks: &[usize]) -> Vec<char> {
    let width = ranks.len();
    if width == 0 {
        return text.to_vec();
    }
    let lengths = column_lengths(text.len(), width);
    let mut grid = vec!['\0'; text.len()];
    let mut source = text.iter();
    for col in column_order(ranks) {
        for row in 0..lengths[col] {
            if let Some(&c) = source.next() {
                grid[row * width + col] = c;
            }
        }
    }
    grid
}
