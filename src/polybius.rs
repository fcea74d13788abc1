//! Polybius square: symbols addressed by a pair of axis labels.
//!
//! An `N × N` table of symbols with `N` distinct axis labels. A symbol is
//! encoded as `(label[row], label[col])` of its first occurrence, searching
//! rows outermost. The default is the 6×6 ADFGVX square:
//!
//! ```text
//!     A D F G V X
//!   A A B C D E F
//!   D G H I J K L
//!   F M N O P Q R
//!   G S T U V W X
//!   V Y Z 0 1 2 3
//!   X 4 5 6 7 8 9
//! ```

use crate::error::CipherError;

/// Axis labels of the ADFGVX square.
const ADFGVX_LABELS: &str = "ADFGVX";

/// Cell contents of the default ADFGVX square, row-major.
const ADFGVX_CELLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A square lookup table with labelled axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    labels: Vec<char>,
    cells: Vec<Vec<char>>,
}

impl Default for PolybiusSquare {
    fn default() -> Self {
        Self::adfgvx()
    }
}

impl PolybiusSquare {
    /// Creates a square from its axis labels and rows of cells.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedSquare`] if there are no labels, the
    /// labels repeat, the number of rows differs from the number of labels,
    /// or any row has a different width.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::PolybiusSquare;
    ///
    /// let adfgx = PolybiusSquare::from_rows(
    ///     "ADFGX",
    ///     &["BTALP", "DHOZK", "QFVSN", "GICUX", "MREWY"],
    /// )
    /// .unwrap();
    /// assert_eq!(adfgx.coordinates('Z'), Some(('D', 'G')));
    ///
    /// assert!(PolybiusSquare::from_rows("AB", &["XY"]).is_err());
    /// ```
    pub fn new(labels: Vec<char>, cells: Vec<Vec<char>>) -> Result<Self, CipherError> {
        let width = labels.len();
        if width == 0 {
            return Err(malformed("no axis labels"));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(malformed(format!("axis label '{}' repeats", label)));
            }
        }
        if cells.len() != width {
            return Err(malformed(format!(
                "expected {} rows for {} labels, got {}",
                width,
                width,
                cells.len()
            )));
        }
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(malformed(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                width
            )));
        }
        Ok(PolybiusSquare { labels, cells })
    }

    /// Creates a square from a label string and one string per row.
    ///
    /// # Errors
    /// Same conditions as [`PolybiusSquare::new`].
    pub fn from_rows(labels: &str, rows: &[&str]) -> Result<Self, CipherError> {
        Self::new(
            labels.chars().collect(),
            rows.iter().map(|row| row.chars().collect()).collect(),
        )
    }

    /// The 6×6 ADFGVX square covering `A`–`Z` and `0`–`9`.
    pub fn adfgvx() -> Self {
        let width = ADFGVX_LABELS.len();
        let cells: Vec<char> = ADFGVX_CELLS.chars().collect();
        PolybiusSquare {
            labels: ADFGVX_LABELS.chars().collect(),
            cells: cells.chunks(width).map(<[char]>::to_vec).collect(),
        }
    }

    /// Axis labels, shared by rows and columns.
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    /// Number of labels (and rows, and columns).
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    /// `(row, col)` of the first cell holding `symbol`.
    pub fn locate(&self, symbol: char) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&c| c == symbol)
                .map(|col| (row, col))
        })
    }

    /// Label pair encoding `symbol`.
    pub fn coordinates(&self, symbol: char) -> Option<(char, char)> {
        self.locate(symbol)
            .map(|(row, col)| (self.labels[row], self.labels[col]))
    }

    /// Symbol addressed by a label pair.
    pub fn symbol_at(&self, row_label: char, col_label: char) -> Option<char> {
        let row = self.labels.iter().position(|&l| l == row_label)?;
        let col = self.labels.iter().position(|&l| l == col_label)?;
        Some(self.cells[row][col])
    }
}

fn malformed(reason: impl Into<String>) -> CipherError {
    CipherError::MalformedSquare {
        reason: reason.into(),
    }
}
