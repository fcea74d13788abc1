//! Route cipher: fill a grid row by row, read it back along a route.
//!
//! The route is generated as an explicit list of `(row, col)` coordinates
//! that depends only on the grid shape. Encryption projects the grid through
//! that list; decryption writes the ciphertext back along the same list and
//! reads the grid row-major.

use std::fmt;
use std::str::FromStr;

use crate::cipher::Cipher;
use crate::error::CipherError;

/// Character used to fill unused grid cells.
const PAD_CHAR: char = 'X';

/// Largest cell count whose traversal fits in one allocation.
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<(usize, usize)>();

/// Number of cells in a `rows × cols` grid, if it is non-empty and
/// addressable.
fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| cells > 0 && cells <= MAX_CELLS)
}

/// Grid traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Ring by ring from the outside in.
    #[default]
    Spiral,
    /// Row by row, alternating left-to-right and right-to-left.
    Snake,
    /// Anti-diagonals `row + col = 0, 1, 2, ...`, top row first.
    Diagonal,
}

impl FromStr for Route {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spiral" => Ok(Route::Spiral),
            "snake" => Ok(Route::Snake),
            "diagonal" => Ok(Route::Diagonal),
            _ => Err(CipherError::UnsupportedRoute {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Spiral => write!(f, "spiral"),
            Route::Snake => write!(f, "snake"),
            Route::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Rotation of a [`Route::Spiral`]. Ignored by the other routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpiralDirection {
    /// Top row left to right, then down the right column.
    #[default]
    Clockwise,
    /// Left column top to bottom, then along the bottom row.
    CounterClockwise,
}

impl FromStr for SpiralDirection {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clockwise" => Ok(SpiralDirection::Clockwise),
            "counter-clockwise" | "counterclockwise" => Ok(SpiralDirection::CounterClockwise),
            _ => Err(CipherError::UnsupportedDirection {
                name: s.to_string(),
            }),
        }
    }
}

/// Grid shape and traversal for a [`RouteCipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Traversal used to read the grid.
    pub route: Route,
    /// Spiral rotation.
    pub direction: SpiralDirection,
}

impl RouteConfig {
    /// A `rows × cols` grid read as a clockwise spiral.
    pub fn new(rows: usize, cols: usize) -> Self {
        RouteConfig {
            rows,
            cols,
            route: Route::default(),
            direction: SpiralDirection::default(),
        }
    }

    /// Replaces the traversal.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    /// Replaces the spiral rotation.
    pub fn with_direction(mut self, direction: SpiralDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Route transposition cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCipher {
    config: RouteConfig,
    positions: Vec<(usize, usize)>,
}

impl RouteCipher {
    /// Creates a Route cipher and precomputes its traversal.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidGridDimensions`] if either dimension is
    /// zero or `rows × cols` overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Cipher, RouteCipher, RouteConfig};
    ///
    /// let cipher = RouteCipher::new(RouteConfig::new(3, 3)).unwrap();
    /// assert_eq!(cipher.encrypt("123456789").unwrap(), "123698745");
    /// ```
    pub fn new(config: RouteConfig) -> Result<Self, CipherError> {
        if cell_count(config.rows, config.cols).is_none() {
            return Err(CipherError::InvalidGridDimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let positions = route_positions(config.rows, config.cols, config.route, config.direction);
        Ok(RouteCipher { config, positions })
    }

    /// The configuration this cipher was built from.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// The traversal as `(row, col)` coordinates.
    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }
}

impl Cipher for RouteCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let RouteConfig { rows, cols, .. } = self.config;
        let capacity = rows * cols;
        let mut cells: Vec<char> = plaintext
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if cells.len() > capacity {
            tracing::warn!(
                dropped = cells.len() - capacity,
                rows,
                cols,
                "text does not fit the route grid; excess characters dropped"
            );
            cells.truncate(capacity);
        }
        cells.resize(capacity, PAD_CHAR);

        Ok(self
            .positions
            .iter()
            .map(|&(row, col)| cells[row * cols + col])
            .collect())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let RouteConfig { rows, cols, .. } = self.config;
        let mut grid: Vec<Option<char>> = vec![None; rows * cols];
        for (&(row, col), c) in self.positions.iter().zip(ciphertext.chars()) {
            grid[row * cols + col] = Some(c);
        }
        Ok(grid.into_iter().flatten().collect())
    }
}

/// Generates the traversal of a `rows × cols` grid.
///
/// Every cell appears exactly once. Zero-sized grids, and grids too large to
/// address, yield no positions.
pub fn route_positions(
    rows: usize,
    cols: usize,
    route: Route,
    direction: SpiralDirection,
) -> Vec<(usize, usize)> {
    if cell_count(rows, cols).is_none() {
        return Vec::new();
    }
    match route {
        Route::Spiral => spiral_positions(rows, cols, direction),
        Route::Snake => snake_positions(rows, cols),
        Route::Diagonal => diagonal_positions(rows, cols),
    }
}

fn spiral_positions(rows: usize, cols: usize, direction: SpiralDirection) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(rows * cols);
    let (mut top, mut bottom) = (0isize, rows as isize - 1);
    let (mut left, mut right) = (0isize, cols as isize - 1);
    let mut push = |r: isize, c: isize| positions.push((r as usize, c as usize));

    while top <= bottom && left <= right {
        match direction {
            SpiralDirection::Clockwise => {
                for c in left..=right {
                    push(top, c);
                }
                top += 1;
                for r in top..=bottom {
                    push(r, right);
                }
                right -= 1;
                if top <= bottom {
                    for c in (left..=right).rev() {
                        push(bottom, c);
                    }
                    bottom -= 1;
                }
                if left <= right {
                    for r in (top..=bottom).rev() {
                        push(r, left);
                    }
                    left += 1;
                }
            }
            SpiralDirection::CounterClockwise => {
                for r in top..=bottom {
                    push(r, left);
                }
                left += 1;
                for c in left..=right {
                    push(bottom, c);
                }
                bottom -= 1;
                if left <= right {
                    for r in (top..=bottom).rev() {
                        push(r, right);
                    }
                    right -= 1;
                }
                if top <= bottom {
                    for c in (left..=right).rev() {
                        push(top, c);
                    }
                    top += 1;
                }
            }
        }
    }
    positions
}

fn snake_positions(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        if row % 2 == 0 {
            positions.extend((0..cols).map(|col| (row, col)));
        } else {
            positions.extend((0..cols).rev().map(|col| (row, col)));
        }
    }
    positions
}

fn diagonal_positions(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(rows * cols);
    for sum in 0..rows + cols - 1 {
        for row in 0..=sum.min(rows - 1) {
            let col = sum - row;
            if col < cols {
                positions.push((row, col));
            }
        }
    }
    positions
}

/// Encrypts `plaintext` with a named route (`spiral`, `snake`, `diagonal`)
/// and spiral direction (`clockwise`, `counter-clockwise`).
pub fn route_encrypt(
    plaintext: &str,
    rows: usize,
    cols: usize,
    route: &str,
    direction: &str,
) -> Result<String, CipherError> {
    let config = RouteConfig::new(rows, cols)
        .with_route(route.parse()?)
        .with_direction(direction.parse()?);
    RouteCipher::new(config)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with a named route and spiral direction.
pub fn route_decrypt(
    ciphertext: &str,
    rows: usize,
    cols: usize,
    route: &str,
    direction: &str,
) -> Result<String, CipherError> {
    let config = RouteConfig::new(rows, cols)
        .with_route(route.parse()?)
        .with_direction(direction.parse()?);
    RouteCipher::new(config)?.decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt(text: &str, rows: usize, cols: usize, route: &str, direction: &str) -> String {
        route_encrypt(text, rows, cols, route, direction).unwrap()
    }

    #[test]
    fn test_spiral_3x3() {
        assert_eq!(encrypt("123456789", 3, 3, "spiral", "clockwise"), "123698745");
        assert_eq!(
            encrypt("123456789", 3, 3, "spiral", "counter-clockwise"),
            "147896325"
        );
    }

    #[test]
    fn test_snake_and_diagonal_3x3() {
        assert_eq!(encrypt("123456789", 3, 3, "snake", "clockwise"), "123654789");
        assert_eq!(encrypt("123456789", 3, 3, "diagonal", "clockwise"), "124357689");
    }

    #[test]
    fn test_non_square_3x4() {
        let text = "ABCDEFGHIJKL";
        assert_eq!(encrypt(text, 3, 4, "spiral", "clockwise"), "ABCDHLKJIEFG");
        assert_eq!(encrypt(text, 3, 4, "spiral", "counter-clockwise"), "AEIJKLHDCBFG");
        assert_eq!(encrypt(text, 3, 4, "diagonal", "clockwise"), "ABECFIDGJHKL");
        assert_eq!(encrypt(text, 3, 4, "snake", "clockwise"), "ABCDHGFEIJKL");
    }

    #[test]
    fn test_pads_and_sanitises() {
        let ct = encrypt("We are discovered!", 4, 5, "spiral", "clockwise");
        assert_eq!(ct, "WeareodXXXXXvdiscere");
        assert_eq!(
            route_decrypt(&ct, 4, 5, "spiral", "clockwise").unwrap(),
            "WearediscoveredXXXXX"
        );
    }

    #[test]
    fn test_every_cell_visited_once() {
        let routes = [
            (Route::Spiral, SpiralDirection::Clockwise),
            (Route::Spiral, SpiralDirection::CounterClockwise),
            (Route::Snake, SpiralDirection::Clockwise),
            (Route::Diagonal, SpiralDirection::Clockwise),
        ];
        for rows in 1..9 {
            for cols in 1..9 {
                for &(route, direction) in &routes {
                    let mut positions = route_positions(rows, cols, route, direction);
                    assert_eq!(positions.len(), rows * cols, "{}x{} {}", rows, cols, route);
                    positions.sort_unstable();
                    positions.dedup();
                    assert_eq!(positions.len(), rows * cols, "{}x{} {}", rows, cols, route);
                    assert!(positions.iter().all(|&(r, c)| r < rows && c < cols));
                }
            }
        }
    }

    #[test]
    fn test_degenerate_grids() {
        assert_eq!(encrypt("ABCD", 1, 4, "spiral", "clockwise"), "ABCD");
        assert_eq!(encrypt("ABCD", 4, 1, "spiral", "clockwise"), "ABCD");
        assert_eq!(encrypt("ABCD", 1, 4, "spiral", "counter-clockwise"), "ABCD");
        assert_eq!(encrypt("A", 1, 1, "diagonal", "clockwise"), "A");
    }

    #[test]
    fn test_excess_text_dropped() {
        assert_eq!(encrypt("ABCDEFG", 2, 2, "snake", "clockwise"), "ABDC");
    }

    #[test]
    fn test_roundtrip_full_grid() {
        let text = "ThisIsAFullGrid12345";
        for route in ["spiral", "snake", "diagonal"] {
            for direction in ["clockwise", "counter-clockwise"] {
                let ct = encrypt(text, 4, 5, route, direction);
                assert_eq!(route_decrypt(&ct, 4, 5, route, direction).unwrap(), text);
            }
        }
    }

    #[test]
    fn test_names_case_insensitive() {
        assert_eq!("SPIRAL".parse::<Route>().unwrap(), Route::Spiral);
        assert_eq!("Snake".parse::<Route>().unwrap(), Route::Snake);
        assert_eq!(
            "Counter-Clockwise".parse::<SpiralDirection>().unwrap(),
            SpiralDirection::CounterClockwise
        );
    }

    #[test]
    fn test_unsupported_route() {
        let err = route_encrypt("abc", 2, 2, "zigzag", "clockwise").unwrap_err();
        assert_eq!(
            err,
            CipherError::UnsupportedRoute {
                name: "zigzag".to_string()
            }
        );
        assert!(route_decrypt("abc", 2, 2, "", "clockwise").is_err());
    }

    #[test]
    fn test_unsupported_direction() {
        assert!(matches!(
            route_encrypt("abc", 2, 2, "spiral", "sideways"),
            Err(CipherError::UnsupportedDirection { .. })
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            RouteCipher::new(RouteConfig::new(0, 3)),
            Err(CipherError::InvalidGridDimensions { rows: 0, cols: 3 })
        );
        assert!(route_decrypt("abc", 3, 0, "snake", "clockwise").is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(
            route_encrypt("HELLO", usize::MAX, 2, "snake", "clockwise"),
            Err(CipherError::InvalidGridDimensions {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(
            RouteCipher::new(RouteConfig::new(usize::MAX, 1)),
            Err(CipherError::InvalidGridDimensions {
                rows: usize::MAX,
                cols: 1
            })
        );
        assert!(route_positions(usize::MAX, 2, Route::Diagonal, SpiralDirection::Clockwise)
            .is_empty());
    }

    #[test]
    fn test_decrypt_short_ciphertext_leaves_gaps() {
        let cipher = RouteCipher::new(RouteConfig::new(2, 2).with_route(Route::Snake)).unwrap();
        // Snake order (0,0) (0,1) (1,1) (1,0); only three characters supplied
        assert_eq!(cipher.decrypt("ABC").unwrap(), "ABC");
        assert_eq!(cipher.decrypt("ABCD").unwrap(), "ABDC");
    }
}
