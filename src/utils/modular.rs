//! Modular arithmetic helpers.
//!
//! Integer gcd, modular inverse by linear search, and determinant / adjugate
//! of small square matrices over ℤ/mℤ. Matrices are row-major `Vec<Vec<i64>>`
//! and are assumed square; callers validate the shape.

/// Greatest common divisor of the magnitudes of `a` and `b`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Returns `true` if `a` and `b` share no factor other than 1.
pub fn is_coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}

/// Finds the multiplicative inverse of `a` modulo `m` by linear search over
/// `1..m`.
///
/// # Returns
/// `None` when `a` has no inverse modulo `m`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = a.rem_euclid(m);
    (1..m).find(|x| (a * x) % m == 1)
}

/// Copy of `matrix` with row `row` and column `col` removed.
fn minor(matrix: &[Vec<i64>], row: usize, col: usize) -> Vec<Vec<i64>> {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Determinant of a square matrix reduced modulo `m`.
///
/// Uses cofactor expansion along the first row, reducing at every step so
/// intermediate values stay below `m²`. Intended for the small block sizes of
/// classical ciphers.
pub fn determinant_mod(matrix: &[Vec<i64>], m: i64) -> i64 {
    match matrix.len() {
        0 => 1 % m,
        1 => matrix[0][0].rem_euclid(m),
        2 => {
            let [a, b] = [matrix[0][0].rem_euclid(m), matrix[0][1].rem_euclid(m)];
            let [c, d] = [matrix[1][0].rem_euclid(m), matrix[1][1].rem_euclid(m)];
            (a * d - b * c).rem_euclid(m)
        }
        n => {
            let mut det = 0i64;
            for j in 0..n {
                let cofactor = determinant_mod(&minor(matrix, 0, j), m);
                let term = matrix[0][j].rem_euclid(m) * cofactor % m;
                det = if j % 2 == 0 { det + term } else { det - term };
                det = det.rem_euclid(m);
            }
            det
        }
    }
}

/// Adjugate (transposed cofactor matrix) reduced modulo `m`.
///
/// For a 2×2 matrix `[[a, b], [c, d]]` this is `[[d, -b], [-c, a]]`.
pub fn adjugate_mod(matrix: &[Vec<i64>], m: i64) -> Vec<Vec<i64>> {
    let n = matrix.len();
    if n == 1 {
        return vec![vec![1 % m]];
    }
    let mut adj = vec![vec![0i64; n]; n];
    for (i, adj_row) in adj.iter_mut().enumerate() {
        for (j, cell) in adj_row.iter_mut().enumerate() {
            let cofactor = determinant_mod(&minor(matrix, j, i), m);
            *cell = if (i + j) % 2 == 0 {
                cofactor
            } else {
                (-cofactor).rem_euclid(m)
            };
        }
    }
    adj
}

/// Multiplies `matrix` by a column vector modulo `m`.
pub fn mul_matrix_vector(matrix: &[Vec<i64>], vector: &[i64], m: i64) -> Vec<i64> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(vector)
                .fold(0i64, |acc, (&a, &x)| (acc + a.rem_euclid(m) * x) % m)
        })
        .collect()
}
