//! Text rendering for matrices.
//!
//! Output glue, not part of the numeric core: elements are printed with a
//! capped number of decimals and each column is padded to its widest entry.

use std::fmt;

use crate::config::Config;
use crate::matrix::Matrix;

/// Render `matrix` as a right-aligned table, one line per matrix row, two
/// spaces between columns.
pub fn table(matrix: &Matrix, config: &Config) -> String {
    let decimals = config.print_decimal_places();
    let cells: Vec<String> = matrix
        .as_slice()
        .iter()
        .map(|&value| format_element(value, decimals))
        .collect();

    let cols = matrix.cols();
    let mut widths = vec![0usize; cols];
    for (index, cell) in cells.iter().enumerate() {
        let j = index % cols;
        widths[j] = widths[j].max(cell.len());
    }

    let mut out = String::new();
    for i in 0..matrix.rows() {
        for j in 0..cols {
            if j > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:>1$}", cells[i * cols + j], widths[j]));
        }
        out.push('\n');
    }
    out
}

/// Format one element with at most `decimals` decimal places, trimming
/// trailing zeros and a dangling decimal point ("2.50" -> "2.5",
/// "2.00" -> "2").
fn format_element(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut formatted = format!("{:.1$}", value, decimals);
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    formatted
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix {} x {}:\n{}",
            self.rows(),
            self.cols(),
            table(self, &Config::default())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(Some(&[
            vec![1.0, -22.5, 0.333],
            vec![100.0, 2.0, -0.25],
        ]))
        .unwrap()
    }

    #[test]
    fn test_table_preserves_row_count() {
        let rendered = table(&sample(), &Config::new());
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_table_columns_aligned() {
        let rendered = table(&sample(), &Config::new());
        let lengths: Vec<usize> = rendered.lines().map(str::len).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_format_element_trims_zeros() {
        assert_eq!(format_element(2.50, 2), "2.5");
        assert_eq!(format_element(2.0, 2), "2");
        assert_eq!(format_element(0.333, 2), "0.33");
        assert_eq!(format_element(-1.1, 2), "-1.1");
    }

    #[test]
    fn test_format_element_respects_precision() {
        assert_eq!(format_element(0.123456, 4), "0.1235");
        assert_eq!(format_element(0.123456, 12), "0.123456");
    }

    #[test]
    fn test_format_element_non_finite() {
        assert_eq!(format_element(f64::NAN, 2), "NaN");
        assert_eq!(format_element(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_display_has_header_and_rows() {
        let text = sample().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Matrix 2 x 3:"));
        assert_eq!(lines.count(), 2);
    }
}
