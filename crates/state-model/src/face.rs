//! A single cube face as a 3x3 grid of classified labels.

use serde::{Deserialize, Serialize};

use cubist_common::{CubistError, CubistResult};

use crate::color::ColorLabel;

/// One face of the cube: nine classified facelets in `[row][col]` order.
///
/// Position `(1, 1)` is the center; on a solved cube it identifies the
/// face's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Facelet labels, rows top to bottom, columns left to right.
    pub cells: [[ColorLabel; 3]; 3],
}

impl Face {
    /// Build a face from dynamically shaped rows, checking the 3x3 shape.
    pub fn from_rows(rows: &[Vec<ColorLabel>]) -> CubistResult<Self> {
        if rows.len() != 3 {
            return Err(CubistError::malformed_grid(format!(
                "expected 3 rows, got {}",
                rows.len()
            )));
        }
        let mut cells = [[ColorLabel::White; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return Err(CubistError::malformed_grid(format!(
                    "row {} has {} cells, expected 3",
                    r,
                    row.len()
                )));
            }
            for (c, label) in row.iter().enumerate() {
                cells[r][c] = *label;
            }
        }
        Ok(Self { cells })
    }

    /// A face filled with a single label, as on a solved cube.
    pub fn uniform(label: ColorLabel) -> Self {
        Self {
            cells: [[label; 3]; 3],
        }
    }

    /// The center facelet.
    pub fn center(&self) -> ColorLabel {
        self.cells[1][1]
    }

    /// Iterate the nine facelets in row-major order.
    pub fn facelets(&self) -> impl Iterator<Item = ColorLabel> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_accepts_exact_3x3() {
        let rows = vec![
            vec![ColorLabel::White; 3],
            vec![ColorLabel::Red; 3],
            vec![ColorLabel::Blue; 3],
        ];
        let face = Face::from_rows(&rows).unwrap();
        assert_eq!(face.center(), ColorLabel::Red);
        assert_eq!(face.facelets().count(), 9);
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![ColorLabel::White; 3]; 2];
        let err = Face::from_rows(&rows).unwrap_err();
        assert!(matches!(err, CubistError::MalformedGrid { detail } if detail.contains("3 rows")));
    }

    #[test]
    fn test_from_rows_rejects_ragged_row() {
        let rows = vec![
            vec![ColorLabel::White; 3],
            vec![ColorLabel::White; 4],
            vec![ColorLabel::White; 3],
        ];
        let err = Face::from_rows(&rows).unwrap_err();
        assert!(matches!(err, CubistError::MalformedGrid { detail } if detail.contains("row 1")));
    }

    #[test]
    fn test_uniform_face() {
        let face = Face::uniform(ColorLabel::Green);
        assert!(face.facelets().all(|l| l == ColorLabel::Green));
        assert_eq!(face.center(), ColorLabel::Green);
    }
}
