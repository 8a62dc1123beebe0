use crate::error::{GridError, Result};
use crate::types::GridShape;
use nalgebra::DMatrix;

/// Reshape per-cell values into a `rows x cols` matrix, row-major:
/// `values[j + i * cols]` lands in row `i`, column `j`.
pub fn to_matrix(values: &[f64], shape: GridShape) -> Result<DMatrix<f64>> {
    if values.len() != shape.cell_count() {
        return Err(GridError::ShapeMismatch {
            len: values.len(),
            rows: shape.rows,
            cols: shape.cols,
        });
    }
    Ok(DMatrix::from_row_slice(shape.rows, shape.cols, values))
}
