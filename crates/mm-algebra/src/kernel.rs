//! Multiplication kernel over flat row-major buffers.
//!
//! The kernel is stateless: it validates the supplied buffers against the
//! declared dimensions, then computes the product either sequentially or
//! across a bounded pool of worker threads, depending on problem size.
//! It never constructs a [`Matrix`](crate::Matrix); the matrix type
//! delegates here.

use log::{debug, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{MatrixError, Result};

/// Multiply two row-major matrices, writing the product into `elems_result`.
///
/// `elems_x` has shape `[rows_x, cols_x]`, `elems_y` has shape
/// `[rows_y, cols_y]` and `elems_result` must have length
/// `rows_x * cols_y`. The result buffer is fully zeroed before
/// accumulation, so a reused buffer never carries values across calls.
///
/// Execution is parallel when `config.parallelize_order()` does not exceed
/// `rows_x + cols_y + cols_x` and more than one worker is allowed;
/// otherwise the product is computed on the calling thread. The choice of
/// strategy does not affect the numeric result.
#[allow(clippy::too_many_arguments)]
pub fn multiply(
    rows_x: usize,
    cols_x: usize,
    elems_x: Option<&[f64]>,
    rows_y: usize,
    cols_y: usize,
    elems_y: Option<&[f64]>,
    elems_result: Option<&mut [f64]>,
    config: &Config,
) -> Result<()> {
    let x = elems_x.ok_or(MatrixError::AbsentInput("elems_x"))?;
    let y = elems_y.ok_or(MatrixError::AbsentInput("elems_y"))?;
    let result = elems_result.ok_or(MatrixError::AbsentInput("elems_result"))?;

    if cols_x != rows_y {
        return Err(MatrixError::IncompatibleShape {
            what: "inner dimensions",
            expected: cols_x,
            got: rows_y,
        });
    }
    if x.len() != rows_x * cols_x {
        return Err(MatrixError::IncompatibleShape {
            what: "left element buffer",
            expected: rows_x * cols_x,
            got: x.len(),
        });
    }
    if y.len() != rows_y * cols_y {
        return Err(MatrixError::IncompatibleShape {
            what: "right element buffer",
            expected: rows_y * cols_y,
            got: y.len(),
        });
    }
    if result.len() != rows_x * cols_y {
        return Err(MatrixError::IncompatibleShape {
            what: "result element buffer",
            expected: rows_x * cols_y,
            got: result.len(),
        });
    }

    result.fill(0.0);
    if result.is_empty() {
        return Ok(());
    }

    // Materialize each column of the right operand as a contiguous vector,
    // so the dot-product loop walks sequential memory instead of striding
    // through the row-major buffer. Shared read-only by all workers.
    let columns_y: Vec<Vec<f64>> = (0..cols_y)
        .map(|j| (0..rows_y).map(|i| y[i * cols_y + j]).collect())
        .collect();

    let max_parallelism = config.max_parallelism();
    let parallel =
        config.parallelize_order() <= rows_x + cols_y + cols_x && max_parallelism > 1;
    debug!(
        "multiply [{}x{}] by [{}x{}]: {}",
        rows_x,
        cols_x,
        rows_y,
        cols_y,
        if parallel { "parallel" } else { "sequential" }
    );

    if parallel {
        multiply_parallel(rows_x, cols_x, x, &columns_y, result, max_parallelism);
    } else {
        multiply_span(0, cols_x, x, &columns_y, result);
    }
    Ok(())
}

/// Partition the row range across a bounded worker pool and join.
///
/// Each worker owns a contiguous, row-aligned chunk of the result buffer,
/// so no two workers ever write the same cell and no locking is needed.
fn multiply_parallel(
    rows_x: usize,
    cols_x: usize,
    elems_x: &[f64],
    columns_y: &[Vec<f64>],
    result: &mut [f64],
    max_parallelism: usize,
) {
    let chunk_rows = (rows_x / max_parallelism).max(1);
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(max_parallelism)
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            warn!("worker pool unavailable ({}), multiplying sequentially", err);
            multiply_span(0, cols_x, elems_x, columns_y, result);
            return;
        }
    };

    pool.install(|| {
        result
            .par_chunks_mut(chunk_rows * columns_y.len())
            .enumerate()
            .for_each(|(chunk_index, out)| {
                multiply_span(chunk_index * chunk_rows, cols_x, elems_x, columns_y, out)
            });
    });
}

/// Compute the rows of the product covered by `out`, starting at
/// `first_row` of the left operand.
///
/// Each row is copied into a contiguous scratch buffer before the dot
/// products, mirroring the column materialization on the left side. Sums
/// accumulate left to right and are added into the pre-zeroed output.
fn multiply_span(
    first_row: usize,
    cols_x: usize,
    elems_x: &[f64],
    columns_y: &[Vec<f64>],
    out: &mut [f64],
) {
    let cols_y = columns_y.len();
    let span_rows = out.len() / cols_y;
    let mut row = vec![0.0; cols_x];

    for i in 0..span_rows {
        let offset = (first_row + i) * cols_x;
        row.copy_from_slice(&elems_x[offset..offset + cols_x]);
        for (j, column) in columns_y.iter().enumerate() {
            let mut sum = 0.0;
            for term in 0..cols_x {
                sum += row[term] * column[term];
            }
            out[i * cols_y + j] += sum;
        }
    }
}
