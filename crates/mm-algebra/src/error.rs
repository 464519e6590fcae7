use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("required input `{0}` was not supplied")]
    AbsentInput(&'static str),
    #[error("source array is empty: {rows} x {cols}")]
    EmptyShape { rows: usize, cols: usize },
    #[error("{axis} index {index} out of range for extent {extent}")]
    OutOfRange {
        axis: &'static str,
        index: usize,
        extent: usize,
    },
    #[error("incompatible shape: {what} expected {expected}, got {got}")]
    IncompatibleShape {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
