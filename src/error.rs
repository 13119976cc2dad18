use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions {width}x{height} are invalid, both must be positive")]
    InvalidDimension { width: usize, height: usize },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("cannot step a {from:?} grid into a {into:?} grid")]
    DimensionMismatch {
        from: (usize, usize),
        into: (usize, usize),
    },
}
