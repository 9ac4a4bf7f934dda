use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An EC coordinate does not have the curve's exact field width
    #[error("invalid {coordinate} coordinate length for {curve}: expected {expected} bytes, got {actual}")]
    InvalidCoordinateLength {
        curve: &'static str,
        coordinate: &'static str,
        expected: usize,
        actual: usize,
    },
}
