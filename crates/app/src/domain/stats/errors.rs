//! Stats service errors.

use std::num::TryFromIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsServiceError {
    #[error("count out of range")]
    OutOfRange(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
