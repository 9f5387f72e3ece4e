use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Invalid ID - Not a valid number")]
    InvalidIdentifier(#[from] ParseIntError),

    #[error("Article with ID {0} already exists")]
    DuplicateIdentifier(i64),

    #[error("Invalid URL parameters")]
    InvalidQueryPath,

    #[error("Invalid date format - use yyyymmdd")]
    InvalidDate,
}
