use thiserror::Error;

/// Contract violations of the pagination stage.
///
/// The controller clamps page numbers before paginating, so these only
/// surface when the stage is called directly with bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page {page} is out of range 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

pub type Result<T> = std::result::Result<T, QueryError>;
