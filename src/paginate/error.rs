//! Pagination error types.

use thiserror::Error;

/// Errors raised by the paginator itself.
///
/// Path generator and registry failures are passed through untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginateError {
    #[error("no configuration found for collection `{0}`")]
    ConfigurationNotFound(String),
}
