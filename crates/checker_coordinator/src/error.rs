use thiserror::Error;

use crate::host::HostError;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("no urls to open")]
    EmptyRequest,
    #[error("window creation returned no tabs")]
    WindowCreation,
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Failure of the single-shot request/response channel itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("coordinator is not reachable")]
    CoordinatorGone,
}
