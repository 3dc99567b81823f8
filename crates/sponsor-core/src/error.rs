use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown package id `{0}`")]
    UnknownPackage(String),
}

/// Failure reported by the outbound mail collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("mail service unavailable: {0}")]
    Unavailable(String),
    #[error("mail service rejected the request: {0}")]
    Rejected(String),
}
