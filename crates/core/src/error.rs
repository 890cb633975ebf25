use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every failure a handler can surface maps onto one of these variants;
/// the HTTP layer translates them to status codes exactly once at the
/// response boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An external adapter (geocoding, bin detection, classification)
    /// returned no usable result.
    #[error("Upstream service failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
