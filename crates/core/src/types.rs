//! Scalar aliases shared by models, repositories and handlers.

/// Row identifier for products and categories (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Creation/modification time, always stored and serialized as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
