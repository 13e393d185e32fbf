//! Shared constants.

/// Default page size for paginated views.
pub const DEFAULT_QUERY_LIMIT: u64 = 50;

/// Hard cap on page size for paginated views.
pub const MAX_QUERY_LIMIT: u64 = 100;
