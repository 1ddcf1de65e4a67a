//! # Fixed Primitives
//!
//! Compile-time constants for the selection engine and its stores.
//! These are immutable at runtime.

/// Number of recommendations a ranking returns.
///
/// Everything past the first `TOP_N` scored components is dropped after the
/// stable sort, but still counted in `total_matches`.
pub const TOP_N: usize = 3;

/// Magic bytes for the partsel snapshot file header.
///
/// - File Header = Magic Bytes ("PSEL") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"PSEL";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length in bytes of any free-text catalog field.
pub const MAX_FIELD_LENGTH: usize = 512;

/// Maximum entries in a component's specification, pros or cons lists.
pub const MAX_LIST_ENTRIES: usize = 64;

/// Maximum number of fields in one requirement set.
pub const MAX_REQUIREMENT_FIELDS: usize = 64;

/// Maximum number of lines in a cart or bill of materials.
pub const MAX_CART_ITEMS: usize = 500;

/// Maximum number of history records returned by one query.
pub const MAX_HISTORY_LIMIT: usize = 1000;

/// Maximum snapshot size accepted before decoding (64 MiB).
pub const MAX_SNAPSHOT_SIZE: usize = 64 * 1024 * 1024;
