//! # Snapshot Format
//!
//! Binary serialization of an in-memory [`Catalog`] for the file backend.
//! File I/O happens in the app layer; this module only maps bytes.
//!
//! Format: Header (5 bytes) + postcard-serialized `CatalogSnapshot`.
//! - 4 bytes: Magic ("PSEL")
//! - 1 byte: Version
//!
//! Size and header are validated before the payload is decoded.

use crate::catalog::{Catalog, CatalogSnapshot};
use crate::primitives::{FORMAT_VERSION, MAGIC_BYTES, MAX_SNAPSHOT_SIZE};
use crate::PartselError;

const HEADER_LEN: usize = 5;

/// The header that precedes every snapshot payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl SnapshotHeader {
    /// Header for the current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *MAGIC_BYTES,
            version: FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), PartselError> {
        if &self.magic != MAGIC_BYTES {
            return Err(PartselError::DeserializationError(
                "Invalid magic bytes".to_string(),
            ));
        }
        if self.version != FORMAT_VERSION {
            return Err(PartselError::DeserializationError(format!(
                "Unsupported version: {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PartselError> {
        if bytes.len() < HEADER_LEN {
            return Err(PartselError::DeserializationError(
                "Header too short".to_string(),
            ));
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        Ok(Self {
            magic,
            version: bytes[4],
        })
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a catalog to bytes (header + payload).
pub fn catalog_to_bytes(catalog: &Catalog) -> Result<Vec<u8>, PartselError> {
    let snapshot = CatalogSnapshot::from(catalog);
    let payload = postcard::to_stdvec(&snapshot)
        .map_err(|e| PartselError::SerializationError(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SnapshotHeader::new().to_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Deserialize a catalog from bytes.
pub fn catalog_from_bytes(bytes: &[u8]) -> Result<Catalog, PartselError> {
    if bytes.len() > MAX_SNAPSHOT_SIZE {
        return Err(PartselError::DeserializationError(format!(
            "Snapshot size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let header = SnapshotHeader::from_bytes(bytes)?;
    header.validate()?;

    let snapshot: CatalogSnapshot = postcard::from_bytes(&bytes[HEADER_LEN..]).map_err(|e| {
        PartselError::DeserializationError(format!("Failed to decode catalog snapshot: {e}"))
    })?;
    Ok(Catalog::from(snapshot))
}

// =============================================================================
// TESTS
// =============================================================================
