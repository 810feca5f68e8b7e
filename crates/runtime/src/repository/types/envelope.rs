//! Versioned on-disk envelope around a value table.
//!
//! # File Format
//!
//! ```text
//! [magic "SKQT"][u16 version][bincode QTable]
//! ```
//!
//! The header is decoded on its own first, so a file written by an
//! incompatible version is reported as such instead of as garbage.

use serde::{Deserialize, Serialize};

use crate::learning::QTable;
use crate::repository::{RepositoryError, Result};

const MAGIC: [u8; 4] = *b"SKQT";

/// Current table format version.
pub const FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Header {
    magic: [u8; 4],
    version: u16,
}

/// Header plus table, serialized as one bincode record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableEnvelope {
    header: Header,
    table: QTable,
}

impl TableEnvelope {
    /// Encodes `table` without cloning it; the byte layout matches
    /// [`TableEnvelope`] since bincode writes structs as tuples.
    fn encode(table: &QTable) -> Result<Vec<u8>> {
        let header = Header {
            magic: MAGIC,
            version: FORMAT_VERSION,
        };
        bincode::serialize(&(header, table))
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let header: Header = bincode::deserialize(bytes)
            .map_err(|e| RepositoryError::CorruptedData(format!("unreadable header: {}", e)))?;

        if header.magic != MAGIC {
            return Err(RepositoryError::CorruptedData(
                "not a value table file".to_string(),
            ));
        }
        if header.version != FORMAT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: header.version,
                expected: FORMAT_VERSION,
            });
        }

        bincode::deserialize(bytes).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }
}

/// Serializes `table` inside a versioned envelope.
pub fn encode(table: &QTable) -> Result<Vec<u8>> {
    TableEnvelope::encode(table)
}

/// Decodes an envelope produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<QTable> {
    TableEnvelope::decode(bytes).map(|envelope| envelope.table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_foreign_bytes() {
        let err = decode(b"definitely not a table").unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }

    #[test]
    fn rejects_newer_versions() {
        let header = Header {
            magic: MAGIC,
            version: FORMAT_VERSION + 1,
        };
        let bytes = bincode::serialize(&(header, QTable::new())).unwrap();

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::UnsupportedVersion { found, .. } if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn truncated_body_is_an_error() {
        let bytes = encode(&QTable::new()).unwrap();
        let mut truncated = bytes.clone();
        truncated.truncate(bytes.len() - 1);

        assert!(decode(&truncated).is_err());
    }
}
