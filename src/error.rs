use thiserror::Error;

/// Errors raised while building, parsing or serializing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SrecError {
    #[error("invalid record type: {0}")]
    InvalidRecordType(u8),

    #[error("malformed line: {0}")]
    MalformedLine(&'static str),

    #[error("malformed hex in {field} field")]
    MalformedHex { field: &'static str },

    #[error("checksum mismatch: calculated {calculated:02X} instead of {embedded:02X}")]
    ChecksumMismatch { calculated: u8, embedded: u8 },

    #[error("byte count mismatch: declared {declared:02X}, computed {computed:02X}")]
    ByteCountMismatch { declared: u8, computed: u8 },

    #[error("payload of {len} bytes exceeds the {max} byte maximum")]
    PayloadTooLong { len: usize, max: usize },

    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("document has no data records")]
    NoDataRecords,
}

/// Errors raised while loading a document from disk.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] SrecError),
}
