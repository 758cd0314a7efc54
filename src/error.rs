//! Error types for QR symbol generation.

use thiserror::Error;

/// Every way an encode request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload does not fit the largest supported version.
    #[error("payload of {len} bytes exceeds the maximum of {max} bytes")]
    CapacityExceeded {
        /// Payload length in bytes
        len: usize,
        /// Largest accepted payload length
        max: usize,
    },

    /// Character outside the single-byte (Latin-1) range.
    #[error("character {ch:?} at index {index} is outside the Latin-1 range")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Character index inside the payload
        index: usize,
    },

    /// Version number outside 1..=32.
    #[error("unsupported symbol version {0}")]
    InvalidVersion(u8),

    /// Codeword stream length disagrees with the version table.
    #[error("codeword count mismatch: expected {expected}, got {actual}")]
    CodewordCount {
        /// Count required by the version table
        expected: usize,
        /// Count actually produced
        actual: usize,
    },

    /// Data placement left modules unassigned.
    #[error("{unset} modules left unset after data placement")]
    IncompleteMatrix {
        /// Number of unset modules
        unset: usize,
    },

    /// Pixel size of zero requested from a renderer.
    #[error("invalid module size {0}, must be at least 1 pixel")]
    InvalidModuleSize(u32),
}

/// Result type alias using EncodeError.
pub type Result<T> = std::result::Result<T, EncodeError>;
