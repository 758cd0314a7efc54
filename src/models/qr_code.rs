use super::BitMatrix;
use crate::error::{EncodeError, Result};

/// QR Code Model 2 version, limited to 1-32
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(32);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Version(number))
        } else {
            Err(EncodeError::InvalidVersion(number))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Width of the byte-mode character count field
    pub fn char_count_bits(&self) -> usize {
        if self.0 < 10 { 8 } else { 16 }
    }

    /// All supported versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Two-bit indicator used in the format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Mask pattern reference (0-7) carried in the format information
///
/// Only [`MaskPattern::Pattern0`] is ever applied to data modules; the other
/// references exist so format words for any level/mask pair can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MaskPattern {
    Pattern0 = 0,
    Pattern1 = 1,
    Pattern2 = 2,
    Pattern3 = 3,
    Pattern4 = 4,
    Pattern5 = 5,
    Pattern6 = 6,
    Pattern7 = 7,
}

impl MaskPattern {
    /// Three-bit mask reference used in the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

/// Finished QR symbol
#[derive(Debug, Clone)]
pub struct QrCode {
    /// Selected version
    pub version: Version,
    /// Error correction level (always M)
    pub error_correction: ECLevel,
    /// Mask pattern applied to data modules (always pattern 0)
    pub mask_pattern: MaskPattern,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
    /// Function modules (finder, separator, timing, alignment, format, version info)
    pub function_modules: BitMatrix,
    /// Data codewords in block order, before interleaving
    pub data_codewords: Vec<u8>,
    /// Error correction codewords in block order, before interleaving
    pub ec_codewords: Vec<u8>,
}

impl QrCode {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Whether the module at (x, y) is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }
}
