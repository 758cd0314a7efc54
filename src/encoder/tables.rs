use crate::models::Version;

/// Per-version structure of a level-M symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTable {
    /// Total codewords (data + error correction)
    pub total_codewords: usize,
    /// Error correction codewords across all blocks
    pub ec_codewords: usize,
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// Error correction codewords in each block
    pub ec_codewords_per_block: usize,
    /// Alignment pattern center coordinates (row and column alike)
    pub alignment_centers: &'static [usize],
}

impl VersionTable {
    /// Data codewords, which is also the byte-mode data capacity in bytes
    pub fn data_codewords(&self) -> usize {
        self.total_codewords - self.ec_codewords
    }

    /// Longest payload accepted for this version: capacity minus three bytes
    /// held back for mode indicator, character count and terminator
    pub fn max_payload_len(&self) -> usize {
        self.data_codewords() - 3
    }
}

// ISO/IEC 18004 Model 2 tables, error correction level M only.
// Index: [version], entry 0 unused.
const TOTAL_CODEWORDS: [u16; 33] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465,
];

const ECC_CODEWORDS_PER_BLOCK: [u8; 33] = [
    0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28,
];

const NUM_ERROR_CORRECTION_BLOCKS: [u8; 33] = [
    0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
    25, 26, 28, 29, 31, 33,
];

const ALIGNMENT_PATTERN_CENTERS: [&[usize]; 33] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
];

/// Look up the structure of a version
pub fn version_table(version: Version) -> VersionTable {
    let v = version.number() as usize;
    let ec_codewords_per_block = ECC_CODEWORDS_PER_BLOCK[v] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[v] as usize;
    VersionTable {
        total_codewords: TOTAL_CODEWORDS[v] as usize,
        ec_codewords: ec_codewords_per_block * num_blocks,
        num_blocks,
        ec_codewords_per_block,
        alignment_centers: ALIGNMENT_PATTERN_CENTERS[v],
    }
}

/// Smallest version whose capacity holds `payload_len` bytes
pub fn select_version(payload_len: usize) -> Option<Version> {
    Version::all().find(|&v| version_table(v).max_payload_len() >= payload_len)
}

/// Longest payload any supported version accepts
pub fn max_payload_len() -> usize {
    version_table(Version::MAX).max_payload_len()
}
