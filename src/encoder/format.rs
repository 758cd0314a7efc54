/// Format and version information codewords
use crate::models::{ECLevel, MaskPattern, Version};

/// Format information for EC level M with mask pattern 0
pub const FORMAT_INFO_M_MASK0: u16 = 0x5412;

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR mask applied so the format word is never all zeros
const FORMAT_MASK: u16 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Remainder of `data << ecc_bits` modulo `generator`
fn bch_remainder(data: u32, ecc_bits: u32, generator: u32) -> u32 {
    let mut rem = data;
    for _ in 0..ecc_bits {
        rem = (rem << 1) ^ ((rem >> (ecc_bits - 1)) * generator);
    }
    rem & ((1 << ecc_bits) - 1)
}

/// 15-bit format information: 5 data bits, 10 BCH bits, masked
pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() << 3) | mask.bits()) as u32;
    let bits = (data << 10) | bch_remainder(data, 10, FORMAT_GENERATOR);
    bits as u16 ^ FORMAT_MASK
}

/// 18-bit version information for versions 7 and up
pub fn version_info(version: Version) -> Option<u32> {
    if version.number() < 7 {
        return None;
    }
    let data = version.number() as u32;
    Some((data << 12) | bch_remainder(data, 12, VERSION_GENERATOR))
}
