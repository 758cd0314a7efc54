//! Verification reader for integration tests.
//!
//! Reads a rendered bitmap back into a payload using nothing from the
//! encoder but `BitMatrix`. Module sampling, format/version BCH checks,
//! unmasking, zig-zag extraction, block de-interleaving, Reed-Solomon
//! syndrome checks (over its own bitwise GF(256) multiply) and byte-mode
//! parsing all live here.

#![allow(dead_code)]

use image::GrayImage;
use rust_qr_gen::BitMatrix;

// ISO/IEC 18004 level M rows, index: [version]
const ECC_CODEWORDS_PER_BLOCK_M: [usize; 41] = [
    0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
];
const NUM_BLOCKS_M: [usize; 41] = [
    0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
    25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
];

/// What the reader recovered from a symbol
#[derive(Debug)]
pub struct ReadResult {
    pub version: u8,
    pub ec_bits: u8,
    pub mask: u8,
    pub payload: Vec<u8>,
    pub text: String,
}

/// Why the reader rejected a symbol
#[derive(Debug, PartialEq, Eq)]
pub enum ReadError {
    QuietZone,
    Dimension(usize),
    FormatCopiesDiffer,
    FormatChecksum(u16),
    VersionChecksum(u32),
    VersionMismatch { from_size: u8, from_info: u8 },
    Syndrome { block: usize },
    Mode(u8),
    Truncated,
}

/// Sample module centers from a bitmap rendered at `module_px` with a
/// 4-module quiet zone. Quiet zone pixels must all be light.
pub fn sample_modules(img: &GrayImage, module_px: u32) -> Result<BitMatrix, ReadError> {
    let dim = img.width() / module_px;
    let size = (dim as usize).saturating_sub(8);
    if (size < 21) || (size - 17) % 4 != 0 || img.height() != img.width() {
        return Err(ReadError::Dimension(size));
    }
    let border = 4 * module_px;
    for (x, y, p) in img.enumerate_pixels() {
        let inside = x >= border
            && y >= border
            && x < img.width() - border
            && y < img.height() - border;
        if !inside && p.0[0] < 128 {
            return Err(ReadError::QuietZone);
        }
    }

    let mut matrix = BitMatrix::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let px = (x as u32 + 4) * module_px + module_px / 2;
            let py = (y as u32 + 4) * module_px + module_px / 2;
            matrix.set(x, y, img.get_pixel(px, py).0[0] < 128);
        }
    }
    Ok(matrix)
}

fn bch_check(codeword: u32, data_bits: u32, ecc_bits: u32, generator: u32) -> bool {
    let mut remainder = codeword;
    let total = data_bits + ecc_bits;
    for shift in (ecc_bits..total).rev() {
        if remainder & (1 << shift) != 0 {
            remainder ^= generator << (shift - ecc_bits);
        }
    }
    remainder == 0
}

/// Read both format copies, check they agree and carry a valid BCH(15,5) code.
/// Returns (ec_bits, mask).
pub fn read_format(matrix: &BitMatrix) -> Result<(u8, u8), ReadError> {
    let size = matrix.width();
    let mut first = 0u16;
    let mut second = 0u16;

    // Bits 14..0, most significant first
    let mut first_coords: Vec<(usize, usize)> = Vec::new();
    for col in 0..=8 {
        if col != 6 {
            first_coords.push((col, 8));
        }
    }
    for row in (0..8).rev() {
        if row != 6 {
            first_coords.push((8, row));
        }
    }
    for &(x, y) in &first_coords {
        first = (first << 1) | matrix.get(x, y) as u16;
    }

    let mut second_coords: Vec<(usize, usize)> = Vec::new();
    for row in ((size - 7)..size).rev() {
        second_coords.push((8, row));
    }
    for col in (size - 8)..size {
        second_coords.push((col, 8));
    }
    for &(x, y) in &second_coords {
        second = (second << 1) | matrix.get(x, y) as u16;
    }

    if first != second {
        return Err(ReadError::FormatCopiesDiffer);
    }
    let unmasked = first ^ 0x5412;
    if !bch_check(unmasked as u32, 5, 10, 0x537) {
        return Err(ReadError::FormatChecksum(first));
    }
    let data = (unmasked >> 10) as u8;
    Ok(((data >> 3) & 0x03, data & 0x07))
}

/// Version from the symbol size, cross-checked against the version blocks
/// for versions 7 and up.
pub fn read_version(matrix: &BitMatrix) -> Result<u8, ReadError> {
    let size = matrix.width();
    let from_size = ((size - 17) / 4) as u8;
    if from_size < 7 {
        return Ok(from_size);
    }

    // Top-right block: 6 rows x 3 columns, read bottom-right to top-left
    let mut top_right = 0u32;
    let mut bottom_left = 0u32;
    for i in (0..18).rev() {
        let a = size - 11 + i % 3;
        let b = i / 3;
        top_right = (top_right << 1) | matrix.get(a, b) as u32;
        bottom_left = (bottom_left << 1) | matrix.get(b, a) as u32;
    }
    for bits in [top_right, bottom_left] {
        if !bch_check(bits, 6, 12, 0x1F25) {
            return Err(ReadError::VersionChecksum(bits));
        }
        let from_info = (bits >> 12) as u8;
        if from_info != from_size {
            return Err(ReadError::VersionMismatch { from_size, from_info });
        }
    }
    Ok(from_size)
}

/// Alignment pattern centers from the spacing rule
fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version == 1 {
        return Vec::new();
    }
    let num_align = (version / 7) as usize + 2;
    let size = 17 + 4 * version as usize;
    let step = if version == 32 {
        26
    } else {
        (version as usize * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos -= step;
    }
    positions
}

/// Function module mask: true = function module (not data)
pub fn function_mask(version: u8) -> BitMatrix {
    let size = 17 + 4 * version as usize;
    let mut mask = BitMatrix::new(size, size);

    // Finder patterns + separators + format areas
    for (fx, fy) in [(0, 0), (size - 8, 0), (0, size - 8)] {
        for y in fy..fy + 8 {
            for x in fx..fx + 8 {
                mask.set(x, y, true);
            }
        }
    }
    for i in 0..9 {
        mask.set(8, i, true);
        mask.set(i, 8, true);
    }
    for i in 0..8 {
        mask.set(size - 1 - i, 8, true);
        mask.set(8, size - 1 - i, true);
    }

    // Timing patterns
    for i in 0..size {
        mask.set(6, i, true);
        mask.set(i, 6, true);
    }

    let align = alignment_pattern_positions(version);
    for &cx in &align {
        for &cy in &align {
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            for y in cy - 2..=cy + 2 {
                for x in cx - 2..=cx + 2 {
                    mask.set(x, y, true);
                }
            }
        }
    }

    if version >= 7 {
        for dy in 0..6 {
            for dx in 0..3 {
                mask.set(size - 11 + dx, dy, true);
                mask.set(dy, size - 11 + dx, true);
            }
        }
    }
    mask
}

/// Read data bits in zig-zag order, removing mask pattern 0
fn extract_bits(matrix: &BitMatrix, func: &BitMatrix) -> Vec<bool> {
    let dimension = matrix.width();
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = dimension as i32 - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        let rows: Vec<usize> = if upward {
            (0..dimension).rev().collect()
        } else {
            (0..dimension).collect()
        };
        for row in rows {
            for c in [col as usize, col as usize - 1] {
                if !func.get(c, row) {
                    let masked = (row + c) % 2 == 0;
                    bits.push(matrix.get(c, row) ^ masked);
                }
            }
        }
        upward = !upward;
        col -= 2;
    }
    bits
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

/// Shift-and-add product modulo x^8 + x^4 + x^3 + x^2 + 1
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

/// Syndromes c(alpha^i) for i in 0..num_ecc, codeword in descending order
fn syndromes_zero(codeword: &[u8], num_ecc: usize) -> bool {
    let mut x = 1u8;
    for _ in 0..num_ecc {
        if codeword.iter().fold(0u8, |acc, &c| gf_mul(acc, x) ^ c) != 0 {
            return false;
        }
        x = gf_mul(x, 2);
    }
    true
}

/// De-interleave into blocks, verify each, and return the data codewords
fn deinterleave_and_check(codewords: &[u8], version: u8) -> Result<Vec<u8>, ReadError> {
    let num_blocks = NUM_BLOCKS_M[version as usize];
    let ecc_len = ECC_CODEWORDS_PER_BLOCK_M[version as usize];
    let total = codewords.len();
    let num_short = num_blocks - total % num_blocks;
    let short_len = total / num_blocks;

    let mut blocks: Vec<Vec<u8>> = (0..num_blocks)
        .map(|i| Vec::with_capacity(short_len + usize::from(i >= num_short)))
        .collect();
    let mut iter = codewords.iter().copied();
    // Data columns; the last column only exists for long blocks
    for col in 0..=(short_len - ecc_len) {
        for (i, block) in blocks.iter_mut().enumerate() {
            if col < short_len - ecc_len || i >= num_short {
                block.push(iter.next().ok_or(ReadError::Truncated)?);
            }
        }
    }
    for _ in 0..ecc_len {
        for block in blocks.iter_mut() {
            block.push(iter.next().ok_or(ReadError::Truncated)?);
        }
    }

    let mut data = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if !syndromes_zero(block, ecc_len) {
            return Err(ReadError::Syndrome { block: i });
        }
        data.extend_from_slice(&block[..block.len() - ecc_len]);
    }
    Ok(data)
}

fn read_field(bits: &[bool], pos: &mut usize, width: usize) -> Result<usize, ReadError> {
    if *pos + width > bits.len() {
        return Err(ReadError::Truncated);
    }
    let value = bits[*pos..*pos + width]
        .iter()
        .fold(0usize, |acc, &b| (acc << 1) | b as usize);
    *pos += width;
    Ok(value)
}

/// Full read of a module matrix
pub fn read_matrix(matrix: &BitMatrix) -> Result<ReadResult, ReadError> {
    let (ec_bits, mask) = read_format(matrix)?;
    let version = read_version(matrix)?;
    let func = function_mask(version);
    let bits = extract_bits(matrix, &func);
    let codewords = bits_to_bytes(&bits);
    let data = deinterleave_and_check(&codewords, version)?;

    let data_bits: Vec<bool> = data
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();
    let mut pos = 0;
    let mode = read_field(&data_bits, &mut pos, 4)? as u8;
    if mode != 0b0100 {
        return Err(ReadError::Mode(mode));
    }
    let count_bits = if version < 10 { 8 } else { 16 };
    let count = read_field(&data_bits, &mut pos, count_bits)?;
    let mut payload = Vec::with_capacity(count);
    for _ in 0..count {
        payload.push(read_field(&data_bits, &mut pos, 8)? as u8);
    }
    let text = payload.iter().map(|&b| b as char).collect();

    Ok(ReadResult {
        version,
        ec_bits,
        mask,
        payload,
        text,
    })
}

/// Sample a bitmap and read it
pub fn read_image(img: &GrayImage, module_px: u32) -> Result<ReadResult, ReadError> {
    let matrix = sample_modules(img, module_px)?;
    read_matrix(&matrix)
}
