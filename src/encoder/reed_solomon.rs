/// Reed-Solomon error correction encoding for QR codes
use crate::encoder::gf256::Gf256;
use crate::encoder::tables::VersionTable;
use crate::error::{EncodeError, Result};

/// Systematic Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    /// Generator coefficients, descending powers, leading 1 included
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` EC codewords per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            generator: Gf256::generator_polynomial(num_ecc_codewords),
        }
    }

    /// Degree of the generator polynomial
    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    /// Remainder of data(x) * x^n divided by the generator, n EC codewords long
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.num_ecc_codewords();
        let mut remainder = vec![0u8; degree];
        if degree == 0 {
            return remainder;
        }
        for &d in data {
            let factor = d ^ remainder[0];
            // Shift the register one coefficient toward the high end
            remainder.rotate_left(1);
            remainder[degree - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.generator[1..]) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

/// Codeword stream for one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codewords {
    /// Data codewords in block order
    pub data: Vec<u8>,
    /// EC codewords in block order
    pub ec: Vec<u8>,
    /// Final interleaved sequence fed to module placement
    pub interleaved: Vec<u8>,
}

/// Split data codewords into blocks, compute each block's EC codewords and
/// interleave the result.
///
/// Short blocks come first; long blocks carry one extra data codeword. With a
/// single block the interleaved stream is simply data followed by EC codewords.
pub fn add_error_correction(data: &[u8], table: &VersionTable) -> Result<Codewords> {
    let expected = table.data_codewords();
    if data.len() != expected {
        return Err(EncodeError::CodewordCount {
            expected,
            actual: data.len(),
        });
    }

    let num_blocks = table.num_blocks;
    let ecc_len = table.ec_codewords_per_block;
    let num_short_blocks = num_blocks - table.total_codewords % num_blocks;
    let short_data_len = table.total_codewords / num_blocks - ecc_len;

    let rs = ReedSolomonEncoder::new(ecc_len);
    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(num_blocks);
    let mut ec_blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let len = short_data_len + usize::from(i >= num_short_blocks);
        let block = &data[offset..offset + len];
        offset += len;
        ec_blocks.push(rs.encode(block));
        data_blocks.push(block);
    }

    let mut interleaved = Vec::with_capacity(table.total_codewords);
    for i in 0..=short_data_len {
        for block in &data_blocks {
            if let Some(&b) = block.get(i) {
                interleaved.push(b);
            }
        }
    }
    for i in 0..ecc_len {
        for block in &ec_blocks {
            interleaved.push(block[i]);
        }
    }

    if interleaved.len() != table.total_codewords {
        return Err(EncodeError::CodewordCount {
            expected: table.total_codewords,
            actual: interleaved.len(),
        });
    }

    tracing::trace!(
        blocks = num_blocks,
        ecc_per_block = ecc_len,
        total = interleaved.len(),
        "error correction added"
    );

    Ok(Codewords {
        data: data.to_vec(),
        ec: ec_blocks.concat(),
        interleaved,
    })
}
