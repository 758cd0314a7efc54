/// Byte-mode bitstream construction
use crate::encoder::tables::VersionTable;
use crate::error::{EncodeError, Result};
use crate::models::Version;

/// Mode indicator for 8-bit byte mode
const MODE_BYTE: u32 = 0b0100;

/// Filler codewords appended alternately after the terminator
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Append-only bit buffer, most significant bit first
#[derive(Debug, Default, Clone)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Create an empty buffer with room for `capacity_bits` bits
    pub fn with_capacity(capacity_bits: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity_bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before any bit is written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write the low `num_bits` bits of `value`, high bit first
    pub fn write_bits(&mut self, value: u32, num_bits: usize) {
        debug_assert!(num_bits <= 32);
        debug_assert!(num_bits == 32 || value >> num_bits == 0);
        for i in (0..num_bits).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.buffer.push(0);
        }
        if bit {
            let last = self.buffer.len() - 1;
            self.buffer[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Zero bits until the length is a multiple of 8
    pub fn pad_to_byte(&mut self) {
        let pad = (8 - self.len % 8) % 8;
        self.write_bits(0, pad);
    }

    /// Packed bytes; a trailing partial byte is zero-filled
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Map each character to its single byte value.
///
/// Code points above 255 are rejected rather than truncated.
pub fn latin1_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            u8::try_from(ch).map_err(|_| EncodeError::UnsupportedCharacter { ch, index })
        })
        .collect()
}

/// Build exactly `data_codewords` codewords for `payload` at `version`.
///
/// Layout: mode indicator, character count, payload bytes, up to four terminator
/// zeros, zero bits to the next byte boundary, then alternating pad codewords.
pub fn encode_data_codewords(
    payload: &[u8],
    version: Version,
    table: &VersionTable,
) -> Result<Vec<u8>> {
    let data_codewords = table.data_codewords();
    if payload.len() > table.max_payload_len() {
        return Err(EncodeError::CapacityExceeded {
            len: payload.len(),
            max: table.max_payload_len(),
        });
    }

    let capacity_bits = data_codewords * 8;
    let mut bits = BitBuffer::with_capacity(capacity_bits);
    bits.write_bits(MODE_BYTE, 4);
    bits.write_bits(payload.len() as u32, version.char_count_bits());
    for &byte in payload {
        bits.write_bits(byte as u32, 8);
    }

    let terminator = (capacity_bits - bits.len()).min(4);
    bits.write_bits(0, terminator);
    bits.pad_to_byte();

    let mut codewords = bits.into_bytes();
    for &pad in PAD_BYTES.iter().cycle() {
        if codewords.len() >= data_codewords {
            break;
        }
        codewords.push(pad);
    }

    if codewords.len() != data_codewords {
        return Err(EncodeError::CodewordCount {
            expected: data_codewords,
            actual: codewords.len(),
        });
    }
    Ok(codewords)
}
