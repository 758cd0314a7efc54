/// Main QR code encoder - wires everything together
use crate::encoder::bitstream::{encode_data_codewords, latin1_bytes};
use crate::encoder::function_patterns::MatrixBuilder;
use crate::encoder::placement::place_codewords;
use crate::encoder::reed_solomon::add_error_correction;
use crate::encoder::tables::{max_payload_len, select_version, version_table};
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, MaskPattern, QrCode, Version};

/// Error correction level used for every symbol
pub const EC_LEVEL: ECLevel = ECLevel::M;
/// Mask reference written into the format information; see [`mask0`](crate::encoder::placement::mask0)
pub const MASK_PATTERN: MaskPattern = MaskPattern::Pattern0;

/// Main QR encoder: text in, finished symbol out
pub struct QrEncoder;

impl QrEncoder {
    /// Encode text at the smallest version that fits it
    pub fn encode(text: &str) -> Result<QrCode> {
        let payload = latin1_bytes(text)?;
        let version = select_version(payload.len()).ok_or(EncodeError::CapacityExceeded {
            len: payload.len(),
            max: max_payload_len(),
        })?;
        Self::encode_bytes_at(&payload, version)
    }

    /// Encode raw bytes at a fixed version
    pub fn encode_bytes_at(payload: &[u8], version: Version) -> Result<QrCode> {
        let table = version_table(version);
        tracing::debug!(
            version = version.number(),
            payload_len = payload.len(),
            capacity = table.max_payload_len(),
            "version selected"
        );

        let data = encode_data_codewords(payload, version, &table)?;
        let codewords = add_error_correction(&data, &table)?;
        tracing::debug!(
            data = codewords.data.len(),
            ec = codewords.ec.len(),
            total = table.total_codewords,
            "codewords computed"
        );

        let mut matrix = MatrixBuilder::build(version, &table);
        let consumed = place_codewords(&mut matrix, &codewords.interleaved);
        if consumed != codewords.interleaved.len() * 8 {
            return Err(EncodeError::CodewordCount {
                expected: codewords.interleaved.len(),
                actual: consumed / 8,
            });
        }

        let (modules, function_modules) = matrix
            .into_bits()
            .map_err(|unset| EncodeError::IncompleteMatrix { unset })?;

        Ok(QrCode {
            version,
            error_correction: EC_LEVEL,
            mask_pattern: MASK_PATTERN,
            modules,
            function_modules,
            data_codewords: codewords.data,
            ec_codewords: codewords.ec,
        })
    }
}
