//! RustQR Gen - byte-mode QR code generator
//!
//! A pure Rust QR Code (Model 2) encoder: text in, module matrix and SVG out.
//! Symbols use byte mode, error correction level M and mask pattern 0, at the
//! smallest version (1-32) that fits the payload.
//!
//! # Example
//! ```
//! let svg = rust_qr_gen::encode_svg("EXC-001", Some(4)).expect("QR unavailable");
//! assert!(svg.starts_with("<svg"));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (bitstream, error correction, matrix layout)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, ModuleMatrix, Version, etc.)
pub mod models;
/// Output rendering (SVG, bitmap, text)
pub mod render;

pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};

use encoder::config::{default_module_px, default_raster_supersample};
use encoder::qr_encoder::QrEncoder;
use image::GrayImage;
use rayon::prelude::*;

/// Encode text into a finished QR symbol
///
/// # Errors
/// * [`EncodeError::UnsupportedCharacter`] for characters above U+00FF
/// * [`EncodeError::CapacityExceeded`] when no version 1-32 holds the payload
pub fn encode(text: &str) -> Result<QrCode> {
    QrEncoder::encode(text)
}

/// Encode text straight to an SVG document
///
/// # Arguments
/// * `text` - Payload, Latin-1 characters only
/// * `module_px` - Pixels per module, `None` for the configured default
///
/// # Returns
/// The SVG document, or `None` when the symbol cannot be produced. Callers
/// should treat `None` as "QR unavailable".
pub fn encode_svg(text: &str, module_px: Option<u32>) -> Option<String> {
    let px = module_px.unwrap_or_else(default_module_px);
    match encode(text).and_then(|qr| render::svg::render_svg(&qr, px)) {
        Ok(svg) => Some(svg),
        Err(err) => {
            tracing::warn!(error = %err, len = text.len(), "QR encoding failed");
            None
        }
    }
}

/// Encode many payloads in parallel
///
/// Output order matches input order; a failing entry yields `None` without
/// affecting the others.
pub fn encode_batch_svg<S>(texts: &[S], module_px: Option<u32>) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|t| encode_svg(t.as_ref(), module_px))
        .collect()
}

/// Rendering options for [`Encoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Pixels per module
    pub module_px: u32,
    /// Bitmap supersampling factor
    pub supersample: u32,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            module_px: default_module_px(),
            supersample: default_raster_supersample(),
        }
    }
}

/// Encoder with configured rendering options
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    /// Create an encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit options
    pub fn with_options(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode text into a symbol
    pub fn encode(&self, text: &str) -> Result<QrCode> {
        encode(text)
    }

    /// Encode text and render SVG at the configured module size
    pub fn to_svg(&self, text: &str) -> Result<String> {
        let qr = self.encode(text)?;
        render::svg::render_svg(&qr, self.options.module_px)
    }

    /// Encode text and render a supersampled grayscale bitmap
    pub fn to_image(&self, text: &str) -> Result<GrayImage> {
        let qr = self.encode(text)?;
        render::raster::render_supersampled(&qr, self.options.module_px, self.options.supersample)
    }
}
