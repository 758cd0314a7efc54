//! QR code encoding modules
//!
//! This module contains the pipeline that turns a text payload into a symbol:
//! - GF(256) field arithmetic and generator polynomials
//! - Per-version capacity and structure tables
//! - Byte-mode bitstream construction
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern stamping, data placement and masking

/// Bitstream construction (mode, count, payload, terminator, padding)
pub mod bitstream;
/// Environment-driven rendering defaults
pub mod config;
/// Format and version information codewords
pub mod format;
/// Function pattern stamping (finder/timing/alignment/format/version)
pub mod function_patterns;
/// GF(256) arithmetic
pub mod gf256;
/// Zig-zag data placement and masking
pub mod placement;
/// Main encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction encoding
pub mod reed_solomon;
/// Per-version tables (capacity, EC blocks, alignment centers)
pub mod tables;
