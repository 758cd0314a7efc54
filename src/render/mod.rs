//! Output surfaces for finished symbols
//!
//! - SVG document (the primary output consumed by UI code)
//! - Grayscale bitmap for raster export
//! - Text preview for terminals

/// Grayscale bitmap rendering
pub mod raster;
/// SVG document rendering
pub mod svg;
/// Terminal text preview
pub mod text;

/// Light border around the symbol, in modules
pub const QUIET_ZONE: usize = 4;
