/// SVG rendering of a finished symbol
use super::QUIET_ZONE;
use crate::error::{EncodeError, Result};
use crate::models::QrCode;

/// Render `qr` as an SVG document with `module_px` pixels per module.
///
/// The document is `(size + 8) * module_px` pixels square: a white background
/// rectangle followed by one black square per dark module, offset by the
/// 4-module quiet zone.
pub fn render_svg(qr: &QrCode, module_px: u32) -> Result<String> {
    if module_px == 0 {
        return Err(EncodeError::InvalidModuleSize(module_px));
    }
    let px = module_px as usize;
    let dim = (qr.size() + 2 * QUIET_ZONE) * px;

    let dark = qr.modules.count_ones();
    let mut svg = String::with_capacity(256 + dark * 64);
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{dim}" height="{dim}" viewBox="0 0 {dim} {dim}" shape-rendering="crispEdges">"##
    ));
    svg.push_str(&format!(
        r##"<rect x="0" y="0" width="{dim}" height="{dim}" fill="#ffffff"/>"##
    ));
    for (x, y) in qr.modules.iter_ones() {
        svg.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{px}" height="{px}" fill="#000000"/>"##,
            (x + QUIET_ZONE) * px,
            (y + QUIET_ZONE) * px
        ));
    }
    svg.push_str("</svg>");
    Ok(svg)
}
