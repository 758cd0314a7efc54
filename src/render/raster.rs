/// Grayscale bitmap rendering for raster export
use image::{GrayImage, Luma};

use super::QUIET_ZONE;
use crate::error::{EncodeError, Result};
use crate::models::QrCode;

const LIGHT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([0]);

/// Render `qr` as a grayscale bitmap with `module_px` pixels per module,
/// including the 4-module quiet zone.
pub fn render_image(qr: &QrCode, module_px: u32) -> Result<GrayImage> {
    if module_px == 0 {
        return Err(EncodeError::InvalidModuleSize(module_px));
    }
    let px = module_px as usize;
    let dim = (qr.size() + 2 * QUIET_ZONE)
        .checked_mul(px)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or(EncodeError::InvalidModuleSize(module_px))?;
    let mut img = GrayImage::from_pixel(dim, dim, LIGHT);

    // Every module offset is below `dim`, which fits in u32
    for (x, y) in qr.modules.iter_ones() {
        let left = ((x + QUIET_ZONE) * px) as u32;
        let top = ((y + QUIET_ZONE) * px) as u32;
        for dy in 0..module_px {
            for dx in 0..module_px {
                img.put_pixel(left + dx, top + dy, DARK);
            }
        }
    }
    Ok(img)
}

/// Bitmap at `module_px * supersample` pixels per module, for
/// high-resolution export of the same layout as the SVG output.
pub fn render_supersampled(qr: &QrCode, module_px: u32, supersample: u32) -> Result<GrayImage> {
    let scaled = module_px
        .checked_mul(supersample)
        .ok_or(EncodeError::InvalidModuleSize(module_px))?;
    render_image(qr, scaled)
}
