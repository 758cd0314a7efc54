/// Text preview of a symbol for terminals
use super::QUIET_ZONE;
use crate::models::QrCode;

/// Two characters per module so the preview keeps a square aspect ratio.
/// Dark modules print as full blocks, light ones (and the quiet zone) as spaces.
pub fn render_text(qr: &QrCode) -> String {
    let size = qr.size();
    let span = size + 2 * QUIET_ZONE;
    let mut out = String::with_capacity(span * (span * 2 * 3 + 1));
    for row in 0..span {
        for col in 0..span {
            let dark = (QUIET_ZONE..QUIET_ZONE + size).contains(&row)
                && (QUIET_ZONE..QUIET_ZONE + size).contains(&col)
                && qr.is_dark(col - QUIET_ZONE, row - QUIET_ZONE);
            out.push_str(if dark { "\u{2588}\u{2588}" } else { "  " });
        }
        out.push('\n');
    }
    out
}
