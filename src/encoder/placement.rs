/// Data module placement in zig-zag order with masking
use crate::models::ModuleMatrix;

/// Every non-reserved (x, y) in placement order.
///
/// Two-column strips from the right edge, alternating upward and downward,
/// with the vertical timing column 6 skipped. Within a strip the right
/// column is visited before the left one.
pub fn placement_order(matrix: &ModuleMatrix) -> Vec<(usize, usize)> {
    let size = matrix.size();
    let mut order = Vec::with_capacity(size * size);
    let mut upward = true;
    let mut right = size as isize - 1;

    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for x in [right as usize, right as usize - 1] {
                if !matrix.is_reserved(x, y) {
                    order.push((x, y));
                }
            }
        }
        upward = !upward;
        right -= 2;
    }
    order
}

/// Mask pattern 0: data modules where row + column is even are flipped
pub fn mask0(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}

/// Write the codeword stream into every data module, masking each bit.
///
/// Bits are taken high bit first from the lowest-index codeword; modules left
/// after the stream runs out get bit 0 before masking. Returns the number of
/// codeword bits consumed.
pub fn place_codewords(matrix: &mut ModuleMatrix, codewords: &[u8]) -> usize {
    let total_bits = codewords.len() * 8;
    let mut consumed = 0;
    for (x, y) in placement_order(matrix) {
        let bit = if consumed < total_bits {
            let b = (codewords[consumed / 8] >> (7 - consumed % 8)) & 1 == 1;
            consumed += 1;
            b
        } else {
            false
        };
        matrix.place(x, y, bit ^ mask0(y, x));
    }
    tracing::trace!(consumed, total_bits, "codewords placed");
    consumed
}
