use crate::encoder::format::{FORMAT_INFO_M_MASK0, version_info};
use crate::encoder::tables::VersionTable;
use crate::models::{ModuleMatrix, Version};

/// Stamps every function module of a version onto a fresh grid.
///
/// Finder patterns with separators, timing patterns, the dark module,
/// alignment patterns, both format information copies and (version 7+)
/// both version information blocks. Each stamped module is reserved; every
/// other module is left unset for data placement.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Grid for `version` with all function modules reserved
    pub fn build(version: Version, table: &VersionTable) -> ModuleMatrix {
        let size = version.size();
        let mut matrix = ModuleMatrix::new(size);

        Self::draw_finder(&mut matrix, 3, 3);
        Self::draw_finder(&mut matrix, size - 4, 3);
        Self::draw_finder(&mut matrix, 3, size - 4);

        // Timing patterns (row 6 and column 6) between the separators
        for i in 8..size - 8 {
            matrix.set_function(i, 6, i % 2 == 0);
            matrix.set_function(6, i, i % 2 == 0);
        }

        // Dark module
        matrix.set_function(8, size - 8, true);

        let align = table.alignment_centers;
        let last = align.len().saturating_sub(1);
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                // Skip the three finder corners
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                Self::draw_alignment(&mut matrix, cx, cy);
            }
        }

        Self::draw_format_bits(&mut matrix, FORMAT_INFO_M_MASK0);

        if let Some(bits) = version_info(version) {
            Self::draw_version_bits(&mut matrix, bits);
        }

        tracing::trace!(
            version = version.number(),
            reserved = matrix.reserved().count_ones(),
            "function patterns stamped"
        );
        matrix
    }

    /// 7x7 finder centered on (cx, cy) plus its one-module light separator
    fn draw_finder(matrix: &mut ModuleMatrix, cx: usize, cy: usize) {
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let (Some(x), Some(y)) = (cx.checked_add_signed(dx), cy.checked_add_signed(dy))
                else {
                    continue;
                };
                if x >= matrix.size() || y >= matrix.size() {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                matrix.set_function(x, y, dist != 2 && dist != 4);
            }
        }
    }

    /// 5x5 alignment pattern centered on (cx, cy)
    fn draw_alignment(matrix: &mut ModuleMatrix, cx: usize, cy: usize) {
        for dy in 0..5 {
            for dx in 0..5 {
                let dist = (dx as isize - 2).abs().max((dy as isize - 2).abs());
                matrix.set_function(cx - 2 + dx, cy - 2 + dy, dist != 1);
            }
        }
    }

    /// Both redundant copies of the 15-bit format word, bit 0 first
    fn draw_format_bits(matrix: &mut ModuleMatrix, bits: u16) {
        let size = matrix.size();
        let bit = |i: usize| (bits >> i) & 1 == 1;

        // Around the top-left finder
        for i in 0..=5 {
            matrix.set_function(8, i, bit(i));
        }
        matrix.set_function(8, 7, bit(6));
        matrix.set_function(8, 8, bit(7));
        matrix.set_function(7, 8, bit(8));
        for i in 9..15 {
            matrix.set_function(14 - i, 8, bit(i));
        }

        // Split between the top-right and bottom-left finders
        for i in 0..8 {
            matrix.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            matrix.set_function(8, size - 15 + i, bit(i));
        }
    }

    /// 6x3 block left of the top-right finder and its 3x6 transpose above the
    /// bottom-left finder
    fn draw_version_bits(matrix: &mut ModuleMatrix, bits: u32) {
        let size = matrix.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            matrix.set_function(a, b, dark);
            matrix.set_function(b, a, dark);
        }
    }
}
