//! Structural (function) pattern placement
//!
//! The steps run in a fixed order. Alignment and timing patterns skip cells
//! that an earlier step already claimed; everything else overwrites.

use super::grid::ModuleGrid;
use crate::models::{Category, MaskPattern};

impl ModuleGrid {
    /// Place every structural pattern, format info included for `mask`.
    ///
    /// With `test` set, the data-dependent single-bit patterns (dark module,
    /// version info, format info) are drawn light, giving a reference grid
    /// for mask evaluation.
    pub fn init(&mut self, mask: MaskPattern, test: bool) -> &mut Self {
        debug_assert_eq!(self.size, self.dimension(), "init runs before the quiet zone");
        log::debug!(
            "init structural patterns: version {}, mask {}, test={}",
            self.version.number(),
            mask.id(),
            test
        );
        self.set_dark_module(test)
            .set_finder_patterns()
            .set_separators()
            .set_alignment_patterns()
            .set_timing_pattern()
            .set_version_info(test)
            .set_format_info(mask, test)
    }

    /// The dark module at column 8, row `4 * version + 9`
    pub fn set_dark_module(&mut self, test: bool) -> &mut Self {
        let y = 4 * self.version.number() as usize + 9;
        self.set(8, y, !test, Category::DARK_MODULE)
    }

    /// 7x7 finder patterns in the top-left, top-right and bottom-left corners
    pub fn set_finder_patterns(&mut self) -> &mut Self {
        let far = self.size - 7;
        for (ox, oy) in [(0, 0), (far, 0), (0, far)] {
            for dy in 0..7 {
                for dx in 0..7 {
                    let (dark, category) = if dx == 0 || dx == 6 || dy == 0 || dy == 6 {
                        (true, Category::FINDER)
                    } else if dx == 1 || dx == 5 || dy == 1 || dy == 5 {
                        (false, Category::FINDER)
                    } else {
                        (true, Category::FINDER_DOT)
                    };
                    self.set(ox + dx, oy + dy, dark, category);
                }
            }
        }
        self
    }

    /// Light 8-module strips on the inward sides of each finder
    pub fn set_separators(&mut self) -> &mut Self {
        let far = self.size - 8;
        for i in 0..8 {
            // top-left
            self.set(7, i, false, Category::SEPARATOR);
            self.set(i, 7, false, Category::SEPARATOR);
            // top-right
            self.set(far, i, false, Category::SEPARATOR);
            self.set(far + i, 7, false, Category::SEPARATOR);
            // bottom-left
            self.set(7, far + i, false, Category::SEPARATOR);
            self.set(i, far, false, Category::SEPARATOR);
        }
        self
    }

    /// 5x5 alignment patterns on every free center of the coordinate grid
    pub fn set_alignment_patterns(&mut self) -> &mut Self {
        let coords = self.version.alignment_pattern_coordinates();
        let mut placed = 0usize;
        for &cy in &coords {
            for &cx in &coords {
                // centers under a finder or separator
                if !self.is_none(cx, cy) {
                    continue;
                }
                for y in cy - 2..=cy + 2 {
                    for x in cx - 2..=cx + 2 {
                        let (rx, ry) = (x.abs_diff(cx), y.abs_diff(cy));
                        let dark = (rx == 0 && ry == 0) || rx == 2 || ry == 2;
                        self.set(x, y, dark, Category::ALIGNMENT);
                    }
                }
                placed += 1;
            }
        }
        log::trace!("placed {} alignment patterns", placed);
        self
    }

    /// Alternating row 6 / column 6 lines between the finders
    pub fn set_timing_pattern(&mut self) -> &mut Self {
        for i in 8..self.size - 8 {
            if !self.is_none(i, 6) || !self.is_none(6, i) {
                continue;
            }
            let dark = i % 2 == 0;
            self.set(i, 6, dark, Category::TIMING);
            self.set(6, i, dark, Category::TIMING);
        }
        self
    }

    /// Two mirrored 3x6 version blocks, only for version 7 and up
    pub fn set_version_info(&mut self, test: bool) -> &mut Self {
        let Some(bits) = self.version.version_info_pattern() else {
            return self;
        };
        for i in 0..18 {
            let a = i / 3;
            let b = i % 3 + self.size - 11;
            let dark = !test && (bits >> i) & 1 == 1;
            // north-east, then south-west
            self.set(b, a, dark, Category::VERSION);
            self.set(a, b, dark, Category::VERSION);
        }
        self
    }

    /// Both copies of the 15-bit format info for `mask`.
    ///
    /// Outside test mode the mask is recorded, and [`apply_mask`](Self::apply_mask)
    /// only accepts that one afterwards.
    pub fn set_format_info(&mut self, mask: MaskPattern, test: bool) -> &mut Self {
        self.format_mask = (!test).then_some(mask);
        let bits = self.ecc_level.format_info_pattern(mask);
        let size = self.size;
        for i in 0..15 {
            let dark = !test && (bits >> i) & 1 == 1;

            // vertical strip along column 8, skipping the timing row
            let y = match i {
                0..=5 => i,
                6..=7 => i + 1,
                _ => size - 15 + i,
            };
            self.set(8, y, dark, Category::FORMAT);

            // horizontal strip along row 8, skipping the timing column
            let x = match i {
                0..=7 => size - 1 - i,
                8 => 7,
                _ => 14 - i,
            };
            self.set(x, 8, dark, Category::FORMAT);
        }
        // the module completing the lower strip is the dark module itself
        self.set(8, size - 8, !test, Category::DARK_MODULE)
    }
}
