/// Payload placement following the zigzag pattern
use super::grid::ModuleGrid;
use crate::models::Category;

impl ModuleGrid {
    /// Write `data` MSB-first into every free module.
    ///
    /// Two-column strips are scanned right to left starting at the
    /// bottom-right corner, alternating up and down; the timing column is
    /// skipped. Free modules left over once `data` runs out become light data.
    pub fn map_data(&mut self, data: &[u8]) -> &mut Self {
        let capacity = self.free_modules();
        if data.len() * 8 > capacity {
            log::warn!(
                "payload of {} bits exceeds {} free modules, excess dropped",
                data.len() * 8,
                capacity
            );
        }

        let size = self.size;
        let mut bytes = data.iter();
        let mut current = bytes.next().copied();
        let mut bit = 7u32;
        let mut placed = 0usize;

        let mut upward = true;
        let mut y = size - 1;
        let mut col = size - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
            }

            loop {
                for x in [col, col - 1] {
                    if !self.is_none(x, y) {
                        continue;
                    }
                    let dark = current.is_some_and(|byte| (byte >> bit) & 1 == 1);
                    self.set(x, y, dark, Category::DATA);
                    placed += 1;

                    if bit == 0 {
                        current = bytes.next().copied();
                        bit = 7;
                    } else {
                        bit -= 1;
                    }
                }

                // reverse at the edge; the edge row is revisited by the next strip
                if (upward && y == 0) || (!upward && y == size - 1) {
                    upward = !upward;
                    break;
                }
                if upward {
                    y -= 1;
                } else {
                    y += 1;
                }
            }

            if col < 2 {
                break;
            }
            col -= 2;
        }

        log::debug!(
            "mapped {} payload bytes into {} data modules",
            data.len().min(capacity / 8),
            placed
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Category, ECLevel, MaskPattern, Version};
    use crate::ModuleGrid;

    fn initialized(version: u8) -> ModuleGrid {
        let mut grid = ModuleGrid::new(Version::new(version).unwrap(), ECLevel::M);
        grid.init(MaskPattern::Pattern0, false);
        grid
    }

    #[test]
    fn test_single_byte_scan_order() {
        let mut grid = initialized(1);
        grid.map_data(&[0b1011_0000]);

        // first eight free modules: (20,20) (19,20) (20,19) (19,19) ...
        let expected = [
            ((20, 20), true),
            ((19, 20), false),
            ((20, 19), true),
            ((19, 19), true),
            ((20, 18), false),
            ((19, 18), false),
            ((20, 17), false),
            ((19, 17), false),
        ];
        for ((x, y), dark) in expected {
            assert!(grid.has_category(x, y, Category::DATA));
            assert_eq!(grid.is_dark(x, y), dark, "module ({x}, {y})");
        }

        let dark_data = grid
            .modules()
            .iter()
            .filter(|m| m.category() == Category::DATA && m.is_dark())
            .count();
        assert_eq!(dark_data, 3);
        assert_eq!(grid.count_category(Category::DATA), 208);
        assert_eq!(grid.free_modules(), 0);
    }

    #[test]
    fn test_strip_turns_at_top() {
        // version 1: the first strip (columns 20/19) runs up to row 9,
        // then the second strip (18/17) comes back down from row 9
        let mut grid = initialized(1);
        let data = [0xFF; 3];
        grid.map_data(&data);
        // 12 rows x 2 columns in the first strip = 24 bits = 3 bytes
        assert!(grid.is_dark(19, 9));
        assert!(!grid.is_dark(18, 9));
    }

    #[test]
    fn test_structural_modules_untouched() {
        let mut reference = initialized(7);
        let mut grid = reference.clone();
        grid.map_data(&[0xFF; 256]);
        reference.map_data(&[]);

        for (a, b) in grid.modules().iter().zip(reference.modules()) {
            assert_eq!(a.category(), b.category());
            if a.category() != Category::DATA {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_all_modules_claimed_for_every_version() {
        for version in Version::all() {
            let mut grid = ModuleGrid::new(version, ECLevel::L);
            grid.init(MaskPattern::Pattern3, false).map_data(&[]);
            assert_eq!(grid.free_modules(), 0, "version {}", version.number());
        }
    }
}
