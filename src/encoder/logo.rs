/// Logo space carving
use super::grid::ModuleGrid;
use crate::error::{GridError, Result};
use crate::models::Category;

/// Rectangle to clear for a logo overlay, in symbol coordinates (quiet zone
/// excluded). A missing start coordinate centers the rectangle on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSpace {
    /// Width in modules
    pub width: usize,
    /// Height in modules
    pub height: usize,
    /// Left column, centered when `None`
    pub start_x: Option<usize>,
    /// Top row, centered when `None`
    pub start_y: Option<usize>,
}

impl LogoSpace {
    /// Centered rectangle
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start_x: None,
            start_y: None,
        }
    }

    /// Rectangle with its top-left corner at (x, y)
    pub fn at(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start_x: Some(x),
            start_y: Some(y),
        }
    }
}

/// Share of the symbol area that can be cleared, as numerator / denominator
const MAX_LOGO_AREA: (usize, usize) = (1, 5);

/// Rows and columns at the top-left reserved for finder, format and timing
const RESERVED_EDGE: usize = 9;

impl ModuleGrid {
    /// Clear `space` to light logo modules.
    ///
    /// Needs level H. A centered axis is widened to an odd size so the
    /// rectangle sits on a whole module. Calls accumulate; nothing cleared
    /// earlier is restored.
    pub fn set_logo_space(&mut self, space: LogoSpace) -> Result<&mut Self> {
        if !self.ecc_level.is_highest() {
            return Err(GridError::LogoRequiresHighestEcc);
        }

        let LogoSpace {
            mut width,
            mut height,
            start_x,
            start_y,
        } = space;
        if start_x.is_none() && width % 2 == 0 {
            width += 1;
        }
        if start_y.is_none() && height % 2 == 0 {
            height += 1;
        }

        let dimension = self.dimension();
        let max = dimension * dimension * MAX_LOGO_AREA.0 / MAX_LOGO_AREA.1;
        // an overflowing product is over capacity as well
        let area = width.checked_mul(height).unwrap_or(usize::MAX);
        if area > max {
            return Err(GridError::LogoExceedsCapacity { area, max });
        }

        let qz = self.quiet_zone_width();
        let start_x = start_x
            .unwrap_or(dimension.saturating_sub(width) / 2)
            .saturating_add(qz);
        let start_y = start_y
            .unwrap_or(dimension.saturating_sub(height) / 2)
            .saturating_add(qz);

        // clip to the symbol, leaving the reserved top-left band alone
        let lower = qz + RESERVED_EDGE;
        let upper = self.size - qz;
        let xs = start_x.max(lower)..start_x.saturating_add(width).min(upper);
        let ys = start_y.max(lower)..start_y.saturating_add(height).min(upper);

        let mut cleared = 0usize;
        for y in ys {
            for x in xs.clone() {
                self.set(x, y, false, Category::LOGO);
                cleared += 1;
            }
        }
        log::debug!(
            "logo space {}x{} at ({}, {}): {} modules cleared",
            width,
            height,
            start_x - qz,
            start_y - qz,
            cleared
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::LogoSpace;
    use crate::error::GridError;
    use crate::models::{Category, ECLevel, MaskPattern, Version};
    use crate::ModuleGrid;

    fn finished(version: u8, level: ECLevel) -> ModuleGrid {
        let mut grid = ModuleGrid::new(Version::new(version).unwrap(), level);
        grid.init(MaskPattern::Pattern4, false).map_data(&[0xFF; 64]);
        grid.apply_mask(MaskPattern::Pattern4).unwrap();
        grid
    }

    #[test]
    fn test_even_centered_size_forced_odd() {
        let mut grid = finished(5, ECLevel::H);
        grid.set_logo_space(LogoSpace::centered(10, 10)).unwrap();
        assert_eq!(grid.count_category(Category::LOGO), 121);
        // 37 modules wide: 11 centered means columns 13..24
        assert!(grid.has_category(13, 13, Category::LOGO));
        assert!(grid.has_category(23, 23, Category::LOGO));
        assert!(!grid.has_category(12, 18, Category::LOGO));
        assert!(!grid.has_category(24, 18, Category::LOGO));
    }

    #[test]
    fn test_requires_level_h() {
        let mut grid = finished(5, ECLevel::M);
        assert_eq!(
            grid.set_logo_space(LogoSpace::centered(10, 10)).unwrap_err(),
            GridError::LogoRequiresHighestEcc
        );
        assert_eq!(grid.count_category(Category::LOGO), 0);
    }

    #[test]
    fn test_area_cap() {
        // 21 * 21 / 5 = 88
        let mut grid = finished(1, ECLevel::H);
        assert_eq!(
            grid.set_logo_space(LogoSpace::centered(10, 10)).unwrap_err(),
            GridError::LogoExceedsCapacity { area: 121, max: 88 }
        );
        assert!(grid.set_logo_space(LogoSpace::centered(9, 9)).is_ok());
        // columns/rows 6..15, clipped to 9..15 by the reserved band
        assert_eq!(grid.count_category(Category::LOGO), 36);
    }

    #[test]
    fn test_explicit_start_keeps_even_size() {
        let mut grid = finished(5, ECLevel::H);
        grid.set_logo_space(LogoSpace::at(20, 20, 4, 6)).unwrap();
        assert_eq!(grid.count_category(Category::LOGO), 24);
        assert!(grid.has_category(20, 20, Category::LOGO));
        assert!(grid.has_category(23, 25, Category::LOGO));
    }

    #[test]
    fn test_reserved_band_untouched() {
        let mut grid = finished(5, ECLevel::H);
        grid.set_logo_space(LogoSpace::at(0, 0, 12, 12)).unwrap();
        // only rows/columns 9..12 are cleared
        assert_eq!(grid.count_category(Category::LOGO), 9);
        assert!(grid.has_category(0, 0, Category::FINDER));
    }

    #[test]
    fn test_repeated_calls_clear_union() {
        let mut grid = finished(5, ECLevel::H);
        grid.set_logo_space(LogoSpace::at(10, 10, 5, 5)).unwrap();
        grid.set_logo_space(LogoSpace::at(12, 12, 5, 5)).unwrap();
        assert_eq!(grid.count_category(Category::LOGO), 25 + 25 - 9);
        for m in grid.modules().iter().filter(|m| m.has_category(Category::LOGO)) {
            assert!(!m.is_dark());
        }
    }

    #[test]
    fn test_huge_rectangle_rejected() {
        let mut grid = finished(5, ECLevel::H);
        let err = grid
            .set_logo_space(LogoSpace::centered(1 << 40, 1 << 40))
            .unwrap_err();
        assert_eq!(
            err,
            GridError::LogoExceedsCapacity {
                area: usize::MAX,
                max: 273
            }
        );
        assert_eq!(grid.count_category(Category::LOGO), 0);
    }

    #[test]
    fn test_start_past_symbol_clears_nothing() {
        let mut grid = finished(5, ECLevel::H);
        grid.add_quiet_zone(2).unwrap();
        let snapshot = grid.clone();
        grid.set_logo_space(LogoSpace::at(usize::MAX, 20, 2, 2)).unwrap();
        grid.set_logo_space(LogoSpace::at(20, usize::MAX - 1, 2, 2)).unwrap();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_offset_by_quiet_zone() {
        let mut grid = finished(5, ECLevel::H);
        grid.add_quiet_zone(4).unwrap();
        grid.set_logo_space(LogoSpace::centered(5, 5)).unwrap();
        assert_eq!(grid.count_category(Category::LOGO), 25);
        // symbol center (18, 18) shifted by the border
        assert!(grid.has_category(22, 22, Category::LOGO));
        assert!(grid.has_category(20, 20, Category::LOGO));
        assert!(!grid.has_category(19, 22, Category::LOGO));
    }
}
