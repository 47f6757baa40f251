use crate::models::{BitMatrix, Category, ECLevel, MaskPattern, Module, Version};

/// Square grid of tagged modules for one (version, EC level) pair.
///
/// Row-major by (row y, column x). Placement methods mutate in place and
/// return `&mut Self`, so calls can be chained:
///
/// ```
/// use qr_grid::{ECLevel, MaskPattern, ModuleGrid, Version};
///
/// let version = Version::new(1).unwrap();
/// let mut grid = ModuleGrid::new(version, ECLevel::M);
/// grid.init(MaskPattern::Pattern0, false).map_data(&[0b1011_0000]);
/// grid.apply_mask(MaskPattern::Pattern0)?;
/// grid.add_quiet_zone(4)?;
/// assert_eq!(grid.size(), 29);
/// # Ok::<(), qr_grid::GridError>(())
/// ```
///
/// Coordinates outside `[0, size)` are a programming error and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    pub(crate) size: usize,
    pub(crate) modules: Vec<Module>,
    pub(crate) version: Version,
    pub(crate) ecc_level: ECLevel,
    pub(crate) mask_pattern: Option<MaskPattern>,
    pub(crate) format_mask: Option<MaskPattern>,
}

impl ModuleGrid {
    /// Create an empty grid: every module category none, light
    pub fn new(version: Version, ecc_level: ECLevel) -> Self {
        let size = version.dimension();
        log::debug!(
            "new module grid: version {} ({}x{}), level {:?}",
            version.number(),
            size,
            size,
            ecc_level
        );
        Self {
            size,
            modules: vec![Module::default(); size * size],
            version,
            ecc_level,
            mask_pattern: None,
            format_mask: None,
        }
    }

    /// Current side length, including any quiet zone
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of the symbol itself, without quiet zone
    pub fn dimension(&self) -> usize {
        self.version.dimension()
    }

    /// Width of the quiet zone added so far
    pub fn quiet_zone_width(&self) -> usize {
        (self.size - self.dimension()) / 2
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ecc_level(&self) -> ECLevel {
        self.ecc_level
    }

    /// Mask applied so far, if any
    pub fn mask_pattern(&self) -> Option<MaskPattern> {
        self.mask_pattern
    }

    /// Mask announced by the format info, `None` until written outside test mode
    pub fn format_mask(&self) -> Option<MaskPattern> {
        self.format_mask
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        y * self.size + x
    }

    /// Full module word at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.modules[self.index(x, y)]
    }

    /// Overwrite (x, y) with `category`, dark or light
    pub fn set(&mut self, x: usize, y: usize, dark: bool, category: Category) -> &mut Self {
        let i = self.index(x, y);
        self.modules[i] = Module::new(dark, category);
        self
    }

    /// Toggle the color of (x, y), keeping its category
    pub fn flip(&mut self, x: usize, y: usize) -> &mut Self {
        let i = self.index(x, y);
        self.modules[i] = self.modules[i].flipped();
        self
    }

    /// Category facet of (x, y)
    pub fn category(&self, x: usize, y: usize) -> Category {
        self.get(x, y).category()
    }

    /// True iff (x, y) carries every bit of `category`
    pub fn has_category(&self, x: usize, y: usize, category: Category) -> bool {
        self.get(x, y).has_category(category)
    }

    /// True iff (x, y) carries at least one bit of `category`
    pub fn has_any_category(&self, x: usize, y: usize, category: Category) -> bool {
        self.get(x, y).has_any_category(category)
    }

    /// True while nothing has been written to (x, y)
    pub fn is_none(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_none()
    }

    /// Color of (x, y)
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Row-major slice of all module words
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Module]> {
        self.modules.chunks(self.size)
    }

    /// Raw tagged words as nested rows
    pub fn matrix(&self) -> Vec<Vec<Module>> {
        self.rows().map(<[Module]>::to_vec).collect()
    }

    /// Pure light/dark view of the current grid
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut bits = BitMatrix::new(self.size, self.size);
        for (i, module) in self.modules.iter().enumerate() {
            if module.is_dark() {
                bits.set(i % self.size, i / self.size, true);
            }
        }
        bits
    }

    /// Number of modules whose category is exactly `category`
    pub fn count_category(&self, category: Category) -> usize {
        self.modules
            .iter()
            .filter(|m| m.category() == category)
            .count()
    }

    /// Modules still free for payload bits
    pub fn free_modules(&self) -> usize {
        self.count_category(Category::NONE)
    }
}
