use bitflags::bitflags;

bitflags! {
    /// Semantic role of a module. Exactly one flag is set on a placed module;
    /// [`Category::ANY`] is the union used to test "any structural pattern".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u16 {
        /// Payload bit
        const DATA = 1 << 0;
        /// Finder pattern rings
        const FINDER = 1 << 1;
        /// Light separator around a finder pattern
        const SEPARATOR = 1 << 2;
        /// Alignment pattern
        const ALIGNMENT = 1 << 3;
        /// Timing pattern on row 6 / column 6
        const TIMING = 1 << 4;
        /// Format information
        const FORMAT = 1 << 5;
        /// Version information (version 7+)
        const VERSION = 1 << 6;
        /// Quiet zone border
        const QUIET_ZONE = 1 << 7;
        /// Cleared space for a logo overlay
        const LOGO = 1 << 8;
        /// 3x3 center of a finder pattern
        const FINDER_DOT = 1 << 9;
        /// The single always-dark module next to the bottom-left finder
        const DARK_MODULE = 1 << 10;
        /// Every category bit
        const ANY = 0x07FF;
    }
}

impl Category {
    /// No category, i.e. a module nothing has been written to yet.
    pub const NONE: Category = Category::empty();
}

/// One grid cell: a category word with a separate dark bit.
///
/// Color and category are independent, so flipping the color never changes
/// the category and category checks ignore the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Module(u16);

impl Module {
    /// Color bit, set for dark modules
    pub const DARK: u16 = 0x8000;

    /// Build a module word from a color and a category
    pub fn new(dark: bool, category: Category) -> Self {
        Self(category.bits() | if dark { Self::DARK } else { 0 })
    }

    /// Raw packed word
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Category facet
    pub fn category(self) -> Category {
        Category::from_bits_truncate(self.0)
    }

    /// Color facet
    pub fn is_dark(self) -> bool {
        self.0 & Self::DARK != 0
    }

    /// True while nothing has been written to the module
    pub fn is_none(self) -> bool {
        self.category().is_empty()
    }

    /// True iff every bit of `category` is present
    pub fn has_category(self, category: Category) -> bool {
        self.category().contains(category)
    }

    /// True iff at least one bit of `category` is present
    pub fn has_any_category(self, category: Category) -> bool {
        self.category().intersects(category)
    }

    /// Same category, opposite color
    pub fn flipped(self) -> Self {
        Self(self.0 ^ Self::DARK)
    }
}
