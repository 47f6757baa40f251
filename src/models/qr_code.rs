use crate::encoder::bch;
use crate::error::GridError;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(40);

    /// Create a version, `None` outside 1..=40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Look up the version whose symbol is `dimension` modules wide
    pub fn for_dimension(dimension: usize) -> Option<Self> {
        if dimension < 21 || (dimension - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((dimension - 17) / 4).ok().and_then(Self::new)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height), without quiet zone
    pub fn dimension(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Alignment pattern center coordinates, shared by both axes
    pub fn alignment_pattern_coordinates(&self) -> Vec<usize> {
        let version = self.0 as usize;
        if version == 1 {
            return Vec::new();
        }
        let count = version / 7 + 2;
        let step = if version == 32 {
            26
        } else {
            (version * 4 + count * 2 + 1) / (count * 2 - 2) * 2
        };

        let mut coords = vec![6usize; count];
        let last = self.dimension() - 7;
        for k in 0..count - 1 {
            coords[count - 1 - k] = last - k * step;
        }
        coords
    }

    /// 18-bit version information, present from version 7 on
    pub fn version_info_pattern(&self) -> Option<u32> {
        (self.0 >= 7).then(|| bch::version_info_bits(self.0))
    }

    /// Iterate all versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = GridError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(GridError::InvalidVersion(number))
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Level indicator as stored in format info (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`format_bits`](Self::format_bits)
    pub fn from_format_bits(bits: u8) -> Option<Self> {
        match bits {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// 15-bit masked BCH format information for this level and `mask`
    pub fn format_info_pattern(&self, mask: MaskPattern) -> u16 {
        bch::format_info_bits(self.format_bits() << 3 | mask.id())
    }

    /// Whether this is the strongest level (required for logo space)
    pub fn is_highest(&self) -> bool {
        matches!(self, ECLevel::H)
    }

    /// Approximate share of codewords that can be restored
    pub fn recovery_percent(&self) -> u8 {
        match self {
            ECLevel::L => 7,
            ECLevel::M => 15,
            ECLevel::Q => 25,
            ECLevel::H => 30,
        }
    }
}

/// Mask pattern (0-7). Formulas use x = column, y = row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (x + y) % 2
    Pattern0 = 0,
    /// y % 2
    Pattern1 = 1,
    /// x % 3
    Pattern2 = 2,
    /// (x + y) % 3
    Pattern3 = 3,
    /// (y/2 + x/3) % 2
    Pattern4 = 4,
    /// (x*y)%2 + (x*y)%3
    Pattern5 = 5,
    /// ((x*y)%2 + (x*y)%3) % 2
    Pattern6 = 6,
    /// ((x+y)%2 + (x*y)%3) % 2
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns ordered by id
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its id, `None` above 7
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask id 0..=7
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Raw formula value at (x, y); zero means the module gets inverted
    pub fn predicate(&self, x: usize, y: usize) -> usize {
        match self {
            MaskPattern::Pattern0 => (x + y) % 2,
            MaskPattern::Pattern1 => y % 2,
            MaskPattern::Pattern2 => x % 3,
            MaskPattern::Pattern3 => (x + y) % 3,
            MaskPattern::Pattern4 => (y / 2 + x / 3) % 2,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3,
            MaskPattern::Pattern6 => ((x * y) % 2 + (x * y) % 3) % 2,
            MaskPattern::Pattern7 => ((x + y) % 2 + (x * y) % 3) % 2,
        }
    }

    /// Check if the data module at (x, y) should be inverted
    pub fn is_masked(&self, x: usize, y: usize) -> bool {
        self.predicate(x, y) == 0
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = GridError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_bits(id).ok_or(GridError::InvalidMask(id))
    }
}
