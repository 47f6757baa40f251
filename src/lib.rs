//! qr_grid - QR code module-grid engine
//!
//! Lays out a QR code symbol per ISO/IEC 18004: structural patterns, zigzag
//! placement of an already error-corrected payload, and masking. Payload
//! encoding and mask scoring live outside this crate; this crate owns the
//! grid they read and write.
//!
//! ```
//! use qr_grid::{ECLevel, MaskPattern, SymbolBuilder, Version};
//!
//! let version = Version::new(1).unwrap();
//! let grid = SymbolBuilder::new(version, ECLevel::M)
//!     .mask(MaskPattern::Pattern3)
//!     .quiet_zone(4)
//!     .build(&[0x40, 0x11, 0x20, 0xEC])?;
//! assert_eq!(grid.size(), 29);
//! # Ok::<(), qr_grid::GridError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Grid construction (patterns, placement, masking, quiet zone, logo)
pub mod encoder;
/// Error types
pub mod error;
/// Core value types (Version, ECLevel, MaskPattern, Module, BitMatrix)
pub mod models;
/// In-memory raster and text views
pub mod render;

pub use encoder::{LogoSpace, ModuleGrid};
pub use error::{GridError, Result};
pub use models::{BitMatrix, Category, ECLevel, MaskPattern, Module, Version};

use rayon::prelude::*;

/// Runs the grid lifecycle in order: structural patterns, payload, mask,
/// logo space, quiet zone.
#[derive(Debug, Clone)]
pub struct SymbolBuilder {
    version: Version,
    ecc_level: ECLevel,
    mask: MaskPattern,
    quiet_zone: Option<usize>,
    logo_spaces: Vec<LogoSpace>,
}

impl SymbolBuilder {
    /// Builder with mask 0 and the configured default quiet zone
    pub fn new(version: Version, ecc_level: ECLevel) -> Self {
        Self {
            version,
            ecc_level,
            mask: MaskPattern::Pattern0,
            quiet_zone: None,
            logo_spaces: Vec::new(),
        }
    }

    /// Mask to apply (also encoded in the format info)
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = mask;
        self
    }

    /// Quiet zone width in modules; 0 disables the border
    pub fn quiet_zone(mut self, width: usize) -> Self {
        self.quiet_zone = Some(width);
        self
    }

    /// Add a rectangle to clear for a logo (level H only)
    pub fn logo_space(mut self, space: LogoSpace) -> Self {
        self.logo_spaces.push(space);
        self
    }

    /// Lay out `payload` (error-corrected codewords) into a finished grid
    pub fn build(&self, payload: &[u8]) -> Result<ModuleGrid> {
        let mut grid = ModuleGrid::new(self.version, self.ecc_level);
        grid.init(self.mask, false).map_data(payload);
        grid.apply_mask(self.mask)?;
        for space in &self.logo_spaces {
            grid.set_logo_space(*space)?;
        }
        let width = self
            .quiet_zone
            .unwrap_or_else(config::default_quiet_zone_width);
        grid.add_quiet_zone(width)?;
        Ok(grid)
    }
}

/// Blank reference grid: structural patterns only, data-dependent bits light
pub fn reference_grid(version: Version, ecc_level: ECLevel) -> ModuleGrid {
    let mut grid = ModuleGrid::new(version, ecc_level);
    grid.init(MaskPattern::Pattern0, true);
    grid
}

/// One masked grid per mask pattern, built in parallel and ordered by mask
/// id, for an external scorer to choose from. No quiet zone is added.
pub fn mask_candidates(
    version: Version,
    ecc_level: ECLevel,
    payload: &[u8],
) -> Result<Vec<ModuleGrid>> {
    MaskPattern::ALL
        .par_iter()
        .map(|&mask| {
            SymbolBuilder::new(version, ecc_level)
                .mask(mask)
                .quiet_zone(0)
                .build(payload)
        })
        .collect()
}
