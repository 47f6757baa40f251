//! QR code module-grid construction
//!
//! This module contains the grid engine that lays out a symbol:
//! - Module grid storage and accessors
//! - Structural patterns (finder, separator, alignment, timing, format, version)
//! - Zigzag payload placement and masking
//! - Post-processing (quiet zone, logo space)

/// BCH encoding for format and version info
pub mod bch;
/// Structural pattern placement
pub mod function_patterns;
/// Module grid storage and accessors
pub mod grid;
/// Logo space carving
pub mod logo;
/// Mask application over data modules
pub mod mask;
/// Zigzag payload placement
pub mod placement;
/// Quiet zone border
pub mod quiet_zone;

pub use grid::ModuleGrid;
pub use logo::LogoSpace;
