//! Error types for grid construction
//!
//! Every variant is a caller-input or call-order violation. None of them are
//! transient, so there is nothing to retry at this layer.

use thiserror::Error;

/// Errors surfaced by [`ModuleGrid`](crate::ModuleGrid) operations and the
/// metadata constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The quiet zone was requested before data placement filled the
    /// bottom-right module.
    #[error("quiet zone can only be added after data has been mapped")]
    QuietZoneTooEarly,

    /// Logo space needs the highest error correction level.
    #[error("logo space requires error correction level H")]
    LogoRequiresHighestEcc,

    /// The logo rectangle is larger than the recoverable share of the symbol.
    #[error("logo space of {area} modules exceeds the maximum of {max} modules")]
    LogoExceedsCapacity {
        /// Requested area after odd-size adjustment
        area: usize,
        /// Largest accepted area for this version
        max: usize,
    },

    /// A mask has already been applied to this grid.
    #[error("mask pattern {0} has already been applied")]
    MaskAlreadyApplied(u8),

    /// The mask differs from the one written into the format info.
    #[error("mask pattern {requested} does not match format info for mask {format}")]
    MaskMismatch {
        /// Mask id announced by the format info
        format: u8,
        /// Mask id passed to `apply_mask`
        requested: u8,
    },

    /// Version number outside 1..=40.
    #[error("invalid version number: {0}")]
    InvalidVersion(u8),

    /// Mask id outside 0..=7.
    #[error("invalid mask pattern id: {0}")]
    InvalidMask(u8),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::LogoExceedsCapacity { area: 121, max: 88 };
        assert_eq!(
            err.to_string(),
            "logo space of 121 modules exceeds the maximum of 88 modules"
        );
        assert_eq!(
            GridError::InvalidVersion(41).to_string(),
            "invalid version number: 41"
        );
    }
}
