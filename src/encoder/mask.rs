/// Mask application over data modules
use super::grid::ModuleGrid;
use crate::error::{GridError, Result};
use crate::models::{Category, MaskPattern};

impl ModuleGrid {
    /// XOR `mask` onto the data modules. Structural modules keep their color.
    ///
    /// A grid takes exactly one mask; a second call fails with
    /// [`GridError::MaskAlreadyApplied`] instead of undoing the first. Once
    /// format info has been written, `mask` must be the mask it announces.
    pub fn apply_mask(&mut self, mask: MaskPattern) -> Result<&mut Self> {
        if let Some(applied) = self.mask_pattern {
            return Err(GridError::MaskAlreadyApplied(applied.id()));
        }
        if let Some(format) = self.format_mask.filter(|&format| format != mask) {
            return Err(GridError::MaskMismatch {
                format: format.id(),
                requested: mask.id(),
            });
        }
        let flipped = self.toggle_mask(mask);
        self.mask_pattern = Some(mask);
        log::debug!("applied mask {}: {} data modules inverted", mask.id(), flipped);
        Ok(self)
    }

    /// Invert every data module where `mask` is set, without the
    /// once-only bookkeeping. Returns the number of modules flipped.
    pub(crate) fn toggle_mask(&mut self, mask: MaskPattern) -> usize {
        let size = self.size;
        let mut flipped = 0;
        for (i, module) in self.modules.iter_mut().enumerate() {
            if module.category() == Category::DATA && mask.is_masked(i % size, i / size) {
                *module = module.flipped();
                flipped += 1;
            }
        }
        flipped
    }
}
