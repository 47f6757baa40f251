/// Quiet zone border
use super::grid::ModuleGrid;
use crate::error::{GridError, Result};
use crate::models::{Category, Module};

impl ModuleGrid {
    /// Surround the grid with a light border `width` modules wide.
    ///
    /// `width` is clamped to half the current size. Only valid once data has
    /// been mapped (the bottom-right module must be claimed).
    pub fn add_quiet_zone(&mut self, width: usize) -> Result<&mut Self> {
        let last = self.size - 1;
        if self.is_none(last, last) {
            return Err(GridError::QuietZoneTooEarly);
        }

        let width = if width > self.size / 2 {
            log::warn!("quiet zone width {} clamped to {}", width, self.size / 2);
            self.size / 2
        } else {
            width
        };
        if width == 0 {
            return Ok(self);
        }

        let new_size = self.size + 2 * width;
        let border = Module::new(false, Category::QUIET_ZONE);
        let mut modules = vec![border; new_size * new_size];
        for (y, row) in self.modules.chunks(self.size).enumerate() {
            let start = (y + width) * new_size + width;
            modules[start..start + self.size].copy_from_slice(row);
        }

        log::debug!(
            "added quiet zone of {} modules: {} -> {}",
            width,
            self.size,
            new_size
        );
        self.modules = modules;
        self.size = new_size;
        Ok(self)
    }
}
