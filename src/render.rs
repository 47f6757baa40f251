//! In-memory views of a finished grid
//!
//! Nothing here touches the filesystem; callers decide how to store or
//! display the result.

use image::{GrayImage, Luma};

use crate::config::default_module_scale;
use crate::encoder::ModuleGrid;

const DARK_PIXEL: Luma<u8> = Luma([0]);
const LIGHT_PIXEL: Luma<u8> = Luma([255]);

/// Rasterize `grid` with `scale` pixels per module (dark = 0, light = 255)
pub fn to_luma_image(grid: &ModuleGrid, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let side = grid.size() as u32 * scale;
    GrayImage::from_fn(side, side, |px, py| {
        let (x, y) = ((px / scale) as usize, (py / scale) as usize);
        if grid.is_dark(x, y) {
            DARK_PIXEL
        } else {
            LIGHT_PIXEL
        }
    })
}

/// Rasterize `grid` at the configured default scale (`QR_MODULE_SCALE`)
pub fn to_luma_image_default(grid: &ModuleGrid) -> GrayImage {
    to_luma_image(grid, default_module_scale())
}

/// Two characters per module, rows separated by newlines
pub fn to_text(grid: &ModuleGrid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|m| if m.is_dark() { "██" } else { "  " })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
