pub mod matrix;
pub mod module;
pub mod qr_code;

pub use matrix::BitMatrix;
pub use module::{Category, Module};
pub use qr_code::{ECLevel, MaskPattern, Version};
