/// Bit and module grids
pub mod matrix;
/// Symbol, version and format parameter types
pub mod qr_code;

pub use matrix::{BitMatrix, Module, ModuleMatrix};
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
