/// Packed bit grid
pub mod matrix;
/// Grid under construction with its reserved layer
pub mod module_matrix;
/// Version, EC level, mask pattern and the finished symbol
pub mod qr_code;

pub use matrix::BitMatrix;
pub use module_matrix::ModuleMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, Version};
