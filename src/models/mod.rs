/// Bit-packed module grid
pub mod matrix;
/// Versions, levels, masks and finished symbols
pub mod symbol;

pub use matrix::ModuleGrid;
pub use symbol::{ECLevel, MaskPattern, Symbol, Version};
