//! Data masking

use crate::encoder::canvas::Canvas;
use crate::models::MaskPattern;

/// Chooses the mask pattern for a fully placed, unmasked canvas.
///
/// Only [`FixedMask`] ships. A penalty-scoring strategy can plug in here
/// once more patterns exist.
pub trait MaskStrategy {
    fn select(&self, canvas: &Canvas) -> MaskPattern;
}

/// Always returns the same pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedMask(pub MaskPattern);

impl MaskStrategy for FixedMask {
    fn select(&self, _canvas: &Canvas) -> MaskPattern {
        self.0
    }
}

/// XOR `pattern` into every data module
pub fn apply_mask(canvas: &mut Canvas, pattern: MaskPattern) {
    let size = canvas.size();
    for row in 0..size {
        for col in 0..size {
            if !canvas.is_function(row, col) && pattern.is_masked(row, col) {
                canvas.toggle(row, col);
            }
        }
    }
}
