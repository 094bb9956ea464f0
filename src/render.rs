//! Rasterising and printing symbols
//!
//! Module size, colours and the quiet zone are chosen here; the symbol itself
//! only carries the module grid.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::RenderError;
use crate::models::Symbol;

/// Raster output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module side
    pub module_px: u32,
    /// Colour of dark modules
    pub dark: Rgb<u8>,
    /// Colour of light modules and the quiet zone
    pub light: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_px: 8,
            dark: Rgb([0, 0, 0]),
            light: Rgb([255, 255, 255]),
        }
    }
}

/// Largest image side, in pixels, that the renderer will allocate
pub const MAX_IMAGE_SIDE: u32 = 32_768;

/// Modules per side including the quiet zone on both edges
fn total_modules(symbol: &Symbol) -> u32 {
    let modules = symbol.module_count() + 2 * symbol.quiet_zone();
    u32::try_from(modules).unwrap_or(u32::MAX)
}

/// Image side for `module_px` pixels per module, bounded by [`MAX_IMAGE_SIDE`]
fn image_side(symbol: &Symbol, module_px: u32) -> Result<u32, RenderError> {
    let modules = total_modules(symbol);
    modules
        .checked_mul(module_px)
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or(RenderError::ImageTooLarge { modules, module_px })
}

/// Draw the symbol with its quiet zone, `module_px` pixels per module
pub fn to_image(symbol: &Symbol, options: &RenderOptions) -> Result<RgbImage, RenderError> {
    if options.module_px == 0 {
        return Err(RenderError::ZeroModuleSize);
    }

    let scale = options.module_px;
    let side = image_side(symbol, scale)?;
    let quiet = symbol.quiet_zone() as u32;
    let count = symbol.module_count() as u32;

    Ok(RgbImage::from_fn(side, side, |x, y| {
        let col = x / scale;
        let row = y / scale;
        let span = quiet..quiet + count;
        let inside = span.contains(&col) && span.contains(&row);
        if inside && symbol.is_dark((row - quiet) as usize, (col - quiet) as usize) {
            options.dark
        } else {
            options.light
        }
    }))
}

/// Draw the symbol as large as fits in `target_px`.
///
/// The module size is `target_px / total_modules`, so the image may come out
/// slightly smaller than requested.
pub fn to_image_fitted(
    symbol: &Symbol,
    target_px: u32,
    options: &RenderOptions,
) -> Result<RgbImage, RenderError> {
    let modules = total_modules(symbol);
    let module_px = target_px / modules;
    if module_px == 0 {
        return Err(RenderError::TargetTooSmall {
            target: target_px,
            modules,
        });
    }
    to_image(symbol, &RenderOptions { module_px, ..*options })
}

/// Render and write an image; the format follows the file extension
pub fn save_image<P: AsRef<Path>>(
    symbol: &Symbol,
    path: P,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    to_image(symbol, options)?.save(path)?;
    Ok(())
}

/// Two characters per module, dark modules as full blocks
pub fn to_terminal_string(symbol: &Symbol) -> String {
    let quiet = symbol.quiet_zone();
    let count = symbol.module_count();
    let width = count + 2 * quiet;
    let blank_row = "  ".repeat(width);

    let mut out = String::with_capacity((width * 2 + 1) * width * 3);
    for _ in 0..quiet {
        out.push_str(&blank_row);
        out.push('\n');
    }
    for row in 0..count {
        out.push_str(&"  ".repeat(quiet));
        for col in 0..count {
            out.push_str(if symbol.is_dark(row, col) { "██" } else { "  " });
        }
        out.push_str(&"  ".repeat(quiet));
        out.push('\n');
    }
    for _ in 0..quiet {
        out.push_str(&blank_row);
        out.push('\n');
    }
    out
}
