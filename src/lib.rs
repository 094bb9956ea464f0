//! qrsymbol - small QR Code Model 2 generator
//!
//! Encodes short UTF-8 text in byte mode at error correction level L into
//! versions 2-5 (25x25 to 37x37 modules) with mask pattern 0. The output is a
//! boolean module grid; [`render`] turns it into images or terminal text.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR symbol encoding pipeline (bit stream, Reed-Solomon, placement, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Symbol, ModuleGrid, Version, etc.)
pub mod models;
/// Image and terminal output
pub mod render;

pub use encoder::config::EncoderConfig;
pub use encoder::generator::{GeneratorState, SymbolGenerator, encode, encode_with};
pub use encoder::mask::{FixedMask, MaskStrategy};
pub use error::{EncodeError, RenderError};
pub use models::{ECLevel, MaskPattern, ModuleGrid, Symbol, Version};

use rayon::prelude::*;

/// Encode many texts in parallel with the default configuration
///
/// Results are returned in input order. Each input is encoded independently.
pub fn encode_batch(texts: &[&str]) -> Vec<Result<Option<Symbol>, EncodeError>> {
    let config = EncoderConfig::default();
    let strategy = FixedMask::default();
    texts
        .par_iter()
        .map(|text| encode_with(text, &config, &strategy))
        .collect()
}
