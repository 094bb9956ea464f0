//! QR symbol encoding pipeline
//!
//! Each stage of generation lives in its own module:
//! - Version selection and capacity tables
//! - Byte-mode bit stream construction
//! - Reed-Solomon error correction over GF(256)
//! - Function pattern stamping, zig-zag data placement and masking
//! - Format information

/// Byte-mode bit stream construction and padding
pub mod bitstream;
/// Module values plus function-module flags during construction
pub mod canvas;
/// Encoder settings and environment overrides
pub mod config;
/// Format information (EC level + mask) encoding and placement
pub mod format;
/// Finder, timing and alignment patterns
pub mod function_patterns;
/// Pipeline orchestration and the stateful generator
pub mod generator;
/// Mask strategies and mask application
pub mod mask;
/// Zig-zag data placement
pub mod placement;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Closed version table (versions 2-5, level L)
pub mod tables;
