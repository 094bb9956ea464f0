use thiserror::Error;

/// Errors raised while turning text into a symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload does not fit the largest supported version
    #[error("payload of {len} bytes exceeds the {max}-byte capacity of version 5")]
    DataTooLarge {
        /// UTF-8 length of the input
        len: usize,
        /// Largest byte-mode payload that fits
        max: usize,
    },
}

/// Errors raised while rasterising a symbol
#[derive(Debug, Error)]
pub enum RenderError {
    /// Module size of zero pixels was requested
    #[error("module size must be at least 1 pixel")]
    ZeroModuleSize,

    /// Target image is narrower than one pixel per module
    #[error("target of {target}px cannot hold {modules} modules")]
    TargetTooSmall {
        /// Requested side length in pixels
        target: u32,
        /// Modules per side including the quiet zone
        modules: u32,
    },

    /// Requested image side exceeds the renderer's limit
    #[error("{modules} modules at {module_px}px each exceed the maximum image size")]
    ImageTooLarge {
        /// Modules per side including the quiet zone
        modules: u32,
        /// Requested pixels per module
        module_px: u32,
    },

    /// Image encoding or file output failed
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
