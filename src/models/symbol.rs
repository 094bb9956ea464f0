use super::ModuleGrid;
use crate::encoder::config::MAX_QUIET_ZONE;
use crate::encoder::tables::{self, VersionInfo};

/// QR Code Model 2 version, restricted to the versions this crate generates (2-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(2);
    /// Largest supported version
    pub const MAX: Version = Version(5);

    /// Validate a version number
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number (2-5)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn module_count(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Row of the version table for this version
    pub fn info(&self) -> &'static VersionInfo {
        tables::version_info(*self)
    }
}

/// Error correction level
///
/// Only level L is generated; the version table carries L capacities only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    #[default]
    L,
}

impl ECLevel {
    /// Two-bit code carried in the format information
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
        }
    }
}

/// Data mask pattern
///
/// Pattern 0 is the only mask generated; the choice is made by a
/// [`MaskStrategy`](crate::encoder::mask::MaskStrategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MaskPattern {
    /// (row + col) % 2 == 0
    #[default]
    Pattern0,
}

impl MaskPattern {
    /// Three-bit code carried in the format information
    pub fn format_bits(&self) -> u8 {
        match self {
            MaskPattern::Pattern0 => 0b000,
        }
    }

    /// Check if the module at (row, col) is flipped by this mask
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (row + col) % 2 == 0,
        }
    }
}

/// Generated QR symbol
///
/// Every module is either a function module (finder, timing, alignment,
/// format, dark module) or a data module written once by placement and then
/// masked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    modules: ModuleGrid,
    function: ModuleGrid,
    quiet_zone: usize,
}

impl Symbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        modules: ModuleGrid,
        function: ModuleGrid,
        quiet_zone: usize,
    ) -> Self {
        debug_assert_eq!(modules.size(), version.module_count());
        debug_assert_eq!(function.size(), version.module_count());
        Self {
            version,
            ec_level,
            mask,
            modules,
            function,
            quiet_zone: quiet_zone.min(MAX_QUIET_ZONE),
        }
    }

    /// Version chosen for the payload
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level declared in the format information
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask applied to the data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask
    }

    /// Side length in modules, always odd and at least 21
    pub fn module_count(&self) -> usize {
        self.modules.size()
    }

    /// Light border the renderer should draw around the symbol, in modules
    pub fn quiet_zone(&self) -> usize {
        self.quiet_zone
    }

    /// Same symbol with a different quiet zone, clamped to [`MAX_QUIET_ZONE`]
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules.min(MAX_QUIET_ZONE);
        self
    }

    /// True if the module at (row, col) is dark
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// True if the module at (row, col) belongs to a function pattern
    pub fn is_function(&self, row: usize, col: usize) -> bool {
        self.function.get(row, col)
    }

    /// Final module grid
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    /// Final module grid as `[row][col]` booleans, `true` = dark
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.modules.to_rows()
    }
}
