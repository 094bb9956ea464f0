use std::sync::OnceLock;

use crate::models::ECLevel;

/// Quiet zone used when `QR_QUIET_ZONE` is unset or unparsable
pub const DEFAULT_QUIET_ZONE: usize = 4;
/// Widest quiet zone accepted anywhere in the crate
pub const MAX_QUIET_ZONE: usize = 16;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Generation diagnostics go to stderr when `QR_DEBUG` is set to anything but `0`
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok_and(|v| v.trim() != "0"))
}

pub(crate) fn quiet_zone_from_env() -> usize {
    *QUIET_ZONE.get_or_init(|| {
        parse_env_usize("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE).min(MAX_QUIET_ZONE)
    })
}

/// Encoder settings
///
/// Error correction is pinned to level L; the field exists so the format
/// information is derived from configuration rather than a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Light border, in modules, recorded on every generated symbol
    pub quiet_zone: usize,
    /// Error correction level, always L
    pub ec_level: ECLevel,
}

impl EncoderConfig {
    /// Same config with a quiet zone clamped to [`MAX_QUIET_ZONE`]
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules.min(MAX_QUIET_ZONE);
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quiet_zone: quiet_zone_from_env(),
            ec_level: ECLevel::L,
        }
    }
}
