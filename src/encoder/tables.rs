use crate::error::EncodeError;
use crate::models::Version;

/// Bits taken by the byte-mode indicator and the 8-bit character count
pub const HEADER_BITS: usize = 4 + 8;

/// Per-version layout and capacity at error correction level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// Version number, 2-5
    pub version: u8,
    /// Modules per side, `17 + 4 * version`
    pub module_count: usize,
    /// Data codeword capacity in bits, before error correction
    pub data_capacity_bits: usize,
    /// Reed-Solomon parity codewords appended to the data
    pub ecc_codewords: usize,
    /// Alignment pattern centre coordinates, combined pairwise
    pub alignment_centers: &'static [usize],
    /// Largest payload (bytes) for which this version is selected
    pub selection_limit: usize,
}

impl VersionInfo {
    /// Data codewords before error correction
    pub fn data_codewords(&self) -> usize {
        self.data_capacity_bits / 8
    }

    /// Largest byte-mode payload that fits the data capacity
    pub fn byte_capacity(&self) -> usize {
        (self.data_capacity_bits - HEADER_BITS) / 8
    }
}

// Single-block versions only, so codewords are never interleaved.
const VERSION_TABLE: [VersionInfo; 4] = [
    VersionInfo {
        version: 2,
        module_count: 25,
        data_capacity_bits: 272,
        ecc_codewords: 10,
        alignment_centers: &[6, 18],
        selection_limit: 20,
    },
    VersionInfo {
        version: 3,
        module_count: 29,
        data_capacity_bits: 440,
        ecc_codewords: 15,
        alignment_centers: &[6, 22],
        selection_limit: 32,
    },
    VersionInfo {
        version: 4,
        module_count: 33,
        data_capacity_bits: 640,
        ecc_codewords: 20,
        alignment_centers: &[6, 26],
        selection_limit: 46,
    },
    VersionInfo {
        version: 5,
        module_count: 37,
        data_capacity_bits: 864,
        ecc_codewords: 26,
        alignment_centers: &[6, 30],
        selection_limit: 106,
    },
];

/// Table entry for `version`
pub fn version_info(version: Version) -> &'static VersionInfo {
    &VERSION_TABLE[(version.number() - Version::MIN.number()) as usize]
}

/// Pick the smallest version whose selection limit covers `byte_len`.
///
/// Inputs beyond the byte capacity of the largest version are rejected
/// rather than truncated.
pub fn select_version(byte_len: usize) -> Result<Version, EncodeError> {
    VERSION_TABLE
        .iter()
        .find(|info| byte_len <= info.selection_limit)
        .and_then(|info| Version::new(info.version))
        .ok_or(EncodeError::DataTooLarge {
            len: byte_len,
            max: max_payload_bytes(),
        })
}

/// Largest payload accepted by [`select_version`]
pub fn max_payload_bytes() -> usize {
    VERSION_TABLE[VERSION_TABLE.len() - 1].byte_capacity()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(len: usize) -> u8 {
        select_version(len).map(|v| v.number()).unwrap()
    }

    #[test]
    fn test_select_version_thresholds() {
        assert_eq!(selected(0), 2);
        assert_eq!(selected(5), 2);
        assert_eq!(selected(20), 2);
        assert_eq!(selected(21), 3);
        assert_eq!(selected(32), 3);
        assert_eq!(selected(33), 4);
        assert_eq!(selected(46), 4);
        assert_eq!(selected(47), 5);
        assert_eq!(selected(106), 5);
    }

    #[test]
    fn test_select_version_too_large() {
        assert_eq!(
            select_version(107),
            Err(EncodeError::DataTooLarge { len: 107, max: 106 })
        );
    }

    #[test]
    fn test_table_consistency() {
        for info in &VERSION_TABLE {
            let version = Version::new(info.version).unwrap();
            assert_eq!(version.module_count(), info.module_count);
            assert_eq!(info.data_capacity_bits % 8, 0);
            assert!(info.selection_limit <= info.byte_capacity());
            assert_eq!(
                *info.alignment_centers.last().unwrap(),
                info.module_count - 7
            );
        }
    }

    #[test]
    fn test_codeword_totals_fill_data_modules() {
        // Total codewords at level L: 44, 70, 100, 134
        let totals: Vec<usize> = VERSION_TABLE
            .iter()
            .map(|info| info.data_codewords() + info.ecc_codewords)
            .collect();
        assert_eq!(totals, vec![44, 70, 100, 134]);
    }
}
