use crate::encoder::canvas::Canvas;
use crate::models::{ECLevel, MaskPattern};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const GENERATOR: u16 = 0x537;
/// XOR applied so format bits are never all zero
const FORMAT_MASK: u16 = 0x5412;

/// Format bits for level L with mask pattern 0: 111011111000100
pub const FORMAT_BITS_L_MASK0: u16 = 0x77C4;

/// Format info is 15 bits (5 data + 10 ECC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatInfo {
    /// Error correction level encoded in the top two data bits
    pub ec_level: ECLevel,
    /// Mask pattern encoded in the low three data bits
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format info for a level and mask pair
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// 15-bit masked BCH codeword, bit 14 first
    pub fn bits(&self) -> u16 {
        let data =
            ((self.ec_level.format_bits() as u16) << 3) | self.mask_pattern.format_bits() as u16;
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * GENERATOR);
        }
        ((data << 10) | (rem & 0x3FF)) ^ FORMAT_MASK
    }

    /// Write both copies of the format bits and the dark module
    pub fn place(&self, canvas: &mut Canvas) {
        let bits = self.bits();
        for (i, (row, col)) in primary_positions().into_iter().enumerate() {
            canvas.set_function(row, col, bit(bits, i));
        }
        for (i, (row, col)) in secondary_positions(canvas.size()).into_iter().enumerate() {
            canvas.set_function(row, col, bit(bits, i));
        }
        canvas.set_function(canvas.size() - 8, 8, true);
    }
}

/// Mark both format runs and the dark module as function modules
pub(crate) fn reserve(canvas: &mut Canvas) {
    let size = canvas.size();
    for (row, col) in primary_positions()
        .into_iter()
        .chain(secondary_positions(size))
    {
        canvas.set_function(row, col, false);
    }
    canvas.set_function(size - 8, 8, true);
}

fn bit(bits: u16, i: usize) -> bool {
    (bits >> i) & 1 == 1
}

/// (row, col) of format bit i around the top-left finder
pub fn primary_positions() -> [(usize, usize); 15] {
    let mut positions = [(0, 0); 15];
    for (i, pos) in positions.iter_mut().enumerate() {
        *pos = match i {
            0..=5 => (i, 8),
            6 => (7, 8),
            7 => (8, 8),
            8 => (8, 7),
            _ => (8, 14 - i),
        };
    }
    positions
}

/// (row, col) of format bit i split between the top-right and bottom-left finders
pub fn secondary_positions(size: usize) -> [(usize, usize); 15] {
    let mut positions = [(0, 0); 15];
    for (i, pos) in positions.iter_mut().enumerate() {
        *pos = if i < 8 {
            (8, size - 1 - i)
        } else {
            (size - 15 + i, 8)
        };
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l_mask0_constant() {
        assert_eq!(FormatInfo::default().bits(), FORMAT_BITS_L_MASK0);
        assert_eq!(
            FormatInfo::new(ECLevel::L, MaskPattern::Pattern0).bits(),
            0b111011111000100
        );
    }

    #[test]
    fn test_positions_avoid_timing() {
        let primary = primary_positions();
        assert!(primary.iter().all(|&(r, c)| r != 6 && c != 6));
        assert_eq!(primary[8], (8, 7));
        assert_eq!(primary[9], (8, 5));
        assert_eq!(primary[14], (8, 0));

        let secondary = secondary_positions(25);
        assert_eq!(secondary[0], (8, 24));
        assert_eq!(secondary[7], (8, 17));
        assert_eq!(secondary[8], (18, 8));
        assert_eq!(secondary[14], (24, 8));
    }

    #[test]
    fn test_place_writes_both_copies() {
        let mut canvas = Canvas::new(25);
        FormatInfo::default().place(&mut canvas);
        let read = |positions: [(usize, usize); 15]| {
            positions
                .iter()
                .enumerate()
                .fold(0u16, |acc, (i, &(r, c))| acc | ((canvas.get(r, c) as u16) << i))
        };
        assert_eq!(read(primary_positions()), FORMAT_BITS_L_MASK0);
        assert_eq!(read(secondary_positions(25)), FORMAT_BITS_L_MASK0);
        assert!(canvas.get(17, 8));
        assert!(canvas.is_function(17, 8));
    }
}
