//! Byte-mode bit stream construction

use crate::encoder::tables::HEADER_BITS;
use crate::error::EncodeError;
use crate::models::Version;

/// Mode indicator for byte mode
const MODE_BYTE: u32 = 0b0100;
/// Pad codewords alternated after the terminator
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Append-only sequence of bits, most significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Append the low `len` bits of `value`, MSB first
    pub fn append_bits(&mut self, value: u32, len: usize) {
        assert!(len <= 32 && (len == 32 || value >> len == 0));
        self.bits.extend((0..len).rev().map(|i| (value >> i) & 1 == 1));
    }

    /// Append whole bytes, MSB first
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.append_bits(byte as u32, 8);
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits have been written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Written bits in order
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Encode `payload` as a byte-mode segment padded to the version's data capacity.
///
/// The returned buffer is exactly `data_capacity_bits` long.
pub fn encode_data(payload: &[u8], version: Version) -> Result<BitBuffer, EncodeError> {
    let info = version.info();
    let capacity = info.data_capacity_bits;
    if payload.len() > info.byte_capacity() {
        return Err(EncodeError::DataTooLarge {
            len: payload.len(),
            max: info.byte_capacity(),
        });
    }

    let mut buffer = BitBuffer::with_capacity(capacity);
    buffer.append_bits(MODE_BYTE, 4);
    buffer.append_bits(payload.len() as u32, 8);
    buffer.append_bytes(payload);
    debug_assert_eq!(buffer.len(), HEADER_BITS + payload.len() * 8);

    // Terminator, clipped to the remaining capacity
    let terminator = (capacity - buffer.len()).min(4);
    buffer.append_bits(0, terminator);

    let to_boundary = (8 - buffer.len() % 8) % 8;
    buffer.append_bits(0, to_boundary);

    for &pad in PAD_CODEWORDS.iter().cycle() {
        if buffer.len() >= capacity {
            break;
        }
        buffer.append_bits(pad as u32, 8);
    }

    debug_assert_eq!(buffer.len(), capacity);
    Ok(buffer)
}
