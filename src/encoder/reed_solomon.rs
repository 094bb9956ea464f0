//! Reed-Solomon error correction for QR codes
//!
//! QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1

use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

/// Exp table is doubled so `exp[log a + log b]` never needs a modulo
struct Tables {
    exp: [u8; 512],
    log: [u8; 256],
}

impl Tables {
    fn build() -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Self { exp, log }
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::build)
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// Product in GF(256)
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        tables().exp[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> u8 {
        assert!(a != 0, "log of zero is undefined");
        tables().log[a as usize]
    }
}

/// Coefficients of prod_{i < degree} (x - alpha^i), leading 1 dropped,
/// highest power first.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    assert!(
        (1..=254).contains(&degree),
        "unsupported ECC codeword count {degree}"
    );
    let mut result = vec![0u8; degree];
    result[degree - 1] = 1;

    let mut root = 1u8;
    for _ in 0..degree {
        for j in 0..degree {
            result[j] = Gf256::mul(result[j], root);
            if j + 1 < degree {
                result[j] ^= result[j + 1];
            }
        }
        root = Gf256::mul(root, 0x02);
    }
    result
}

/// Reed-Solomon encoder producing a fixed number of parity codewords
pub struct ReedSolomonEncoder {
    divisor: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Panics if `ecc_count` is outside 1..=254.
    pub fn new(ecc_count: usize) -> Self {
        Self {
            divisor: generator_polynomial(ecc_count),
        }
    }

    /// Parity codewords produced per block
    pub fn ecc_count(&self) -> usize {
        self.divisor.len()
    }

    /// Remainder of data * x^n divided by the generator polynomial
    pub fn ecc(&self, data: &[u8]) -> Vec<u8> {
        let n = self.divisor.len();
        let mut register = vec![0u8; n];
        for &byte in data {
            let factor = byte ^ register[0];
            register.copy_within(1.., 0);
            register[n - 1] = 0;
            if factor != 0 {
                for (slot, &coef) in register.iter_mut().zip(&self.divisor) {
                    *slot ^= Gf256::mul(coef, factor);
                }
            }
        }
        register
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator_logs(degree: usize) -> Vec<u8> {
        generator_polynomial(degree)
            .into_iter()
            .map(Gf256::log)
            .collect()
    }

    /// Evaluate a codeword (highest power first) at alpha^i
    fn syndrome(codeword: &[u8], i: usize) -> u8 {
        let x = Gf256::exp(i);
        codeword
            .iter()
            .fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
    }

    #[test]
    fn test_gf256_tables() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::log(2), 1);
        assert_eq!(Gf256::log(29), 8);
        for a in 1..=255u8 {
            assert_eq!(Gf256::exp(Gf256::log(a) as usize), a);
        }
    }

    #[test]
    fn test_gf256_mul() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        assert_eq!(Gf256::mul(2, 128), 29);
        assert_eq!(Gf256::mul(0x53, 0xCA), Gf256::mul(0xCA, 0x53));
    }

    #[test]
    fn test_generator_matches_published_tables() {
        assert_eq!(generator_logs(7), vec![87, 229, 146, 149, 238, 102, 21]);
        assert_eq!(
            generator_logs(10),
            vec![251, 67, 46, 61, 118, 70, 64, 94, 32, 45]
        );
        assert_eq!(
            generator_logs(15),
            vec![8, 183, 61, 91, 202, 37, 51, 58, 58, 237, 140, 124, 5, 99, 105]
        );
        assert_eq!(
            generator_logs(20),
            vec![
                17, 60, 79, 50, 61, 163, 26, 187, 202, 180, 221, 225, 83, 239, 156, 164, 212, 212,
                188, 190
            ]
        );
    }

    #[test]
    fn test_generator_degree_26_has_every_root() {
        let mut full = vec![1u8];
        full.extend(generator_polynomial(26));
        for i in 0..26 {
            assert_eq!(syndrome(&full, i), 0, "alpha^{i} is not a root");
        }
    }

    #[test]
    fn test_ecc_known_vector() {
        // "HELLO WORLD" as 1-M data codewords
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let ecc = ReedSolomonEncoder::new(10).ecc(&data);
        assert_eq!(ecc, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_codeword_syndromes_are_zero() {
        let data: Vec<u8> = (0u8..108).map(|b| b.wrapping_mul(37)).collect();
        for ecc_count in [10, 15, 20, 26] {
            let encoder = ReedSolomonEncoder::new(ecc_count);
            assert_eq!(encoder.ecc_count(), ecc_count);
            let mut codeword = data.clone();
            codeword.extend(encoder.ecc(&data));
            for i in 0..ecc_count {
                assert_eq!(syndrome(&codeword, i), 0);
            }
        }
    }

    #[test]
    fn test_zero_data_has_zero_ecc() {
        assert_eq!(ReedSolomonEncoder::new(15).ecc(&[0; 20]), vec![0; 15]);
    }

    #[test]
    #[should_panic(expected = "unsupported ECC codeword count")]
    fn test_zero_ecc_count_panics() {
        ReedSolomonEncoder::new(0);
    }
}
