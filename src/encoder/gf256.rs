/// GF(256) arithmetic for QR error correction
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
pub struct Gf256;

/// x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    exp: [u8; 255],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 255];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    Tables { exp, log }
}

// Evaluated at compile time; read-only for the life of the process.
static TABLES: Tables = build_tables();

impl Gf256 {
    /// alpha^n, reduced modulo the group order 255
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }

    /// Discrete logarithm of a non-zero element
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            return None;
        }
        Some(TABLES.log[a as usize])
    }

    /// Field product via log/antilog lookup
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[(log_a + log_b) % 255]
    }

    /// Generator polynomial prod_{i=0}^{degree-1} (x - alpha^i).
    ///
    /// Coefficients are in descending order of power; the leading coefficient
    /// is always 1 and the result has `degree + 1` entries.
    pub fn generator_polynomial(degree: usize) -> Vec<u8> {
        let mut poly = Vec::with_capacity(degree + 1);
        poly.push(1u8);
        for i in 0..degree {
            let root = Self::exp(i);
            // Multiply by (x + root); subtraction is XOR in GF(2^8)
            poly.push(0);
            for j in (1..poly.len()).rev() {
                poly[j] ^= Self::mul(poly[j - 1], root);
            }
        }
        poly
    }
}
